use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, events::MiningPoolInitialized, state::*, utils::now_ts};

#[derive(Accounts)]
pub struct InitMiningPool<'info> {
    // pool
    #[account(init, payer = payer, space = DISCRIMINATOR_SIZE + MiningPool::INIT_SPACE)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    pub manager: Signer<'info>,

    /// CHECK: signs reward payouts and owns the miner boxes, never holds data
    #[account(seeds = [mining_pool.key().as_ref()], bump)]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(init, seeds = [
            SEED_OUTPUT_FACTOR_LOG,
            mining_pool.key().as_ref(),
        ],
        bump,
        payer = payer,
        space = DISCRIMINATOR_SIZE + OutputFactorLog::INIT_SPACE)]
    pub output_factor_log: Box<Account<'info, OutputFactorLog>>,

    // reward
    #[account(init, seeds = [
            SEED_REWARD_POT,
            mining_pool.key().as_ref(),
            reward_mint.key().as_ref(),
        ],
        bump,
        token::mint = reward_mint,
        token::authority = pool_authority,
        payer = payer)]
    pub reward_pot: Box<Account<'info, TokenAccount>>,

    pub reward_mint: Box<Account<'info, Mint>>,

    // misc
    #[account(mut)]
    pub payer: Signer<'info>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handler(ctx: Context<InitMiningPool>, config: MiningPoolConfig) -> Result<()> {
    let window = config.validate()?;
    let now = now_ts()?;

    let pool_key = ctx.accounts.mining_pool.key();
    let pool = &mut ctx.accounts.mining_pool;

    pool.version = LATEST_MINING_POOL_VERSION;
    pool.manager = ctx.accounts.manager.key();
    pool.pool_authority = ctx.accounts.pool_authority.key();
    pool.pool_authority_seed = pool_key;
    pool.pool_authority_bump_seed = [ctx.bumps.pool_authority];
    pool.output_factor_log = ctx.accounts.output_factor_log.key();
    pool.reward_mint = ctx.accounts.reward_mint.key();
    pool.reward_pot = ctx.accounts.reward_pot.key();
    pool.reward_scale = config.reward_scale;
    pool.miner_mints = config.miner_mints;
    pool.window = window;
    pool.paused = false;

    // the log always starts with one occurred record
    ctx.accounts
        .output_factor_log
        .init(pool_key, now, config.initial_output_factor);

    emit!(MiningPoolInitialized {
        mining_pool: pool_key,
        manager: pool.manager,
        reward_mint: pool.reward_mint,
        initial_output_factor: config.initial_output_factor,
        reward_scale: config.reward_scale,
        start_ts: window.start_ts,
        end_ts: window.end_ts,
    });

    msg!("new mining pool initialized");
    Ok(())
}
