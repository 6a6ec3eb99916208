use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::ErrorCode, state::*};

#[derive(Accounts)]
pub struct InitFreeMiningPool<'info> {
    // base pool
    #[account(has_one = manager @ ErrorCode::Unauthorized, has_one = reward_mint)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    pub manager: Signer<'info>,

    // free pool
    #[account(init, seeds = [
            SEED_FREE_MINING_POOL,
            mining_pool.key().as_ref(),
        ],
        bump,
        payer = payer,
        space = DISCRIMINATOR_SIZE + FreeMiningPool::INIT_SPACE)]
    pub free_mining_pool: Box<Account<'info, FreeMiningPool>>,

    // reward
    #[account(init, seeds = [
            SEED_REWARD_POT,
            free_mining_pool.key().as_ref(),
            reward_mint.key().as_ref(),
        ],
        bump,
        token::mint = reward_mint,
        token::authority = free_mining_pool,
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

pub fn handler(ctx: Context<InitFreeMiningPool>) -> Result<()> {
    let free_pool = &mut ctx.accounts.free_mining_pool;

    free_pool.mining_pool = ctx.accounts.mining_pool.key();
    free_pool.reward_mint = ctx.accounts.reward_mint.key();
    free_pool.reward_pot = ctx.accounts.reward_pot.key();
    free_pool.reward_scale = ctx.accounts.mining_pool.reward_scale;
    free_pool.bump = ctx.bumps.free_mining_pool;
    free_pool.paused = false;

    msg!("free mining pool initialized for {}", free_pool.mining_pool);
    Ok(())
}
