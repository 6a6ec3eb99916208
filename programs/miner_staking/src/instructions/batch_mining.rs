use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    errors::ErrorCode,
    events::MinersOpened,
    state::*,
    utils::now_ts,
};

#[derive(Accounts)]
#[instruction(miner_type: u8, count: u32)]
pub struct BatchMining<'info> {
    // pool
    #[account(mut, has_one = output_factor_log)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    /// CHECK: only used as the miner box authority
    #[account(seeds = [mining_pool.key().as_ref()], bump = mining_pool.pool_authority_bump_seed[0])]
    pub pool_authority: UncheckedAccount<'info>,

    pub output_factor_log: Box<Account<'info, OutputFactorLog>>,

    // ledger
    #[account(mut, has_one = mining_pool, has_one = owner,
        seeds = [
            SEED_MINER_LEDGER,
            mining_pool.key().as_ref(),
            owner.key().as_ref(),
        ],
        bump = miner_ledger.bump)]
    pub miner_ledger: Box<Account<'info, MinerLedger>>,

    // an oversized count still fails in the handler
    #[account(init, seeds = [
            SEED_MINER_BATCH,
            miner_ledger.key().as_ref(),
            &miner_ledger.batch_count.to_le_bytes(),
        ],
        bump,
        payer = owner,
        space = MinerBatch::space(count.min(MAX_BATCH_MINING) as usize))]
    pub miner_batch: Box<Account<'info, MinerBatch>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    // miner
    #[account(init_if_needed, seeds = [
            SEED_MINER_BOX,
            mining_pool.key().as_ref(),
            miner_mint.key().as_ref(),
        ],
        bump,
        token::mint = miner_mint,
        token::authority = pool_authority,
        payer = owner)]
    pub miner_box: Box<Account<'info, TokenAccount>>,

    #[account(mut, token::mint = miner_mint, token::authority = owner)]
    pub miner_source: Box<Account<'info, TokenAccount>>,

    pub miner_mint: Box<Account<'info, Mint>>,

    // misc
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> BatchMining<'info> {
    fn transfer_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.miner_source.to_account_info(),
                to: self.miner_box.to_account_info(),
                authority: self.owner.to_account_info(),
            },
        )
    }
}

pub fn handler(ctx: Context<BatchMining>, miner_type: u8, count: u32) -> Result<()> {
    let now = now_ts()?;
    let pool = &*ctx.accounts.mining_pool;
    pool.assert_can_open(now)?;

    let miner_type = MinerType::try_from(miner_type)?;
    require_keys_eq!(
        pool.miner_mint(miner_type),
        ctx.accounts.miner_mint.key(),
        ErrorCode::InvalidMinerType
    );

    let recent_adjust_index = ctx.accounts.output_factor_log.current_index(now)?;
    let ledger_key = ctx.accounts.miner_ledger.key();
    let batch_index = ctx.accounts.miner_ledger.record_batch(count)?;

    let batch = &mut ctx.accounts.miner_batch;
    batch.miner_ledger = ledger_key;
    batch.index = batch_index;
    batch.bump = ctx.bumps.miner_batch;
    batch.open(miner_type, count, now, recent_adjust_index)?;
    let end_ts = batch.position(0)?.end_ts;

    // fails the whole call if the owner holds fewer than `count` miners
    token::transfer(ctx.accounts.transfer_ctx(), count as u64)?;

    let pool = &mut ctx.accounts.mining_pool;
    pool.record_positions(count)?;

    emit!(MinersOpened {
        mining_pool: pool.key(),
        owner: ctx.accounts.owner.key(),
        miner_type: miner_type as u8,
        batch: batch_index,
        count,
        start_ts: now,
        end_ts,
    });

    Ok(())
}
