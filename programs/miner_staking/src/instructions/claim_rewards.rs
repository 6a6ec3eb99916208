use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    events::RewardsClaimed,
    state::*,
    utils::{assert_covers, now_ts},
};

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    // pool
    #[account(mut, has_one = pool_authority, has_one = output_factor_log, has_one = reward_pot)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    /// CHECK: signs the payout, checked via has_one and seeds
    #[account(seeds = [mining_pool.key().as_ref()], bump = mining_pool.pool_authority_bump_seed[0])]
    pub pool_authority: UncheckedAccount<'info>,

    pub output_factor_log: Box<Account<'info, OutputFactorLog>>,

    // ledger
    #[account(has_one = mining_pool, has_one = owner,
        seeds = [
            SEED_MINER_LEDGER,
            mining_pool.key().as_ref(),
            owner.key().as_ref(),
        ],
        bump = miner_ledger.bump)]
    pub miner_ledger: Box<Account<'info, MinerLedger>>,

    #[account(mut, has_one = miner_ledger, seeds = [
            SEED_MINER_BATCH,
            miner_ledger.key().as_ref(),
            &miner_batch.index.to_le_bytes(),
        ],
        bump = miner_batch.bump)]
    pub miner_batch: Box<Account<'info, MinerBatch>>,

    pub owner: Signer<'info>,

    // reward
    #[account(mut, seeds = [
            SEED_REWARD_POT,
            mining_pool.key().as_ref(),
            mining_pool.reward_mint.as_ref(),
        ],
        bump)]
    pub reward_pot: Box<Account<'info, TokenAccount>>,

    #[account(mut, token::mint = mining_pool.reward_mint)]
    pub reward_destination: Box<Account<'info, TokenAccount>>,

    // misc
    pub token_program: Program<'info, Token>,
}

impl<'info> ClaimRewards<'info> {
    fn transfer_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.reward_pot.to_account_info(),
                to: self.reward_destination.to_account_info(),
                authority: self.pool_authority.to_account_info(),
            },
        )
    }
}

/// `positions` are slots of the passed batch; claims over several batches
/// take one instruction each.
pub fn handler(ctx: Context<ClaimRewards>, positions: Vec<u32>, target_ts: Vec<i64>) -> Result<()> {
    let now = now_ts()?;
    let pool = &ctx.accounts.mining_pool;
    pool.assert_can_claim(now)?;

    let hash_rates = *pool.hash_rates()?;
    let reward_scale = pool.reward_scale;
    let records = ctx.accounts.output_factor_log.occurred(now);

    let settlements = ctx.accounts.miner_batch.settle_claims(
        &hash_rates,
        records,
        now,
        reward_scale,
        &positions,
        &target_ts,
    )?;
    let total = total_settled(&settlements)?;

    assert_covers(ctx.accounts.reward_pot.amount, total)?;

    if total > 0 {
        token::transfer(
            ctx.accounts
                .transfer_ctx()
                .with_signer(&[&ctx.accounts.mining_pool.pool_seeds()]),
            total,
        )?;
    }

    let batch_index = ctx.accounts.miner_batch.index;
    let pool = &mut ctx.accounts.mining_pool;
    pool.record_claim(total)?;

    for settlement in settlements.iter() {
        emit!(RewardsClaimed {
            mining_pool: pool.key(),
            owner: ctx.accounts.owner.key(),
            batch: batch_index,
            position: settlement.position,
            accrued: settlement.accrual.amount,
            amount: settlement.payout,
            latest_claimed_ts: settlement.accrual.claimed_to,
            recent_adjust_index: settlement.accrual.recent_adjust_index,
        });
    }

    msg!("{} reward tokens claimed", total);
    Ok(())
}
