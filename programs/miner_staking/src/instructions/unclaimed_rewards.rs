use anchor_lang::prelude::*;

use crate::{constants::*, errors::ErrorCode, state::*, utils::now_ts};

#[derive(Accounts)]
pub struct MinerBatchView<'info> {
    #[account(has_one = output_factor_log)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    pub output_factor_log: Box<Account<'info, OutputFactorLog>>,

    #[account(has_one = mining_pool, seeds = [
            SEED_MINER_LEDGER,
            mining_pool.key().as_ref(),
            miner_ledger.owner.as_ref(),
        ],
        bump = miner_ledger.bump)]
    pub miner_ledger: Box<Account<'info, MinerLedger>>,

    #[account(has_one = miner_ledger, seeds = [
            SEED_MINER_BATCH,
            miner_ledger.key().as_ref(),
            &miner_batch.index.to_le_bytes(),
        ],
        bump = miner_batch.bump)]
    pub miner_batch: Box<Account<'info, MinerBatch>>,
}

/// Read only. Returns the token units claiming `positions` of the batch up to
/// `target_ts` would pay, one amount per position.
pub fn handler(
    ctx: Context<MinerBatchView>,
    positions: Vec<u32>,
    target_ts: i64,
) -> Result<Vec<u64>> {
    require!(
        !positions.is_empty() && positions.len() <= MAX_CLAIM_BATCH,
        ErrorCode::InvalidClaimBatch
    );

    let now = now_ts()?;
    let pool = &ctx.accounts.mining_pool;
    let hash_rates = pool.hash_rates()?;
    let records = ctx.accounts.output_factor_log.occurred(now);
    let batch = &ctx.accounts.miner_batch;

    positions
        .iter()
        .map(|&slot| {
            batch.unclaimed_rewards(hash_rates, records, now, pool.reward_scale, slot, target_ts)
        })
        .collect()
}
