use anchor_lang::prelude::*;

use crate::{constants::SEED_FREE_MINER, state::*, utils::now_ts};

#[derive(Accounts)]
pub struct UnclaimedFreeRewards<'info> {
    #[account(has_one = mining_pool)]
    pub free_mining_pool: Box<Account<'info, FreeMiningPool>>,

    #[account(has_one = output_factor_log)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    pub output_factor_log: Box<Account<'info, OutputFactorLog>>,

    #[account(has_one = free_mining_pool, seeds = [
            SEED_FREE_MINER,
            free_mining_pool.key().as_ref(),
            free_miner.owner.as_ref(),
        ],
        bump = free_miner.bump)]
    pub free_miner: Box<Account<'info, FreeMiner>>,
}

pub fn handler(ctx: Context<UnclaimedFreeRewards>, target_ts: i64) -> Result<u64> {
    let now = now_ts()?;
    let records = ctx.accounts.output_factor_log.occurred(now);

    let reward_scale = ctx.accounts.free_mining_pool.reward_scale;

    ctx.accounts
        .free_miner
        .position
        .unclaimed_rewards(records, now, target_ts, reward_scale)
}
