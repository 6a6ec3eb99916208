use anchor_lang::prelude::*;

use crate::{
    constants::MAX_VIEW_RECORDS,
    errors::ErrorCode,
    state::*,
    utils::{calculate_rewards, now_ts, reward_by_hash_rate},
};

/// Read only access to a pool's output factor log. Which records have
/// occurred depends on the clock, so these are served on chain.
#[derive(Accounts)]
pub struct OutputFactorView<'info> {
    #[account(has_one = output_factor_log)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    pub output_factor_log: Box<Account<'info, OutputFactorLog>>,
}

pub fn occurred_count_handler(ctx: Context<OutputFactorView>) -> Result<u32> {
    let now = now_ts()?;
    let count = ctx.accounts.output_factor_log.occurred_count(now);

    u32::try_from(count).map_err(|_| error!(ErrorCode::MathOverflow))
}

pub fn latest_record_handler(ctx: Context<OutputFactorView>) -> Result<AdjustRecord> {
    ctx.accounts.output_factor_log.latest()
}

pub fn record_handler(
    ctx: Context<OutputFactorView>,
    index: u32,
    allow_pending: bool,
) -> Result<AdjustRecord> {
    let now = now_ts()?;

    ctx.accounts
        .output_factor_log
        .segment(index as usize, now, allow_pending)
}

/// occurred records `from..=to`, at most MAX_VIEW_RECORDS of them
pub fn records_handler(ctx: Context<OutputFactorView>, from: u32, to: u32) -> Result<Vec<AdjustRecord>> {
    let (from, to) = (from as usize, to as usize);
    require!(
        to.saturating_sub(from) < MAX_VIEW_RECORDS,
        ErrorCode::OutOfRange
    );

    let now = now_ts()?;
    let records = ctx.accounts.output_factor_log.range(from, to, now)?;

    Ok(records.to_vec())
}

pub fn reward_by_hash_rate_handler(
    _ctx: Context<OutputFactorView>,
    hash_rate: u64,
    output_factor: u64,
    duration: i64,
) -> Result<u128> {
    reward_by_hash_rate(hash_rate, output_factor, duration)
}

/// raw reward of `hash_rate` over `[from_ts, to_ts)` with the current log
pub fn calculate_rewards_handler(
    ctx: Context<OutputFactorView>,
    hash_rate: u64,
    from_index: u32,
    from_ts: i64,
    to_ts: i64,
) -> Result<u128> {
    let now = now_ts()?;
    require!(to_ts <= now, ErrorCode::InvalidTarget);

    let records = ctx.accounts.output_factor_log.occurred(now);
    let (_, amount) = calculate_rewards(hash_rate, records, from_index as usize, from_ts, to_ts)?;

    Ok(amount)
}
