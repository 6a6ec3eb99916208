use anchor_lang::prelude::*;

use crate::{errors::ErrorCode, state::AdjustRecord};

/// reward earned by `hash_rate` at a constant `output_factor` for `duration` seconds
pub fn reward_by_hash_rate(hash_rate: u64, output_factor: u64, duration: i64) -> Result<u128> {
    let duration = u128::try_from(duration).map_err(|_| error!(ErrorCode::InvalidTarget))?;

    (hash_rate as u128)
        .checked_mul(output_factor as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_mul(duration)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

/// Integrates `hash_rate * output_factor` over `[from_ts, to_ts)`.
///
/// `records` must be the occurred prefix of the log and `from_index` the
/// record in effect at `from_ts`. The interval is split at every record whose
/// effective_ts falls strictly inside it; each piece is paid at the factor in
/// effect at its start.
///
/// Returns the index of the last record consulted, to be cached for the next
/// call, and the exact amount.
pub fn calculate_rewards(
    hash_rate: u64,
    records: &[AdjustRecord],
    from_index: usize,
    from_ts: i64,
    to_ts: i64,
) -> Result<(usize, u128)> {
    require!(from_ts <= to_ts, ErrorCode::InvalidTarget);
    require!(from_index < records.len(), ErrorCode::OutOfRange);

    if from_ts == to_ts {
        return Ok((from_index, 0));
    }

    let mut index = from_index;
    let mut cursor_ts = from_ts;
    let mut total: u128 = 0;

    loop {
        let output_factor = records[index].output_factor;

        match records.get(index + 1) {
            Some(next) if next.effective_ts < to_ts => {
                let boundary = next.effective_ts.max(cursor_ts);
                total = total
                    .checked_add(reward_by_hash_rate(
                        hash_rate,
                        output_factor,
                        boundary - cursor_ts,
                    )?)
                    .ok_or(ErrorCode::MathOverflow)?;

                cursor_ts = boundary;
                index += 1;
            }
            _ => {
                total = total
                    .checked_add(reward_by_hash_rate(
                        hash_rate,
                        output_factor,
                        to_ts - cursor_ts,
                    )?)
                    .ok_or(ErrorCode::MathOverflow)?;

                return Ok((index, total));
            }
        }
    }
}

/// Outcome of settling a position up to some target timestamp.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Accrual {
    pub recent_adjust_index: u32,

    /// target capped at the position's end_ts
    pub claimed_to: i64,

    /// raw reward, before `reward_scale` is applied
    pub amount: u128,
}

/// Claim-side view shared by indexed and free positions.
///
/// The target must not be in the future, and once capped at `end_ts` it must
/// land strictly after `latest_claimed_ts`; anything else is `InvalidTarget`,
/// so a settled interval can never be paid twice.
pub fn accrue_until(
    hash_rate: u64,
    records: &[AdjustRecord],
    now: i64,
    end_ts: i64,
    latest_claimed_ts: i64,
    recent_adjust_index: u32,
    target_ts: i64,
) -> Result<Accrual> {
    require!(target_ts <= now, ErrorCode::InvalidTarget);

    let claimed_to = std::cmp::min(target_ts, end_ts);
    require!(claimed_to > latest_claimed_ts, ErrorCode::InvalidTarget);

    let (index, amount) = calculate_rewards(
        hash_rate,
        records,
        recent_adjust_index as usize,
        latest_claimed_ts,
        claimed_to,
    )?;

    Ok(Accrual {
        recent_adjust_index: u32::try_from(index).map_err(|_| error!(ErrorCode::MathOverflow))?,
        claimed_to,
        amount,
    })
}

/// Token units owed when a running raw total grows from `claimed` by
/// `accrued`. Both are divided by `reward_scale` as totals, so the remainder
/// of one claim is paid out by a later one.
pub fn scaled_payout(claimed: u128, accrued: u128, reward_scale: u64) -> Result<u64> {
    require!(reward_scale > 0, ErrorCode::InvalidRewardScale);

    let scale = reward_scale as u128;
    let total = claimed
        .checked_add(accrued)
        .ok_or(ErrorCode::MathOverflow)?;

    u64::try_from(total / scale - claimed / scale).map_err(|_| error!(ErrorCode::MathOverflow))
}
