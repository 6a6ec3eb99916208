use anchor_lang::prelude::*;

use crate::{
    constants::{
        DISCRIMINATOR_SIZE, MAX_BATCH_MINING, MAX_CLAIM_BATCH, MAX_VIEW_POSITIONS,
        MINER_TYPE_COUNT, MINING_DURATION,
    },
    errors::ErrorCode,
    state::AdjustRecord,
    utils::{accrue_until, scaled_payout, Accrual},
};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, InitSpace, AnchorSerialize, AnchorDeserialize)]
pub enum MinerType {
    Type0,
    Type1,
    Type2,
    Type3,
}

impl MinerType {
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for MinerType {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(MinerType::Type0),
            1 => Ok(MinerType::Type1),
            2 => Ok(MinerType::Type2),
            3 => Ok(MinerType::Type3),
            _ => err!(ErrorCode::InvalidMinerType),
        }
    }
}

/// One staked miner unit.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, InitSpace, AnchorSerialize, AnchorDeserialize)]
pub struct MinerPosition {
    pub miner_type: MinerType,

    pub start_ts: i64,

    /// start_ts + MINING_DURATION, rewards stop accruing here
    pub end_ts: i64,

    /// last output factor record already settled for this position
    pub recent_adjust_index: u32,

    /// starts at start_ts, only ever moves forward, never past end_ts
    pub latest_claimed_ts: i64,

    /// raw total, never goes down
    pub rewards_claimed: u128,
}

impl MinerPosition {
    pub fn new(miner_type: MinerType, now: i64, recent_adjust_index: u32) -> Result<Self> {
        Ok(Self {
            miner_type,
            start_ts: now,
            end_ts: now
                .checked_add(MINING_DURATION)
                .ok_or(ErrorCode::MathOverflow)?,
            recent_adjust_index,
            latest_claimed_ts: now,
            rewards_claimed: 0,
        })
    }

    pub fn is_fully_claimed(&self) -> bool {
        self.latest_claimed_ts >= self.end_ts
    }

    pub fn accrue(
        &self,
        hash_rates: &[u64; MINER_TYPE_COUNT],
        records: &[AdjustRecord],
        now: i64,
        target_ts: i64,
    ) -> Result<Accrual> {
        accrue_until(
            hash_rates[self.miner_type.index()],
            records,
            now,
            self.end_ts,
            self.latest_claimed_ts,
            self.recent_adjust_index,
            target_ts,
        )
    }

    /// Applies `accrual` and returns the token units it releases.
    pub fn commit(&mut self, accrual: &Accrual, reward_scale: u64) -> Result<u64> {
        let payout = scaled_payout(self.rewards_claimed, accrual.amount, reward_scale)?;

        self.latest_claimed_ts = accrual.claimed_to;
        self.recent_adjust_index = accrual.recent_adjust_index;
        self.rewards_claimed = self
            .rewards_claimed
            .checked_add(accrual.amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(payout)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub position: u32,
    pub accrual: Accrual,
    pub payout: u64,
}

/// Per-owner header. Positions live in `MinerBatch` accounts numbered
/// `0..batch_count`, one per batch_mining call.
#[repr(C)]
#[account]
#[derive(Debug, InitSpace)]
pub struct MinerLedger {
    pub mining_pool: Pubkey,

    pub owner: Pubkey,

    pub bump: u8,

    pub batch_count: u32,

    pub position_count: u64,
}

impl MinerLedger {
    /// Reserves the next batch index for `count` new positions.
    pub fn record_batch(&mut self, count: u32) -> Result<u32> {
        let index = self.batch_count;

        self.batch_count = index.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        self.position_count = self
            .position_count
            .checked_add(count as u64)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(index)
    }
}

/// Positions opened by one batch_mining call. A slot is the index of a
/// position in `positions`.
#[account]
#[derive(Debug)]
pub struct MinerBatch {
    pub miner_ledger: Pubkey,

    pub index: u32,

    pub bump: u8,

    pub positions: Vec<MinerPosition>,
}

impl MinerBatch {
    pub const BASE_LEN: usize = DISCRIMINATOR_SIZE + 32 + 4 + 1 + 4;

    pub fn space(position_count: usize) -> usize {
        Self::BASE_LEN + position_count * MinerPosition::INIT_SPACE
    }

    pub fn open(
        &mut self,
        miner_type: MinerType,
        count: u32,
        now: i64,
        recent_adjust_index: u32,
    ) -> Result<()> {
        require!(
            count > 0 && count <= MAX_BATCH_MINING,
            ErrorCode::InvalidMiningCount
        );

        let position = MinerPosition::new(miner_type, now, recent_adjust_index)?;
        self.positions = vec![position; count as usize];

        Ok(())
    }

    pub fn position(&self, slot: u32) -> Result<&MinerPosition> {
        self.positions
            .get(slot as usize)
            .ok_or_else(|| error!(ErrorCode::NotOwner))
    }

    /// positions `from..=to`
    pub fn status(&self, from: u32, to: u32) -> Result<&[MinerPosition]> {
        let (from, to) = (from as usize, to as usize);
        require!(
            from <= to && to < self.positions.len() && to - from < MAX_VIEW_POSITIONS,
            ErrorCode::OutOfRange
        );

        Ok(&self.positions[from..=to])
    }

    /// token units a claim of `slot` up to `target_ts` would pay
    pub fn unclaimed_rewards(
        &self,
        hash_rates: &[u64; MINER_TYPE_COUNT],
        records: &[AdjustRecord],
        now: i64,
        reward_scale: u64,
        slot: u32,
        target_ts: i64,
    ) -> Result<u64> {
        let position = self.position(slot)?;
        let accrual = position.accrue(hash_rates, records, now, target_ts)?;

        scaled_payout(position.rewards_claimed, accrual.amount, reward_scale)
    }

    /// Settles every (slot, target) pair in order. Only the slots named are
    /// copied out; they are written back once every pair validates, otherwise
    /// nothing changes.
    pub fn settle_claims(
        &mut self,
        hash_rates: &[u64; MINER_TYPE_COUNT],
        records: &[AdjustRecord],
        now: i64,
        reward_scale: u64,
        slots: &[u32],
        target_ts: &[i64],
    ) -> Result<Vec<Settlement>> {
        require!(
            !slots.is_empty() && slots.len() <= MAX_CLAIM_BATCH && slots.len() == target_ts.len(),
            ErrorCode::InvalidClaimBatch
        );

        let mut touched: Vec<(u32, MinerPosition)> = Vec::with_capacity(slots.len());
        let mut settlements = Vec::with_capacity(slots.len());

        for (&slot, &target) in slots.iter().zip(target_ts) {
            let at = match touched.iter().position(|(s, _)| *s == slot) {
                Some(at) => at,
                None => {
                    touched.push((slot, *self.position(slot)?));
                    touched.len() - 1
                }
            };
            let position = &mut touched[at].1;

            let accrual = position.accrue(hash_rates, records, now, target)?;
            let payout = position.commit(&accrual, reward_scale)?;

            settlements.push(Settlement {
                position: slot,
                accrual,
                payout,
            });
        }

        for (slot, position) in touched {
            if let Some(stored) = self.positions.get_mut(slot as usize) {
                *stored = position;
            }
        }

        Ok(settlements)
    }
}

pub fn total_settled(settlements: &[Settlement]) -> Result<u64> {
    settlements.iter().try_fold(0u64, |total, s| {
        total
            .checked_add(s.payout)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{state::OutputFactorLog, utils::testing::assert_error};

    const T0: i64 = 1_700_000_000;
    const WEEK: i64 = 604_800;
    const HASH_RATES: [u64; MINER_TYPE_COUNT] = [10_000, 25_000, 60_000, 150_000];
    const UNSCALED: u64 = 1;

    fn batch() -> MinerBatch {
        MinerBatch {
            miner_ledger: Pubkey::new_unique(),
            index: 0,
            bump: 255,
            positions: vec![],
        }
    }

    fn log_at(now: i64, factor: u64) -> OutputFactorLog {
        let mut log = OutputFactorLog {
            mining_pool: Pubkey::default(),
            records: vec![],
        };
        log.init(Pubkey::new_unique(), now, factor);
        log
    }

    fn opened(log: &OutputFactorLog, miner_type: MinerType, count: u32, now: i64) -> MinerBatch {
        let mut batch = batch();
        batch
            .open(miner_type, count, now, log.current_index(now).unwrap())
            .unwrap();
        batch
    }

    fn settle(
        batch: &mut MinerBatch,
        log: &OutputFactorLog,
        now: i64,
        slots: &[u32],
        targets: &[i64],
    ) -> Result<Vec<Settlement>> {
        batch.settle_claims(&HASH_RATES, log.occurred(now), now, UNSCALED, slots, targets)
    }

    #[test]
    fn miner_type_from_u8() {
        assert_eq!(MinerType::try_from(3).unwrap(), MinerType::Type3);
        assert_error(MinerType::try_from(4), ErrorCode::InvalidMinerType);
    }

    #[test]
    fn ledger_numbers_batches() {
        let mut ledger = MinerLedger {
            mining_pool: Pubkey::new_unique(),
            owner: Pubkey::new_unique(),
            bump: 255,
            batch_count: 0,
            position_count: 0,
        };

        assert_eq!(ledger.record_batch(10).unwrap(), 0);
        assert_eq!(ledger.record_batch(2).unwrap(), 1);
        assert_eq!(ledger.batch_count, 2);
        assert_eq!(ledger.position_count, 12);
    }

    #[test]
    fn batch_open_creates_independent_positions() {
        let log = log_at(T0, 1);
        let batch = opened(&log, MinerType::Type1, 10, T0);

        assert_eq!(batch.positions.len(), 10);
        let first = batch.positions[0];
        assert_eq!(first.miner_type, MinerType::Type1);
        assert_eq!(first.end_ts - first.start_ts, MINING_DURATION);
        assert_eq!(first.latest_claimed_ts, first.start_ts);
        assert_eq!(first.rewards_claimed, 0);
        assert_eq!(first.recent_adjust_index, 0);
        assert_eq!(batch.positions[9], first);
    }

    #[test]
    fn open_rejects_zero_and_oversized() {
        let mut batch = batch();

        assert_error(
            batch.open(MinerType::Type0, 0, T0, 0),
            ErrorCode::InvalidMiningCount,
        );
        assert_error(
            batch.open(MinerType::Type0, MAX_BATCH_MINING + 1, T0, 0),
            ErrorCode::InvalidMiningCount,
        );
        batch.open(MinerType::Type0, MAX_BATCH_MINING, T0, 0).unwrap();
    }

    #[test]
    fn full_batch_stays_within_account_and_heap_limits() {
        // accounts created through CPI may be at most 10KiB
        assert!(MinerBatch::space(MAX_BATCH_MINING as usize) <= 10_240);

        // borsh preallocates up to 4096 bytes for a Vec, a full batch needs
        // no regrowth when it is deserialized
        assert!(MAX_BATCH_MINING as usize * std::mem::size_of::<MinerPosition>() <= 4_096);
    }

    #[test]
    fn new_position_caches_the_current_record() {
        let mut log = log_at(T0, 1);
        log.apply_now(T0 + 10, 2).unwrap();
        log.schedule_future(T0 + 10, T0 + WEEK, 3).unwrap();

        let batch = opened(&log, MinerType::Type0, 1, T0 + 20);

        assert_eq!(batch.positions[0].recent_adjust_index, 1);
    }

    #[test]
    fn one_week_claim_at_constant_rate() {
        let log = log_at(T0, 1);
        let mut batch = opened(&log, MinerType::Type0, 1, T0);

        let now = T0 + 2 * WEEK;
        let settlements = settle(&mut batch, &log, now, &[0], &[T0 + WEEK]).unwrap();

        assert_eq!(total_settled(&settlements).unwrap(), 10_000 * 604_800);
        assert_eq!(batch.positions[0].latest_claimed_ts, T0 + WEEK);
        assert_eq!(batch.positions[0].rewards_claimed, 10_000 * 604_800);
    }

    #[test]
    fn one_and_a_half_weeks_across_a_rate_change() {
        let mut log = log_at(T0, 1);
        log.schedule_future(T0, T0 + WEEK, 2).unwrap();
        let mut batch = opened(&log, MinerType::Type0, 1, T0);

        let now = T0 + WEEK + WEEK / 2;
        let settlements = settle(&mut batch, &log, now, &[0], &[now]).unwrap();

        let weight = HASH_RATES[0] as u128;
        assert_eq!(
            settlements[0].accrual.amount,
            weight * 604_800 + weight * 302_400 * 2
        );
        assert_eq!(batch.positions[0].recent_adjust_index, 1);
    }

    #[test]
    fn full_lock_at_production_factor_is_claimable_weekly() {
        let factor = 803_571_429u64;
        let scale = 1_000_000_000u64;
        let log = log_at(T0, factor);
        let mut batch = opened(&log, MinerType::Type0, 1, T0);
        let end_ts = batch.positions[0].end_ts;

        let now = T0 + 26 * WEEK;
        let mut paid = 0u64;
        for week in 1..=26i64 {
            let settlements = batch
                .settle_claims(
                    &HASH_RATES,
                    log.occurred(now),
                    now,
                    scale,
                    &[0],
                    &[T0 + week * WEEK],
                )
                .unwrap();
            paid += total_settled(&settlements).unwrap();
        }

        let raw = HASH_RATES[0] as u128 * factor as u128 * MINING_DURATION as u128;
        assert!(raw > u64::MAX as u128);

        let position = batch.positions[0];
        assert_eq!(position.latest_claimed_ts, end_ts);
        assert_eq!(position.rewards_claimed, raw);
        assert_eq!(paid as u128, raw / scale as u128);
        assert!(position.is_fully_claimed());
    }

    #[test]
    fn unclaimed_matches_claim_and_leaves_state_alone() {
        let log = log_at(T0, 803_571_429);
        let mut batch = opened(&log, MinerType::Type1, 2, T0);

        let now = T0 + MINING_DURATION;
        let target = T0 + 600;
        let estimate = batch
            .unclaimed_rewards(&HASH_RATES, log.occurred(now), now, UNSCALED, 0, target)
            .unwrap();
        assert_eq!(estimate, 25_000 * 803_571_429 * 600);
        assert_eq!(batch.positions[0].latest_claimed_ts, T0);

        let settlements = settle(&mut batch, &log, now, &[0], &[target]).unwrap();
        assert_eq!(settlements[0].payout, estimate);

        let claimed = batch.positions[0];
        assert_eq!(claimed.start_ts, T0);
        assert_eq!(claimed.recent_adjust_index, 0);
        assert_eq!(claimed.latest_claimed_ts, target);
        assert_eq!(claimed.rewards_claimed, estimate as u128);

        // the sibling position is untouched
        assert_eq!(batch.positions[1].latest_claimed_ts, T0);
        assert_eq!(batch.positions[1].rewards_claimed, 0);
    }

    #[test]
    fn unclaimed_reports_scaled_units() {
        let log = log_at(T0, 3);
        let mut batch = opened(&log, MinerType::Type0, 1, T0);

        let now = T0 + 100;
        let records = log.occurred(now);
        // 10_000 * 3 * 5 = 150_000 raw
        assert_eq!(
            batch
                .unclaimed_rewards(&HASH_RATES, records, now, 100_000, 0, T0 + 5)
                .unwrap(),
            1
        );

        batch
            .settle_claims(&HASH_RATES, records, now, 100_000, &[0], &[T0 + 5])
            .unwrap();
        // the 50_000 left over joins the next 150_000
        assert_eq!(
            batch
                .unclaimed_rewards(&HASH_RATES, records, now, 100_000, 0, T0 + 10)
                .unwrap(),
            2
        );
    }

    #[test]
    fn multi_step_claims_across_three_changes() {
        let hash_rate = HASH_RATES[3] as u128;
        let mut log = log_at(T0, 1);
        log.schedule_future(T0, T0 + WEEK, 2).unwrap();

        let opened_at = T0 + WEEK + WEEK / 2;
        let mut batch = opened(&log, MinerType::Type3, 6, opened_at);
        let end_ts = batch.positions[0].end_ts;

        log.schedule_future(opened_at, T0 + 2 * WEEK, 3).unwrap();
        let later = T0 + 2 * WEEK + WEEK / 2;
        log.schedule_future(later, T0 + 3 * WEEK, 4).unwrap();

        let now = end_ts + 100;
        let records = log.occurred(now).to_vec();
        assert_eq!(records.len(), 4);

        let step_one = hash_rate * 2 * (records[2].effective_ts - opened_at) as u128;
        let step_two = hash_rate * 3 * (later - records[2].effective_ts) as u128;
        let step_three = hash_rate * 3 * (records[3].effective_ts - later) as u128;
        let step_four = hash_rate * 4 * (end_ts - records[3].effective_ts) as u128;

        let first = settle(&mut batch, &log, now, &[0], &[later]).unwrap();
        assert_eq!(first[0].accrual.amount, step_one + step_two);
        assert_eq!(batch.positions[0].recent_adjust_index, 2);

        let second = settle(&mut batch, &log, now, &[0], &[end_ts]).unwrap();
        assert_eq!(second[0].accrual.amount, step_three + step_four);
        assert_eq!(
            batch.positions[0].rewards_claimed,
            step_one + step_two + step_three + step_four
        );
        assert!(batch.positions[0].is_fully_claimed());
    }

    #[test]
    fn same_target_twice_is_invalid() {
        let log = log_at(T0, 1);
        let mut batch = opened(&log, MinerType::Type0, 1, T0);

        let now = T0 + 1_000;
        settle(&mut batch, &log, now, &[0], &[T0 + 500]).unwrap();

        assert_error(
            settle(&mut batch, &log, now, &[0], &[T0 + 500]),
            ErrorCode::InvalidTarget,
        );
        assert_error(
            batch.unclaimed_rewards(&HASH_RATES, log.occurred(now), now, UNSCALED, 0, T0 + 500),
            ErrorCode::InvalidTarget,
        );
    }

    #[test]
    fn target_equal_to_start_is_invalid() {
        let log = log_at(T0, 1);
        let mut batch = opened(&log, MinerType::Type0, 1, T0);

        assert_error(
            settle(&mut batch, &log, T0, &[0], &[T0]),
            ErrorCode::InvalidTarget,
        );
    }

    #[test]
    fn future_target_is_invalid() {
        let log = log_at(T0, 1);
        let mut batch = opened(&log, MinerType::Type0, 1, T0);

        let now = T0 + 100;
        assert_error(
            settle(&mut batch, &log, now, &[0], &[now + 10]),
            ErrorCode::InvalidTarget,
        );
    }

    #[test]
    fn claims_past_end_cap_then_stop() {
        let log = log_at(T0, 1);
        let mut batch = opened(&log, MinerType::Type0, 1, T0);

        let now = T0 + MINING_DURATION + 1_000;
        let settlements = settle(&mut batch, &log, now, &[0], &[now]).unwrap();
        assert_eq!(settlements[0].accrual.claimed_to, T0 + MINING_DURATION);
        assert_eq!(
            settlements[0].payout,
            HASH_RATES[0] * MINING_DURATION as u64
        );

        assert_error(
            settle(&mut batch, &log, now, &[0], &[now]),
            ErrorCode::InvalidTarget,
        );
        assert_eq!(batch.positions[0].latest_claimed_ts, T0 + MINING_DURATION);
    }

    #[test]
    fn unknown_slot_is_not_owned() {
        let log = log_at(T0, 1);
        let mut batch = opened(&log, MinerType::Type0, 1, T0);

        assert_error(
            settle(&mut batch, &log, T0 + 10, &[1], &[T0 + 5]),
            ErrorCode::NotOwner,
        );
    }

    #[test]
    fn failing_pair_leaves_whole_batch_unsettled() {
        let log = log_at(T0, 1);
        let mut batch = opened(&log, MinerType::Type0, 2, T0);
        let before = batch.positions.clone();

        let now = T0 + 1_000;
        assert_error(
            settle(&mut batch, &log, now, &[0, 1, 1], &[T0 + 100, T0 + 300, T0 + 200]),
            ErrorCode::InvalidTarget,
        );

        assert_eq!(batch.positions, before);
    }

    #[test]
    fn settling_writes_back_only_named_slots() {
        let log = log_at(T0, 1);
        let mut batch = opened(&log, MinerType::Type2, 5, T0);
        let untouched = batch.positions[0];

        let now = T0 + 1_000;
        settle(&mut batch, &log, now, &[3, 1], &[T0 + 400, T0 + 200]).unwrap();

        assert_eq!(batch.positions[1].latest_claimed_ts, T0 + 200);
        assert_eq!(batch.positions[3].latest_claimed_ts, T0 + 400);
        for slot in [0usize, 2, 4] {
            assert_eq!(batch.positions[slot], untouched);
        }
    }

    #[test]
    fn batch_may_advance_one_slot_twice() {
        let log = log_at(T0, 1);
        let mut batch = opened(&log, MinerType::Type0, 1, T0);

        let now = T0 + 1_000;
        let settlements = settle(&mut batch, &log, now, &[0, 0], &[T0 + 100, T0 + 300]).unwrap();

        assert_eq!(total_settled(&settlements).unwrap(), HASH_RATES[0] * 300);
        assert_eq!(batch.positions[0].latest_claimed_ts, T0 + 300);
    }

    #[test]
    fn malformed_claim_batches_are_rejected() {
        let log = log_at(T0, 1);
        let mut batch = opened(&log, MinerType::Type0, 1, T0);

        let now = T0 + 1_000;
        assert_error(
            settle(&mut batch, &log, now, &[0], &[]),
            ErrorCode::InvalidClaimBatch,
        );
        assert_error(
            settle(&mut batch, &log, now, &[], &[]),
            ErrorCode::InvalidClaimBatch,
        );

        let slots = vec![0u32; MAX_CLAIM_BATCH + 1];
        let targets = vec![now; MAX_CLAIM_BATCH + 1];
        assert_error(
            settle(&mut batch, &log, now, &slots, &targets),
            ErrorCode::InvalidClaimBatch,
        );
    }

    #[test]
    fn status_reads_a_bounded_range() {
        let log = log_at(T0, 1);
        let batch = opened(&log, MinerType::Type1, MAX_BATCH_MINING, T0);

        let status = batch.status(0, 9).unwrap();
        assert_eq!(status.len(), 10);
        assert_eq!(status[0].end_ts - status[0].start_ts, MINING_DURATION);
        assert_eq!(status[9].start_ts, status[0].start_ts);

        assert_error(batch.status(5, 4), ErrorCode::OutOfRange);
        assert_error(batch.status(0, MAX_BATCH_MINING), ErrorCode::OutOfRange);
        assert_error(
            batch.status(0, MAX_VIEW_POSITIONS as u32),
            ErrorCode::OutOfRange,
        );
    }

    #[test]
    fn scheduling_then_dropping_changes_nothing() {
        let baseline = log_at(T0, 5);
        let mut touched = log_at(T0, 5);
        touched.schedule_future(T0 + 10, T0 + WEEK, 9).unwrap();
        touched.drop_future(T0 + 20).unwrap();

        let mut a = opened(&baseline, MinerType::Type2, 1, T0 + 30);
        let mut b = opened(&touched, MinerType::Type2, 1, T0 + 30);

        let now = T0 + 2 * WEEK;
        let left = settle(&mut a, &baseline, now, &[0], &[now]).unwrap();
        let right = settle(&mut b, &touched, now, &[0], &[now]).unwrap();

        assert_eq!(left, right);
    }

    #[test]
    fn latest_claimed_is_monotonic_over_many_claims() {
        let mut log = log_at(T0, 1);
        let mut batch = opened(&log, MinerType::Type1, 1, T0);

        let mut previous = batch.positions[0].latest_claimed_ts;
        let mut now = T0;
        for step in 1..=30i64 {
            now += 7 * 86_400;
            if step % 4 == 0 {
                log.apply_now(now - 1, step as u64 + 1).unwrap();
            }
            let result = settle(&mut batch, &log, now, &[0], &[now - step]);

            let position = batch.positions[0];
            assert!(position.latest_claimed_ts >= previous);
            assert!(position.latest_claimed_ts <= position.end_ts);
            if result.is_err() {
                assert!(position.is_fully_claimed());
            }
            previous = position.latest_claimed_ts;
        }
        assert!(batch.positions[0].is_fully_claimed());
    }
}
