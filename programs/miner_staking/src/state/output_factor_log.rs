use anchor_lang::prelude::*;

use crate::{constants::MAX_OUTPUT_FACTOR_RECORDS, errors::ErrorCode};

/// one step of the piecewise constant output factor curve
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, InitSpace, AnchorSerialize, AnchorDeserialize)]
pub struct AdjustRecord {
    /// the factor applies from this timestamp until the next record's
    pub effective_ts: i64,

    pub output_factor: u64,
}

/// Append-only schedule of output factor adjustments for a mining pool.
///
/// Records are kept in strictly increasing `effective_ts` order. Everything
/// with `effective_ts <= now` has occurred and is never touched again; at most
/// one record (always the last one) may still lie in the future. That pending
/// record can be replaced or dropped until it occurs.
///
/// Positions cache an index into `records` so claims only walk the records
/// added since their last settlement.
#[account]
#[derive(InitSpace)]
pub struct OutputFactorLog {
    pub mining_pool: Pubkey,

    #[max_len(MAX_OUTPUT_FACTOR_RECORDS)]
    pub records: Vec<AdjustRecord>,
}

impl OutputFactorLog {
    pub fn init(&mut self, mining_pool: Pubkey, now: i64, output_factor: u64) {
        self.mining_pool = mining_pool;
        self.records = vec![AdjustRecord {
            effective_ts: now,
            output_factor,
        }];
    }

    pub fn pending(&self, now: i64) -> Option<&AdjustRecord> {
        self.records.last().filter(|r| r.effective_ts > now)
    }

    pub fn occurred_count(&self, now: i64) -> usize {
        match self.pending(now) {
            Some(_) => self.records.len() - 1,
            None => self.records.len(),
        }
    }

    /// the prefix of records whose effective_ts has passed
    pub fn occurred(&self, now: i64) -> &[AdjustRecord] {
        &self.records[..self.occurred_count(now)]
    }

    /// index of the record in effect at `now`, cached by newly opened positions
    pub fn current_index(&self, now: i64) -> Result<u32> {
        let occurred = self.occurred_count(now);
        require!(occurred > 0, ErrorCode::NoRecords);

        u32::try_from(occurred - 1).map_err(|_| error!(ErrorCode::MathOverflow))
    }

    pub fn current(&self, now: i64) -> Result<AdjustRecord> {
        self.occurred(now)
            .last()
            .copied()
            .ok_or_else(|| error!(ErrorCode::NoRecords))
    }

    /// pending record if there is one, else the latest occurred record
    pub fn latest(&self) -> Result<AdjustRecord> {
        self.records
            .last()
            .copied()
            .ok_or_else(|| error!(ErrorCode::NoRecords))
    }

    pub fn segment(&self, index: usize, now: i64, allow_pending: bool) -> Result<AdjustRecord> {
        let readable = if allow_pending {
            self.records.len()
        } else {
            self.occurred_count(now)
        };
        require!(index < readable, ErrorCode::OutOfRange);

        Ok(self.records[index])
    }

    /// occurred records `from..=to`
    pub fn range(&self, from: usize, to: usize, now: i64) -> Result<&[AdjustRecord]> {
        let occurred = self.occurred(now);
        require!(from <= to && to < occurred.len(), ErrorCode::OutOfRange);

        Ok(&occurred[from..=to])
    }

    pub fn schedule_future(&mut self, now: i64, effective_ts: i64, output_factor: u64) -> Result<()> {
        require!(effective_ts > now, ErrorCode::InvalidSchedule);

        // only one pending record, a new schedule replaces it
        if self.pending(now).is_some() {
            self.records.pop();
        }
        require!(
            self.records.len() < MAX_OUTPUT_FACTOR_RECORDS,
            ErrorCode::OutputFactorLogFull
        );

        self.records.push(AdjustRecord {
            effective_ts,
            output_factor,
        });

        Ok(())
    }

    pub fn drop_future(&mut self, now: i64) -> Result<AdjustRecord> {
        require!(self.pending(now).is_some(), ErrorCode::NoFutureOutputFactor);

        self.records
            .pop()
            .ok_or_else(|| error!(ErrorCode::NoFutureOutputFactor))
    }

    /// Makes `output_factor` effective immediately. A pending record stays
    /// scheduled after it.
    pub fn apply_now(&mut self, now: i64, output_factor: u64) -> Result<()> {
        let current = self.current(now)?;
        require!(
            current.output_factor != output_factor,
            ErrorCode::DuplicateOutputFactor
        );
        // an occurred record at exactly now is already final
        require!(current.effective_ts < now, ErrorCode::InvalidSchedule);
        require!(
            self.records.len() < MAX_OUTPUT_FACTOR_RECORDS,
            ErrorCode::OutputFactorLogFull
        );

        let at = self.occurred_count(now);
        self.records.insert(
            at,
            AdjustRecord {
                effective_ts: now,
                output_factor,
            },
        );

        Ok(())
    }
}
