use anchor_lang::prelude::*;

use crate::{
    constants::{FREE_HASH_RATE, FREE_MINING_DURATION, SEED_FREE_MINING_POOL, SEED_SUPPORTED_ASSET},
    errors::ErrorCode,
    state::{AdjustRecord, StakingWindow},
    utils::{accrue_until, scaled_payout, Accrual},
};

/// Single-slot mining at a fixed hash rate. It has no schedule of its own:
/// rewards are computed against the output factor log and staking window of
/// the mining pool it was created for, and that pool's manager administers it.
#[repr(C)]
#[account]
#[derive(Debug, InitSpace)]
pub struct FreeMiningPool {
    /// the pool whose output factor log, window and manager this one follows
    pub mining_pool: Pubkey,

    pub reward_mint: Pubkey,

    pub reward_pot: Pubkey,

    /// copied from the base pool at creation
    pub reward_scale: u64,

    pub bump: u8,

    pub paused: bool,

    pub supported_assets: u32,

    pub miner_count: u64,

    /// token units paid out so far
    pub total_rewards_claimed: u64,
}

impl FreeMiningPool {
    /// the pool PDA signs for its reward pot and miner boxes
    pub fn signer_seeds(&self) -> [&[u8]; 3] {
        [
            SEED_FREE_MINING_POOL,
            self.mining_pool.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }

    pub fn assert_not_paused(&self) -> Result<()> {
        require!(!self.paused, ErrorCode::Paused);

        Ok(())
    }

    /// gate of mine, `window` is the base pool's
    pub fn assert_can_mine(&self, window: &StakingWindow, now: i64) -> Result<()> {
        self.assert_not_paused()?;
        window.assert_active(now)
    }

    pub fn assert_can_claim(&self, window: &StakingWindow, now: i64) -> Result<()> {
        self.assert_not_paused()?;
        window.assert_started(now)
    }

    pub fn record_claim(&mut self, amount: u64) -> Result<()> {
        self.total_rewards_claimed = self
            .total_rewards_claimed
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(())
    }
}

/// Allowlist entry: miners of `asset_mint` with `class` may start free mining.
#[repr(C)]
#[account]
#[derive(Debug, InitSpace)]
pub struct SupportedAsset {
    pub free_mining_pool: Pubkey,

    pub asset_mint: Pubkey,

    pub class: u8,

    /// flips back to false on removal, the account itself is kept
    pub supported: bool,

    pub bump: u8,
}

impl SupportedAsset {
    pub fn address(
        free_mining_pool: &Pubkey,
        asset_mint: &Pubkey,
        class: u8,
        program_id: &Pubkey,
    ) -> Pubkey {
        let class_seed = [class];
        let seed: &[&[u8]] = &[
            SEED_SUPPORTED_ASSET,
            free_mining_pool.as_ref(),
            asset_mint.as_ref(),
            &class_seed,
        ];

        Pubkey::find_program_address(seed, program_id).0
    }

    pub fn add(&mut self) -> Result<()> {
        require!(!self.supported, ErrorCode::AlreadySupported);
        self.supported = true;

        Ok(())
    }

    pub fn remove(&mut self) -> Result<()> {
        require!(self.supported, ErrorCode::Unsupported);
        self.supported = false;

        Ok(())
    }

    /// A never created entry is as good as a removed one.
    pub fn assert_allows(
        entry: Option<&SupportedAsset>,
        free_mining_pool: &Pubkey,
        asset_mint: &Pubkey,
        class: u8,
    ) -> Result<()> {
        let entry = entry.ok_or_else(|| error!(ErrorCode::Unsupported))?;

        require!(
            entry.supported
                && entry.class == class
                && entry.asset_mint == *asset_mint
                && entry.free_mining_pool == *free_mining_pool,
            ErrorCode::Unsupported
        );

        Ok(())
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, InitSpace, AnchorSerialize, AnchorDeserialize)]
pub struct FlatPosition {
    /// set once on mining and never cleared, an owner only mines once
    pub active: bool,

    pub start_ts: i64,

    pub end_ts: i64,

    pub recent_adjust_index: u32,

    pub latest_claimed_ts: i64,

    /// raw total
    pub rewards_claimed: u128,
}

impl FlatPosition {
    pub fn start(&mut self, now: i64, recent_adjust_index: u32) -> Result<()> {
        require!(!self.active, ErrorCode::AlreadyMining);

        *self = Self {
            active: true,
            start_ts: now,
            end_ts: now
                .checked_add(FREE_MINING_DURATION)
                .ok_or(ErrorCode::MathOverflow)?,
            recent_adjust_index,
            latest_claimed_ts: now,
            rewards_claimed: 0,
        };

        Ok(())
    }

    pub fn accrue(&self, records: &[AdjustRecord], now: i64, target_ts: i64) -> Result<Accrual> {
        require!(self.active, ErrorCode::NotOwner);

        accrue_until(
            FREE_HASH_RATE,
            records,
            now,
            self.end_ts,
            self.latest_claimed_ts,
            self.recent_adjust_index,
            target_ts,
        )
    }

    /// token units a claim up to `target_ts` would pay
    pub fn unclaimed_rewards(
        &self,
        records: &[AdjustRecord],
        now: i64,
        target_ts: i64,
        reward_scale: u64,
    ) -> Result<u64> {
        let accrual = self.accrue(records, now, target_ts)?;

        scaled_payout(self.rewards_claimed, accrual.amount, reward_scale)
    }

    /// Settles up to `target_ts`, returning the accrual and the token units
    /// it releases.
    pub fn claim(
        &mut self,
        records: &[AdjustRecord],
        now: i64,
        target_ts: i64,
        reward_scale: u64,
    ) -> Result<(Accrual, u64)> {
        let accrual = self.accrue(records, now, target_ts)?;
        let payout = scaled_payout(self.rewards_claimed, accrual.amount, reward_scale)?;

        self.latest_claimed_ts = accrual.claimed_to;
        self.recent_adjust_index = accrual.recent_adjust_index;
        self.rewards_claimed = self
            .rewards_claimed
            .checked_add(accrual.amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok((accrual, payout))
    }
}

#[repr(C)]
#[account]
#[derive(Debug, InitSpace)]
pub struct FreeMiner {
    pub free_mining_pool: Pubkey,

    pub owner: Pubkey,

    /// the miner staked to start mining
    pub asset_mint: Pubkey,

    pub class: u8,

    pub bump: u8,

    pub position: FlatPosition,
}
