use anchor_lang::prelude::*;

use crate::{
    constants::MINER_TYPE_COUNT,
    errors::ErrorCode,
    state::{MinerType, StakingWindow},
};

pub const LATEST_MINING_POOL_VERSION: u16 = 0;

#[repr(C)]
#[derive(Debug, Copy, Clone, AnchorSerialize, AnchorDeserialize)]
pub struct MiningPoolConfig {
    /// seeds the output factor log, effective from initialization
    pub initial_output_factor: u64,

    /// one mint per miner type, indexed by MinerType
    pub miner_mints: [Pubkey; MINER_TYPE_COUNT],

    /// raw rewards per reward token unit
    pub reward_scale: u64,

    pub start_ts: i64,

    pub end_ts: i64,
}

impl MiningPoolConfig {
    pub fn validate(&self) -> Result<StakingWindow> {
        require!(self.reward_scale > 0, ErrorCode::InvalidRewardScale);

        StakingWindow::new(self.start_ts, self.end_ts)
    }
}

#[repr(C)]
#[account]
#[derive(Debug, InitSpace)]
pub struct MiningPool {
    pub version: u16,

    /// schedules output factors, pauses the pool, sets hash rates once
    /// can hand itself over to another Pubkey
    pub manager: Pubkey,

    /// signs off on reward pot payouts and owns the miner boxes
    pub pool_authority: Pubkey,

    pub pool_authority_seed: Pubkey,

    pub pool_authority_bump_seed: [u8; 1],

    pub output_factor_log: Pubkey,

    // ----------------- rewards
    pub reward_mint: Pubkey,

    /// where the reward is stored
    pub reward_pot: Pubkey,

    /// token units paid out so far
    pub total_rewards_claimed: u64,

    pub reward_scale: u64,

    // ----------------- miners
    pub miner_mints: [Pubkey; MINER_TYPE_COUNT],

    /// reward weight per miner type, written once before the window opens
    pub hash_rates: [u64; MINER_TYPE_COUNT],

    pub hash_rates_set: bool,

    pub window: StakingWindow,

    pub paused: bool,

    /// ledgers registered with this pool
    pub miner_count: u64,

    pub position_count: u64,
}

impl MiningPool {
    pub fn pool_seeds(&self) -> [&[u8]; 2] {
        [
            self.pool_authority_seed.as_ref(),
            &self.pool_authority_bump_seed,
        ]
    }

    pub fn assert_manager(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.manager, *signer, ErrorCode::Unauthorized);

        Ok(())
    }

    pub fn assert_not_paused(&self) -> Result<()> {
        require!(!self.paused, ErrorCode::Paused);

        Ok(())
    }

    pub fn transfer_manager(&mut self, new_manager: Pubkey) -> Pubkey {
        std::mem::replace(&mut self.manager, new_manager)
    }

    pub fn set_hash_rates(&mut self, hash_rates: [u64; MINER_TYPE_COUNT], now: i64) -> Result<()> {
        require!(!self.hash_rates_set, ErrorCode::HashRatesAlreadySet);
        require!(now < self.window.start_ts, ErrorCode::HashRatesLocked);

        self.hash_rates = hash_rates;
        self.hash_rates_set = true;

        Ok(())
    }

    pub fn hash_rates(&self) -> Result<&[u64; MINER_TYPE_COUNT]> {
        require!(self.hash_rates_set, ErrorCode::HashRatesNotSet);

        Ok(&self.hash_rates)
    }

    /// gate of batch_mining
    pub fn assert_can_open(&self, now: i64) -> Result<()> {
        self.assert_not_paused()?;
        self.window.assert_active(now)?;
        self.hash_rates()?;

        Ok(())
    }

    /// gate of claim_rewards, queries go through regardless
    pub fn assert_can_claim(&self, now: i64) -> Result<()> {
        self.assert_not_paused()?;
        self.window.assert_started(now)
    }

    pub fn miner_mint(&self, miner_type: MinerType) -> Pubkey {
        self.miner_mints[miner_type.index()]
    }

    pub fn record_positions(&mut self, count: u32) -> Result<()> {
        self.position_count = self
            .position_count
            .checked_add(count as u64)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(())
    }

    pub fn record_claim(&mut self, amount: u64) -> Result<()> {
        self.total_rewards_claimed = self
            .total_rewards_claimed
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Ok(())
    }
}
