use anchor_lang::prelude::*;

#[event]
pub struct MiningPoolInitialized {
    pub mining_pool: Pubkey,
    pub manager: Pubkey,
    pub reward_mint: Pubkey,
    pub initial_output_factor: u64,
    pub reward_scale: u64,
    pub start_ts: i64,
    pub end_ts: i64,
}

#[event]
pub struct HashRatesSet {
    pub mining_pool: Pubkey,
    pub hash_rates: [u64; 4],
}

#[event]
pub struct FutureOutputFactorAdded {
    pub mining_pool: Pubkey,
    pub effective_ts: i64,
    pub output_factor: u64,
}

#[event]
pub struct FutureOutputFactorDropped {
    pub mining_pool: Pubkey,
    pub effective_ts: i64,
    pub output_factor: u64,
}

#[event]
pub struct RealTimeOutputFactorAdded {
    pub mining_pool: Pubkey,
    pub effective_ts: i64,
    pub output_factor: u64,
    pub occurred_count: u32,
}

#[event]
pub struct PauseChanged {
    pub pool: Pubkey,
    pub is_paused: bool,
}

#[event]
pub struct ManagerTransferred {
    pub mining_pool: Pubkey,
    pub old_manager: Pubkey,
    pub new_manager: Pubkey,
}

#[event]
pub struct MinersOpened {
    pub mining_pool: Pubkey,
    pub owner: Pubkey,
    pub miner_type: u8,
    pub batch: u32,
    pub count: u32,
    pub start_ts: i64,
    pub end_ts: i64,
}

#[event]
pub struct RewardsClaimed {
    pub mining_pool: Pubkey,
    pub owner: Pubkey,
    pub batch: u32,
    pub position: u32,
    /// raw accrual before scaling
    pub accrued: u128,
    /// token units transferred
    pub amount: u64,
    pub latest_claimed_ts: i64,
    pub recent_adjust_index: u32,
}

#[event]
pub struct SupportedAssetChanged {
    pub free_mining_pool: Pubkey,
    pub asset_mint: Pubkey,
    pub class: u8,
    pub supported: bool,
}

#[event]
pub struct FreeMiningStarted {
    pub free_mining_pool: Pubkey,
    pub owner: Pubkey,
    pub asset_mint: Pubkey,
    pub class: u8,
    pub start_ts: i64,
    pub end_ts: i64,
}

#[event]
pub struct FreeRewardsClaimed {
    pub free_mining_pool: Pubkey,
    pub owner: Pubkey,
    pub accrued: u128,
    pub amount: u64,
    pub latest_claimed_ts: i64,
}
