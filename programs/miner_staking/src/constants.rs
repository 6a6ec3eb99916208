pub const SEED_OUTPUT_FACTOR_LOG: &[u8] = b"output_factor_log";
pub const SEED_REWARD_POT: &[u8] = b"reward_pot";
pub const SEED_MINER_BOX: &[u8] = b"miner_box";
pub const SEED_MINER_LEDGER: &[u8] = b"miner_ledger";
pub const SEED_MINER_BATCH: &[u8] = b"miner_batch";
pub const SEED_FREE_MINING_POOL: &[u8] = b"free_mining_pool";
pub const SEED_SUPPORTED_ASSET: &[u8] = b"supported_asset";
pub const SEED_FREE_MINER: &[u8] = b"free_miner";

pub const ONE_DAY: i64 = 24 * 60 * 60;

/// lock duration of every position opened with batch_mining
pub const MINING_DURATION: i64 = 180 * ONE_DAY;

/// lock duration of the single free position
pub const FREE_MINING_DURATION: i64 = 7 * ONE_DAY;

/// hash rate shared by every free position
pub const FREE_HASH_RATE: u64 = 10_000;

pub const MINER_TYPE_COUNT: usize = 4;

/// capacity of the output factor log account
pub const MAX_OUTPUT_FACTOR_RECORDS: usize = 256;

/// positions per miner batch account, sized so a deserialized batch fits in
/// a single heap allocation
pub const MAX_BATCH_MINING: u32 = 50;

pub const DISCRIMINATOR_SIZE: usize = 8;

/// upper bound on positions settled or queried in one call
pub const MAX_CLAIM_BATCH: usize = 64;

/// return data is capped at 1024 bytes
pub const MAX_VIEW_RECORDS: usize = 60;
pub const MAX_VIEW_POSITIONS: usize = 25;
