pub mod free_mining;
pub mod miner_ledger;
pub mod mining_pool;
pub mod output_factor_log;
pub mod window;

pub use free_mining::*;
pub use miner_ledger::*;
pub use mining_pool::*;
pub use output_factor_log::*;
pub use window::*;
