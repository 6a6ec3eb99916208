pub mod add_future_output_factor;
pub mod add_real_time_output_factor;
pub mod batch_mining;
pub mod claim_rewards;
pub mod drop_future_output_factor;
pub mod free;
pub mod init_miner;
pub mod init_mining_pool;
pub mod mining_status;
pub mod output_factor_views;
pub mod set_hash_rates;
pub mod set_pause;
pub mod transfer_manager;
pub mod unclaimed_rewards;

pub use add_future_output_factor::*;
pub use add_real_time_output_factor::*;
pub use batch_mining::*;
pub use claim_rewards::*;
pub use drop_future_output_factor::*;
pub use free::*;
pub use init_miner::*;
pub use init_mining_pool::*;
pub use mining_status::*;
pub use output_factor_views::*;
pub use set_hash_rates::*;
pub use set_pause::*;
pub use transfer_manager::*;
pub use unclaimed_rewards::*;
