pub mod claim_free_rewards;
pub mod free_mining_status;
pub mod init_free_mining_pool;
pub mod mine;
pub mod set_free_pause;
pub mod supported_asset;
pub mod unclaimed_free_rewards;

pub use claim_free_rewards::*;
pub use free_mining_status::*;
pub use init_free_mining_pool::*;
pub use mine::*;
pub use set_free_pause::*;
pub use supported_asset::*;
pub use unclaimed_free_rewards::*;
