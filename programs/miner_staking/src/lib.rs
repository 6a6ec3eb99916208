use anchor_lang::prelude::*;
use constants::MINER_TYPE_COUNT;
use instructions::*;
use state::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

declare_id!("BHseyKryCBq4Bs3GDqHHFouBxghmYGnWXXHiK9QPsiHk");

#[program]
pub mod miner_staking {
    use super::*;

    // --------------------------------------- pool

    pub fn init_mining_pool(ctx: Context<InitMiningPool>, config: MiningPoolConfig) -> Result<()> {
        msg!("init mining pool");
        instructions::init_mining_pool::handler(ctx, config)
    }

    pub fn set_hash_rates(
        ctx: Context<SetHashRates>,
        hash_rates: [u64; MINER_TYPE_COUNT],
    ) -> Result<()> {
        instructions::set_hash_rates::handler(ctx, hash_rates)
    }

    pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
        msg!("set pause: {}", paused);
        instructions::set_pause::handler(ctx, paused)
    }

    pub fn transfer_manager(ctx: Context<TransferManager>, new_manager: Pubkey) -> Result<()> {
        instructions::transfer_manager::handler(ctx, new_manager)
    }

    // --------------------------------------- output factor schedule

    pub fn add_future_output_factor(
        ctx: Context<UpdateOutputFactor>,
        effective_ts: i64,
        output_factor: u64,
    ) -> Result<()> {
        instructions::add_future_output_factor::handler(ctx, effective_ts, output_factor)
    }

    pub fn drop_future_output_factor(ctx: Context<UpdateOutputFactor>) -> Result<()> {
        instructions::drop_future_output_factor::handler(ctx)
    }

    pub fn add_real_time_output_factor(
        ctx: Context<UpdateOutputFactor>,
        output_factor: u64,
    ) -> Result<()> {
        instructions::add_real_time_output_factor::handler(ctx, output_factor)
    }

    pub fn occurred_output_factor_count(ctx: Context<OutputFactorView>) -> Result<u32> {
        instructions::output_factor_views::occurred_count_handler(ctx)
    }

    pub fn latest_adjust_record(ctx: Context<OutputFactorView>) -> Result<AdjustRecord> {
        instructions::output_factor_views::latest_record_handler(ctx)
    }

    pub fn adjust_record(
        ctx: Context<OutputFactorView>,
        index: u32,
        allow_pending: bool,
    ) -> Result<AdjustRecord> {
        instructions::output_factor_views::record_handler(ctx, index, allow_pending)
    }

    pub fn adjust_records(
        ctx: Context<OutputFactorView>,
        from: u32,
        to: u32,
    ) -> Result<Vec<AdjustRecord>> {
        instructions::output_factor_views::records_handler(ctx, from, to)
    }

    pub fn reward_by_hash_rate(
        ctx: Context<OutputFactorView>,
        hash_rate: u64,
        output_factor: u64,
        duration: i64,
    ) -> Result<u128> {
        instructions::output_factor_views::reward_by_hash_rate_handler(
            ctx,
            hash_rate,
            output_factor,
            duration,
        )
    }

    pub fn calculate_rewards(
        ctx: Context<OutputFactorView>,
        hash_rate: u64,
        from_index: u32,
        from_ts: i64,
        to_ts: i64,
    ) -> Result<u128> {
        instructions::output_factor_views::calculate_rewards_handler(
            ctx, hash_rate, from_index, from_ts, to_ts,
        )
    }

    // --------------------------------------- mining

    pub fn init_miner(ctx: Context<InitMiner>) -> Result<()> {
        instructions::init_miner::handler(ctx)
    }

    pub fn batch_mining(ctx: Context<BatchMining>, miner_type: u8, count: u32) -> Result<()> {
        msg!("batch mining {} of type {}", count, miner_type);
        instructions::batch_mining::handler(ctx, miner_type, count)
    }

    pub fn mining_status(
        ctx: Context<MinerBatchView>,
        from: u32,
        to: u32,
    ) -> Result<Vec<MinerPosition>> {
        instructions::mining_status::handler(ctx, from, to)
    }

    pub fn unclaimed_rewards(
        ctx: Context<MinerBatchView>,
        positions: Vec<u32>,
        target_ts: i64,
    ) -> Result<Vec<u64>> {
        instructions::unclaimed_rewards::handler(ctx, positions, target_ts)
    }

    pub fn claim_rewards(
        ctx: Context<ClaimRewards>,
        positions: Vec<u32>,
        target_ts: Vec<i64>,
    ) -> Result<()> {
        msg!("claim rewards for {} positions", positions.len());
        instructions::claim_rewards::handler(ctx, positions, target_ts)
    }

    // --------------------------------------- free mining

    pub fn init_free_mining_pool(ctx: Context<InitFreeMiningPool>) -> Result<()> {
        msg!("init free mining pool");
        instructions::free::init_free_mining_pool::handler(ctx)
    }

    pub fn add_supported_asset(ctx: Context<UpdateSupportedAsset>, class: u8) -> Result<()> {
        instructions::free::supported_asset::add_handler(ctx, class)
    }

    pub fn remove_supported_asset(ctx: Context<UpdateSupportedAsset>, class: u8) -> Result<()> {
        instructions::free::supported_asset::remove_handler(ctx, class)
    }

    pub fn set_free_pause(ctx: Context<SetFreePause>, paused: bool) -> Result<()> {
        msg!("set free pause: {}", paused);
        instructions::free::set_free_pause::handler(ctx, paused)
    }

    pub fn mine(ctx: Context<Mine>, class: u8) -> Result<()> {
        msg!("mine");
        instructions::free::mine::handler(ctx, class)
    }

    pub fn free_mining_status(ctx: Context<FreeMiningStatus>) -> Result<FlatPosition> {
        instructions::free::free_mining_status::handler(ctx)
    }

    pub fn unclaimed_free_rewards(ctx: Context<UnclaimedFreeRewards>, target_ts: i64) -> Result<u64> {
        instructions::free::unclaimed_free_rewards::handler(ctx, target_ts)
    }

    pub fn claim_free_rewards(ctx: Context<ClaimFreeRewards>, target_ts: i64) -> Result<()> {
        instructions::free::claim_free_rewards::handler(ctx, target_ts)
    }
}
