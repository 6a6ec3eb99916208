use anchor_lang::prelude::*;

use crate::{constants::SEED_FREE_MINER, state::*};

#[derive(Accounts)]
pub struct FreeMiningStatus<'info> {
    pub free_mining_pool: Box<Account<'info, FreeMiningPool>>,

    #[account(has_one = free_mining_pool, seeds = [
            SEED_FREE_MINER,
            free_mining_pool.key().as_ref(),
            free_miner.owner.as_ref(),
        ],
        bump = free_miner.bump)]
    pub free_miner: Box<Account<'info, FreeMiner>>,
}

pub fn handler(ctx: Context<FreeMiningStatus>) -> Result<FlatPosition> {
    Ok(ctx.accounts.free_miner.position)
}
