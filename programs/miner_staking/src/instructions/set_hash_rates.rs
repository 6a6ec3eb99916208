use anchor_lang::prelude::*;

use crate::{
    constants::MINER_TYPE_COUNT, errors::ErrorCode, events::HashRatesSet, state::*, utils::now_ts,
};

#[derive(Accounts)]
pub struct SetHashRates<'info> {
    #[account(mut, has_one = manager @ ErrorCode::Unauthorized)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    pub manager: Signer<'info>,
}

pub fn handler(ctx: Context<SetHashRates>, hash_rates: [u64; MINER_TYPE_COUNT]) -> Result<()> {
    let now = now_ts()?;
    let pool = &mut ctx.accounts.mining_pool;

    pool.set_hash_rates(hash_rates, now)?;

    emit!(HashRatesSet {
        mining_pool: pool.key(),
        hash_rates,
    });

    msg!("hash rates set: {:?}", hash_rates);
    Ok(())
}
