use anchor_lang::prelude::*;

use crate::{events::FutureOutputFactorDropped, instructions::UpdateOutputFactor, utils::now_ts};

pub fn handler(ctx: Context<UpdateOutputFactor>) -> Result<()> {
    let now = now_ts()?;

    let dropped = ctx.accounts.output_factor_log.drop_future(now)?;

    emit!(FutureOutputFactorDropped {
        mining_pool: ctx.accounts.mining_pool.key(),
        effective_ts: dropped.effective_ts,
        output_factor: dropped.output_factor,
    });

    msg!("future output factor dropped");
    Ok(())
}
