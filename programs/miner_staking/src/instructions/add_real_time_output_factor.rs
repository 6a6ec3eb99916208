use anchor_lang::prelude::*;

use crate::{events::RealTimeOutputFactorAdded, instructions::UpdateOutputFactor, utils::now_ts};

pub fn handler(ctx: Context<UpdateOutputFactor>, output_factor: u64) -> Result<()> {
    let now = now_ts()?;
    let log = &mut ctx.accounts.output_factor_log;

    log.apply_now(now, output_factor)?;

    emit!(RealTimeOutputFactorAdded {
        mining_pool: ctx.accounts.mining_pool.key(),
        effective_ts: now,
        output_factor,
        occurred_count: log.occurred_count(now) as u32,
    });

    msg!("output factor {} effective now", output_factor);
    Ok(())
}
