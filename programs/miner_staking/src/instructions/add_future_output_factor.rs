use anchor_lang::prelude::*;

use crate::{
    constants::SEED_OUTPUT_FACTOR_LOG, errors::ErrorCode, events::FutureOutputFactorAdded,
    state::*, utils::now_ts,
};

#[derive(Accounts)]
pub struct UpdateOutputFactor<'info> {
    #[account(has_one = manager @ ErrorCode::Unauthorized, has_one = output_factor_log)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    pub manager: Signer<'info>,

    #[account(mut, seeds = [
            SEED_OUTPUT_FACTOR_LOG,
            mining_pool.key().as_ref(),
        ],
        bump)]
    pub output_factor_log: Box<Account<'info, OutputFactorLog>>,
}

pub fn handler(ctx: Context<UpdateOutputFactor>, effective_ts: i64, output_factor: u64) -> Result<()> {
    let now = now_ts()?;

    ctx.accounts
        .output_factor_log
        .schedule_future(now, effective_ts, output_factor)?;

    emit!(FutureOutputFactorAdded {
        mining_pool: ctx.accounts.mining_pool.key(),
        effective_ts,
        output_factor,
    });

    msg!("output factor {} scheduled for {}", output_factor, effective_ts);
    Ok(())
}
