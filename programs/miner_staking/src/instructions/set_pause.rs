use anchor_lang::prelude::*;

use crate::{errors::ErrorCode, events::PauseChanged, state::MiningPool};

#[derive(Accounts)]
pub struct SetPause<'info> {
    #[account(mut, has_one = manager @ ErrorCode::Unauthorized)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    pub manager: Signer<'info>,
}

/// gates batch_mining and claim_rewards, reads stay available
pub fn handler(ctx: Context<SetPause>, paused: bool) -> Result<()> {
    let pool = &mut ctx.accounts.mining_pool;
    pool.paused = paused;

    emit!(PauseChanged {
        pool: pool.key(),
        is_paused: paused,
    });

    Ok(())
}
