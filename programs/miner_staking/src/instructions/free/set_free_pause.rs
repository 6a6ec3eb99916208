use anchor_lang::prelude::*;

use crate::{
    errors::ErrorCode,
    events::PauseChanged,
    state::{FreeMiningPool, MiningPool},
};

#[derive(Accounts)]
pub struct SetFreePause<'info> {
    #[account(mut, has_one = mining_pool)]
    pub free_mining_pool: Box<Account<'info, FreeMiningPool>>,

    #[account(has_one = manager @ ErrorCode::Unauthorized)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    pub manager: Signer<'info>,
}

pub fn handler(ctx: Context<SetFreePause>, paused: bool) -> Result<()> {
    let free_pool = &mut ctx.accounts.free_mining_pool;
    free_pool.paused = paused;

    emit!(PauseChanged {
        pool: free_pool.key(),
        is_paused: paused,
    });

    Ok(())
}
