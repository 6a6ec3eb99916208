use anchor_lang::prelude::*;

use crate::{errors::ErrorCode, events::ManagerTransferred, state::MiningPool};

#[derive(Accounts)]
pub struct TransferManager<'info> {
    #[account(mut, has_one = manager @ ErrorCode::Unauthorized)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    pub manager: Signer<'info>,
}

pub fn handler(ctx: Context<TransferManager>, new_manager: Pubkey) -> Result<()> {
    let pool = &mut ctx.accounts.mining_pool;
    let old_manager = pool.transfer_manager(new_manager);

    emit!(ManagerTransferred {
        mining_pool: pool.key(),
        old_manager,
        new_manager,
    });

    msg!("manager transferred to {}", new_manager);
    Ok(())
}
