use anchor_lang::prelude::*;

use crate::{
    constants::{DISCRIMINATOR_SIZE, SEED_MINER_LEDGER},
    errors::ErrorCode,
    state::*,
};

#[derive(Accounts)]
pub struct InitMiner<'info> {
    // pool
    #[account(mut)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    // ledger
    #[account(init, seeds = [
            SEED_MINER_LEDGER,
            mining_pool.key().as_ref(),
            owner.key().as_ref(),
        ],
        bump,
        payer = owner,
        space = DISCRIMINATOR_SIZE + MinerLedger::INIT_SPACE)]
    pub miner_ledger: Box<Account<'info, MinerLedger>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    // misc
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitMiner>) -> Result<()> {
    let pool = &mut ctx.accounts.mining_pool;
    let ledger = &mut ctx.accounts.miner_ledger;

    pool.miner_count = pool
        .miner_count
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    ledger.mining_pool = pool.key();
    ledger.owner = ctx.accounts.owner.key();
    ledger.bump = ctx.bumps.miner_ledger;
    ledger.batch_count = 0;
    ledger.position_count = 0;

    msg!("new miner ledger for {}", &ctx.accounts.owner.key());
    Ok(())
}
