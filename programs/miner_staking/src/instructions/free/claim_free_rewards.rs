use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    errors::ErrorCode,
    events::FreeRewardsClaimed,
    state::*,
    utils::{assert_covers, now_ts},
};

#[derive(Accounts)]
pub struct ClaimFreeRewards<'info> {
    // free pool
    #[account(mut, has_one = mining_pool, has_one = reward_pot)]
    pub free_mining_pool: Box<Account<'info, FreeMiningPool>>,

    #[account(has_one = output_factor_log)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    pub output_factor_log: Box<Account<'info, OutputFactorLog>>,

    // miner
    #[account(mut, has_one = free_mining_pool, has_one = owner @ ErrorCode::NotOwner,
        seeds = [
            SEED_FREE_MINER,
            free_mining_pool.key().as_ref(),
            owner.key().as_ref(),
        ],
        bump = free_miner.bump)]
    pub free_miner: Box<Account<'info, FreeMiner>>,

    pub owner: Signer<'info>,

    // reward
    #[account(mut)]
    pub reward_pot: Box<Account<'info, TokenAccount>>,

    #[account(mut, token::mint = free_mining_pool.reward_mint)]
    pub reward_destination: Box<Account<'info, TokenAccount>>,

    // misc
    pub token_program: Program<'info, Token>,
}

impl<'info> ClaimFreeRewards<'info> {
    fn transfer_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.reward_pot.to_account_info(),
                to: self.reward_destination.to_account_info(),
                authority: self.free_mining_pool.to_account_info(),
            },
        )
    }
}

pub fn handler(ctx: Context<ClaimFreeRewards>, target_ts: i64) -> Result<()> {
    let now = now_ts()?;
    ctx.accounts
        .free_mining_pool
        .assert_can_claim(&ctx.accounts.mining_pool.window, now)?;

    let reward_scale = ctx.accounts.free_mining_pool.reward_scale;
    let records = ctx.accounts.output_factor_log.occurred(now);
    let (accrual, payout) =
        ctx.accounts
            .free_miner
            .position
            .claim(records, now, target_ts, reward_scale)?;

    assert_covers(ctx.accounts.reward_pot.amount, payout)?;

    if payout > 0 {
        token::transfer(
            ctx.accounts
                .transfer_ctx()
                .with_signer(&[&ctx.accounts.free_mining_pool.signer_seeds()]),
            payout,
        )?;
    }

    let free_pool = &mut ctx.accounts.free_mining_pool;
    free_pool.record_claim(payout)?;

    emit!(FreeRewardsClaimed {
        free_mining_pool: free_pool.key(),
        owner: ctx.accounts.owner.key(),
        accrued: accrual.amount,
        amount: payout,
        latest_claimed_ts: accrual.claimed_to,
    });

    msg!("{} free reward tokens claimed", payout);
    Ok(())
}
