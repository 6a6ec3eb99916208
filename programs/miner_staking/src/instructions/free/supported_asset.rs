use anchor_lang::prelude::*;

use crate::{constants::*, errors::ErrorCode, events::SupportedAssetChanged, state::*};

#[derive(Accounts)]
#[instruction(class: u8)]
pub struct UpdateSupportedAsset<'info> {
    // free pool, administered by the base pool's current manager
    #[account(mut, has_one = mining_pool)]
    pub free_mining_pool: Box<Account<'info, FreeMiningPool>>,

    #[account(has_one = manager @ ErrorCode::Unauthorized)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    #[account(mut)]
    pub manager: Signer<'info>,

    // allowlist
    /// CHECK: only its key seeds the allowlist entry
    pub asset_mint: UncheckedAccount<'info>,

    #[account(init_if_needed, seeds = [
            SEED_SUPPORTED_ASSET,
            free_mining_pool.key().as_ref(),
            asset_mint.key().as_ref(),
            &[class],
        ],
        bump,
        payer = manager,
        space = DISCRIMINATOR_SIZE + SupportedAsset::INIT_SPACE)]
    pub supported_asset: Box<Account<'info, SupportedAsset>>,

    // misc
    pub system_program: Program<'info, System>,
}

impl<'info> UpdateSupportedAsset<'info> {
    fn fill_entry(&mut self, class: u8, bump: u8) {
        let entry = &mut self.supported_asset;

        entry.free_mining_pool = self.free_mining_pool.key();
        entry.asset_mint = self.asset_mint.key();
        entry.class = class;
        entry.bump = bump;
    }

    fn emit_change(&self) {
        emit!(SupportedAssetChanged {
            free_mining_pool: self.free_mining_pool.key(),
            asset_mint: self.supported_asset.asset_mint,
            class: self.supported_asset.class,
            supported: self.supported_asset.supported,
        });
    }
}

pub fn add_handler(ctx: Context<UpdateSupportedAsset>, class: u8) -> Result<()> {
    let bump = ctx.bumps.supported_asset;
    ctx.accounts.fill_entry(class, bump);
    ctx.accounts.supported_asset.add()?;

    let free_pool = &mut ctx.accounts.free_mining_pool;
    free_pool.supported_assets = free_pool
        .supported_assets
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    ctx.accounts.emit_change();

    msg!("asset supported: {} class {}", ctx.accounts.asset_mint.key(), class);
    Ok(())
}

pub fn remove_handler(ctx: Context<UpdateSupportedAsset>, class: u8) -> Result<()> {
    let bump = ctx.bumps.supported_asset;
    ctx.accounts.fill_entry(class, bump);
    ctx.accounts.supported_asset.remove()?;

    let free_pool = &mut ctx.accounts.free_mining_pool;
    free_pool.supported_assets = free_pool
        .supported_assets
        .checked_sub(1)
        .ok_or(ErrorCode::MathOverflow)?;

    ctx.accounts.emit_change();

    msg!("asset no longer supported: {} class {}", ctx.accounts.asset_mint.key(), class);
    Ok(())
}
