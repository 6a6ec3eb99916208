use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::{
    constants::*,
    errors::ErrorCode,
    events::FreeMiningStarted,
    state::*,
    utils::now_ts,
};

#[derive(Accounts)]
pub struct Mine<'info> {
    // free pool
    #[account(mut, has_one = mining_pool)]
    pub free_mining_pool: Box<Account<'info, FreeMiningPool>>,

    #[account(has_one = output_factor_log)]
    pub mining_pool: Box<Account<'info, MiningPool>>,

    pub output_factor_log: Box<Account<'info, OutputFactorLog>>,

    /// CHECK: address, owner and flag are verified in the handler
    pub supported_asset: UncheckedAccount<'info>,

    // miner
    #[account(init_if_needed, seeds = [
            SEED_FREE_MINER,
            free_mining_pool.key().as_ref(),
            owner.key().as_ref(),
        ],
        bump,
        payer = owner,
        space = DISCRIMINATOR_SIZE + FreeMiner::INIT_SPACE)]
    pub free_miner: Box<Account<'info, FreeMiner>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(init_if_needed, seeds = [
            SEED_MINER_BOX,
            free_mining_pool.key().as_ref(),
            asset_mint.key().as_ref(),
        ],
        bump,
        token::mint = asset_mint,
        token::authority = free_mining_pool,
        payer = owner)]
    pub miner_box: Box<Account<'info, TokenAccount>>,

    #[account(mut, token::mint = asset_mint, token::authority = owner)]
    pub asset_source: Box<Account<'info, TokenAccount>>,

    pub asset_mint: Box<Account<'info, Mint>>,

    // misc
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> Mine<'info> {
    fn transfer_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        CpiContext::new(
            self.token_program.to_account_info(),
            Transfer {
                from: self.asset_source.to_account_info(),
                to: self.miner_box.to_account_info(),
                authority: self.owner.to_account_info(),
            },
        )
    }
}

/// Reads the allowlist entry for (`asset_mint`, `class`). The account must sit
/// at the entry's address; an empty account means the asset was never listed.
fn load_supported_asset(
    info: &AccountInfo,
    free_mining_pool: &Pubkey,
    asset_mint: &Pubkey,
    class: u8,
    program_id: &Pubkey,
) -> Result<Option<SupportedAsset>> {
    let expected = SupportedAsset::address(free_mining_pool, asset_mint, class, program_id);
    require_keys_eq!(expected, info.key(), ErrorCode::Unsupported);

    if info.data_is_empty() {
        return Ok(None);
    }
    require_keys_eq!(*info.owner, *program_id, ErrorCode::Unsupported);

    let data = info.try_borrow_data()?;
    let entry = SupportedAsset::try_deserialize(&mut &data[..])?;

    Ok(Some(entry))
}

pub fn handler(ctx: Context<Mine>, class: u8) -> Result<()> {
    let now = now_ts()?;

    let free_pool_key = ctx.accounts.free_mining_pool.key();
    let asset_mint = ctx.accounts.asset_mint.key();

    ctx.accounts
        .free_mining_pool
        .assert_can_mine(&ctx.accounts.mining_pool.window, now)?;

    let entry = load_supported_asset(
        &ctx.accounts.supported_asset,
        &free_pool_key,
        &asset_mint,
        class,
        ctx.program_id,
    )?;
    SupportedAsset::assert_allows(entry.as_ref(), &free_pool_key, &asset_mint, class)?;

    token::transfer(ctx.accounts.transfer_ctx(), 1)?;

    let recent_adjust_index = ctx.accounts.output_factor_log.current_index(now)?;

    let miner = &mut ctx.accounts.free_miner;
    miner.free_mining_pool = free_pool_key;
    miner.owner = ctx.accounts.owner.key();
    miner.asset_mint = asset_mint;
    miner.class = class;
    miner.bump = ctx.bumps.free_miner;
    miner.position.start(now, recent_adjust_index)?;

    let start_ts = miner.position.start_ts;
    let end_ts = miner.position.end_ts;

    let free_pool = &mut ctx.accounts.free_mining_pool;
    free_pool.miner_count = free_pool
        .miner_count
        .checked_add(1)
        .ok_or(ErrorCode::MathOverflow)?;

    emit!(FreeMiningStarted {
        free_mining_pool: free_pool_key,
        owner: ctx.accounts.owner.key(),
        asset_mint,
        class,
        start_ts,
        end_ts,
    });

    Ok(())
}
