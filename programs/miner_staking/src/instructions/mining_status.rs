use anchor_lang::prelude::*;

use crate::{instructions::MinerBatchView, state::MinerPosition};

/// positions `from..=to` of one batch
pub fn handler(ctx: Context<MinerBatchView>, from: u32, to: u32) -> Result<Vec<MinerPosition>> {
    Ok(ctx.accounts.miner_batch.status(from, to)?.to_vec())
}
