use anchor_lang::prelude::*;
use crate::constants::CONFIG_SEED;
use crate::state::{self, ProtocolConfig, TrustRecord};
use crate::errors::SettleError;

#[derive(Accounts)]
pub struct BetLimitView<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

    /// Absent for creators who have never created an event
    pub trust_record: Option<Account<'info, TrustRecord>>,
}

/// Ceiling an event backed by `collateral` would get for `creator` today.
pub fn process_compute_bet_limit(
    ctx: Context<BetLimitView>,
    creator: Pubkey,
    collateral: u64,
) -> Result<u64> {
    let params = &ctx.accounts.protocol_config.params;
    let score = match &ctx.accounts.trust_record {
        Some(trust) => {
            require_keys_eq!(trust.creator, creator, SettleError::Unauthorized);
            trust.score
        }
        None => params.trust_initial,
    };
    state::compute_bet_limit(params, score, collateral)
}
