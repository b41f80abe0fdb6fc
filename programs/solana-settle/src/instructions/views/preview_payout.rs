use anchor_lang::prelude::*;
use crate::constants::{BET_SEED, CONFIG_SEED, EVENT_SEED};
use crate::state::{BetRecord, EventLedger, ProtocolConfig};

#[derive(Accounts)]
pub struct PreviewPayout<'info> {
    #[account(
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Box<Account<'info, EventLedger>>,

    #[account(
        seeds = [BET_SEED, event.key().as_ref(), bet_record.user.as_ref()],
        bump = bet_record.bump,
    )]
    pub bet_record: Box<Account<'info, BetRecord>>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,
}

pub fn process_preview_payout(ctx: Context<PreviewPayout>) -> Result<u64> {
    ctx.accounts
        .event
        .compute_payout(&ctx.accounts.bet_record, &ctx.accounts.protocol_config.params)
}
