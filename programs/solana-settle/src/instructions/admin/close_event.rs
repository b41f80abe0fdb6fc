use anchor_lang::prelude::*;
use crate::constants::{CONFIG_SEED, EVENT_SEED};
use crate::state::{EventLedger, ProtocolConfig};
use crate::events::OutcomeNotified;
use crate::errors::SettleError;

#[derive(Accounts)]
pub struct CloseEvent<'info> {
    #[account(
        mut,
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Box<Account<'info, EventLedger>>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = protocol_config.bump,
        has_one = admin @ SettleError::Unauthorized,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

    pub admin: Signer<'info>,
}

/// Terminal for accounting. Payouts, refunds and collateral claims stay open.
pub fn process_close_event(ctx: Context<CloseEvent>) -> Result<()> {
    let event = &mut ctx.accounts.event;
    let clock = Clock::get()?;

    event.mark_closed(clock.unix_timestamp)?;

    emit!(OutcomeNotified {
        event_id: event.event_id,
        status: event.status,
        winning_outcome: event.winning_outcome,
    });

    Ok(())
}
