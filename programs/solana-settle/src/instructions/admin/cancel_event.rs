use anchor_lang::prelude::*;
use crate::constants::{CONFIG_SEED, EVENT_SEED};
use crate::state::{EventLedger, ProtocolConfig};
use crate::events::OutcomeNotified;
use crate::errors::SettleError;

#[derive(Accounts)]
pub struct CancelEvent<'info> {
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

pub fn process_cancel_event(ctx: Context<CancelEvent>) -> Result<()> {
    let event = &mut ctx.accounts.event;
    let clock = Clock::get()?;

    event.cancel(clock.unix_timestamp, &ctx.accounts.protocol_config.params)?;

    msg!("Event {} cancelled with {} staked", event.event_id, event.total_staked);
    emit!(OutcomeNotified {
        event_id: event.event_id,
        status: event.status,
        winning_outcome: None,
    });

    Ok(())
}
