use anchor_lang::prelude::*;
use crate::constants::{CONFIG_SEED, EVENT_SEED};
use crate::state::{EventLedger, ProtocolConfig};
use crate::events::OutcomeSubmitted;

#[derive(Accounts)]
pub struct SubmitOutcome<'info> {
    #[account(
        mut,
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Box<Account<'info, EventLedger>>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

    pub creator: Signer<'info>,
}

/// Creator reports the winning outcome and arms the dispute window.
pub fn process_submit_outcome(ctx: Context<SubmitOutcome>, outcome: u8) -> Result<()> {
    let event = &mut ctx.accounts.event;
    let clock = Clock::get()?;

    event.submit_outcome(
        ctx.accounts.creator.key(),
        outcome,
        clock.unix_timestamp,
        &ctx.accounts.protocol_config.params,
    )?;

    msg!("Event {} resolved to outcome {}", event.event_id, outcome);
    emit!(OutcomeSubmitted {
        event_id: event.event_id,
        outcome,
        total_staked: event.total_staked,
        dispute_deadline: event.dispute.deadline,
        dispute_target: event.dispute.target,
    });

    Ok(())
}
