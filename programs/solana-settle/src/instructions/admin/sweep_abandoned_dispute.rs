use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::{CONFIG_SEED, DISPUTE_VAULT_SEED, EVENT_SEED};
use crate::state::{EventLedger, ProtocolConfig};
use crate::events::DisputePoolSwept;
use crate::errors::SettleError;
use crate::utils::pay_out;

#[derive(Accounts)]
pub struct SweepAbandonedDispute<'info> {
    #[account(
        mut,
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Box<Account<'info, EventLedger>>,

    #[account(
        mut,
        seeds = [DISPUTE_VAULT_SEED, event.key().as_ref()],
        bump,
    )]
    pub dispute_vault: Account<'info, TokenAccount>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = protocol_config.bump,
        has_one = admin @ SettleError::Unauthorized,
        has_one = treasury,
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

    #[account(mut)]
    pub treasury: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// A dispute nobody adjudicated within the long-stop: the pool goes to the
/// protocol and the reported outcome stands, unblocking claims.
pub fn process_sweep_abandoned_dispute(ctx: Context<SweepAbandonedDispute>) -> Result<()> {
    let event = &mut ctx.accounts.event;
    let params = &ctx.accounts.protocol_config.params;
    let clock = Clock::get()?;

    let amount = event.dispute.sweep(clock.unix_timestamp, params.abandon_timeout)?;

    let id_bytes = event.event_id.to_le_bytes();
    let seeds = &[EVENT_SEED, id_bytes.as_ref(), &[event.bump]];
    let signer = &[&seeds[..]];

    pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.dispute_vault,
        &ctx.accounts.treasury,
        event.to_account_info(),
        signer,
        amount,
    )?;

    emit!(DisputePoolSwept {
        event_id: event.event_id,
        amount,
    });

    Ok(())
}
