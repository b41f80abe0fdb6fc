use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::state::{DisputeStake, EventLedger};
use crate::events::DisputeRefunded;
use crate::errors::SettleError;
use crate::utils::pay_out;

#[derive(Accounts)]
pub struct ClaimDisputeRefund<'info> {
    #[account(
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Box<Account<'info, EventLedger>>,

    #[account(
        mut,
        seeds = [DISPUTE_STAKE_SEED, event.key().as_ref(), contributor.key().as_ref()],
        bump = dispute_stake.bump,
        has_one = contributor @ SettleError::Unauthorized,
    )]
    pub dispute_stake: Box<Account<'info, DisputeStake>>,

    #[account(
        mut,
        seeds = [DISPUTE_VAULT_SEED, event.key().as_ref()],
        bump,
    )]
    pub dispute_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = contributor_ata.mint == dispute_vault.mint @ SettleError::InvalidMint,
        constraint = contributor_ata.owner == contributor.key() @ SettleError::Unauthorized,
    )]
    pub contributor_ata: Account<'info, TokenAccount>,

    pub contributor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Outcome upheld but the target was never met.
pub fn process_claim_dispute_refund(ctx: Context<ClaimDisputeRefund>) -> Result<()> {
    let event = &ctx.accounts.event;
    let amount = ctx.accounts.dispute_stake.take_refund(&event.dispute)?;

    let id_bytes = event.event_id.to_le_bytes();
    let seeds = &[EVENT_SEED, id_bytes.as_ref(), &[event.bump]];
    let signer = &[&seeds[..]];

    pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.dispute_vault,
        &ctx.accounts.contributor_ata,
        event.to_account_info(),
        signer,
        amount,
    )?;

    emit!(DisputeRefunded {
        event_id: event.event_id,
        contributor: ctx.accounts.contributor.key(),
        amount,
    });

    Ok(())
}
