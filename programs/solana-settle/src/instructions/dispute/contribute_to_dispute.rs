use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::state::{BetRecord, DisputeStake, EventLedger, ProtocolConfig};
use crate::events::DisputeContributed;
use crate::errors::SettleError;
use crate::utils::deposit;

#[derive(Accounts)]
pub struct ContributeToDispute<'info> {
    #[account(
        mut,
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Box<Account<'info, EventLedger>>,

    /// Only bettors on this event may dispute it
    #[account(
        seeds = [BET_SEED, event.key().as_ref(), contributor.key().as_ref()],
        bump = bet_record.bump,
    )]
    pub bet_record: Box<Account<'info, BetRecord>>,

    #[account(
        init_if_needed,
        seeds = [DISPUTE_STAKE_SEED, event.key().as_ref(), contributor.key().as_ref()],
        bump,
        payer = contributor,
        space = DisputeStake::LEN
    )]
    pub dispute_stake: Box<Account<'info, DisputeStake>>,

    #[account(
        mut,
        seeds = [DISPUTE_VAULT_SEED, event.key().as_ref()],
        bump,
    )]
    pub dispute_vault: Account<'info, TokenAccount>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Box<Account<'info, ProtocolConfig>>,

    #[account(
        mut,
        constraint = contributor_ata.mint == protocol_config.collateral_mint @ SettleError::InvalidMint,
        constraint = contributor_ata.owner == contributor.key() @ SettleError::Unauthorized,
    )]
    pub contributor_ata: Account<'info, TokenAccount>,

    #[account(mut)]
    pub contributor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// The first contribution opens the dispute and records `reason`; later
/// ones only add to the pool.
pub fn process_contribute_to_dispute(
    ctx: Context<ContributeToDispute>,
    amount: u64,
    reason: String,
) -> Result<()> {
    let event_key = ctx.accounts.event.key();
    let contributor = ctx.accounts.contributor.key();
    let event = &mut ctx.accounts.event;
    let clock = Clock::get()?;

    let target_met = event.contribute_to_dispute(
        event_key,
        &ctx.accounts.bet_record,
        &mut ctx.accounts.dispute_stake,
        contributor,
        &reason,
        amount,
        clock.unix_timestamp,
        &ctx.accounts.protocol_config.params,
        ctx.bumps.dispute_stake,
    )?;

    deposit(
        &ctx.accounts.token_program,
        &ctx.accounts.contributor_ata,
        &ctx.accounts.dispute_vault,
        &ctx.accounts.contributor,
        amount,
    )?;

    if target_met {
        msg!("Dispute target met on event {}", event.event_id);
    }
    emit!(DisputeContributed {
        event_id: event.event_id,
        contributor,
        amount,
        pool_total: event.dispute.total,
        target_met,
    });

    Ok(())
}
