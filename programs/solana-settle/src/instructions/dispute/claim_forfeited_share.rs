use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::state::{CollateralRecord, DisputeStake, EventLedger};
use crate::events::ForfeitedShareClaimed;
use crate::errors::SettleError;
use crate::utils::pay_out;

#[derive(Accounts)]
pub struct ClaimForfeitedShare<'info> {
    #[account(
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Box<Account<'info, EventLedger>>,

    #[account(
        mut,
        seeds = [COLLATERAL_SEED, event.key().as_ref()],
        bump = collateral_record.bump,
    )]
    pub collateral_record: Box<Account<'info, CollateralRecord>>,

    #[account(
        mut,
        seeds = [DISPUTE_STAKE_SEED, event.key().as_ref(), contributor.key().as_ref()],
        bump = dispute_stake.bump,
        has_one = contributor @ SettleError::Unauthorized,
    )]
    pub dispute_stake: Box<Account<'info, DisputeStake>>,

    #[account(
        mut,
        seeds = [COLLATERAL_VAULT_SEED, event.key().as_ref()],
        bump,
    )]
    pub collateral_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [DISPUTE_VAULT_SEED, event.key().as_ref()],
        bump,
    )]
    pub dispute_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = contributor_ata.mint == collateral_vault.mint @ SettleError::InvalidMint,
        constraint = contributor_ata.owner == contributor.key() @ SettleError::Unauthorized,
    )]
    pub contributor_ata: Account<'info, TokenAccount>,

    pub contributor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// After an overturned outcome: the contribution back, plus a pro-rata cut
/// of the contributors' share of the forfeited collateral.
pub fn process_claim_forfeited_share(ctx: Context<ClaimForfeitedShare>) -> Result<()> {
    let event = &ctx.accounts.event;

    let (contribution, share) = ctx
        .accounts
        .dispute_stake
        .take_forfeiture(&event.dispute, &mut ctx.accounts.collateral_record)?;

    let id_bytes = event.event_id.to_le_bytes();
    let seeds = &[EVENT_SEED, id_bytes.as_ref(), &[event.bump]];
    let signer = &[&seeds[..]];

    pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.dispute_vault,
        &ctx.accounts.contributor_ata,
        event.to_account_info(),
        signer,
        contribution,
    )?;
    pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.collateral_vault,
        &ctx.accounts.contributor_ata,
        event.to_account_info(),
        signer,
        share,
    )?;

    emit!(ForfeitedShareClaimed {
        event_id: event.event_id,
        contributor: ctx.accounts.contributor.key(),
        contribution,
        share,
    });

    Ok(())
}
