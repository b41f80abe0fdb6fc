use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::state::{BetRecord, EventLedger, ProtocolConfig};
use crate::events::PayoutClaimed;
use crate::errors::SettleError;
use crate::utils::pay_out;

#[derive(Accounts)]
pub struct ClaimPayout<'info> {
    #[account(
        mut,
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Box<Account<'info, EventLedger>>,

    #[account(
        mut,
        seeds = [BET_SEED, event.key().as_ref(), user.key().as_ref()],
        bump = bet_record.bump,
    )]
    pub bet_record: Box<Account<'info, BetRecord>>,

    #[account(
        mut,
        seeds = [STAKE_VAULT_SEED, event.key().as_ref()],
        bump,
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Box<Account<'info, ProtocolConfig>>,

    #[account(
        mut,
        constraint = user_ata.mint == protocol_config.collateral_mint @ SettleError::InvalidMint,
        constraint = user_ata.owner == user.key() @ SettleError::Unauthorized,
    )]
    pub user_ata: Account<'info, TokenAccount>,

    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn process_claim_payout(ctx: Context<ClaimPayout>) -> Result<()> {
    let event = &mut ctx.accounts.event;
    let bet = &mut ctx.accounts.bet_record;
    let clock = Clock::get()?;

    let payout = event.claim_payout(bet, clock.unix_timestamp, &ctx.accounts.protocol_config.params)?;

    let id_bytes = event.event_id.to_le_bytes();
    let seeds = &[EVENT_SEED, id_bytes.as_ref(), &[event.bump]];
    let signer = &[&seeds[..]];

    pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.stake_vault,
        &ctx.accounts.user_ata,
        event.to_account_info(),
        signer,
        payout,
    )?;

    emit!(PayoutClaimed {
        event_id: event.event_id,
        user: ctx.accounts.user.key(),
        amount: payout,
    });

    Ok(())
}
