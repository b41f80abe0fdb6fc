use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::state::{BetRecord, EventLedger, ProtocolConfig};
use crate::events::BetPlaced;
use crate::errors::SettleError;
use crate::utils::deposit;

#[derive(Accounts)]
pub struct PlaceBet<'info> {
    #[account(
        mut,
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Box<Account<'info, EventLedger>>,

    #[account(
        init_if_needed,
        seeds = [BET_SEED, event.key().as_ref(), user.key().as_ref()],
        bump,
        payer = user,
        space = BetRecord::LEN
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

    #[account(mut)]
    pub user: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_place_bet(ctx: Context<PlaceBet>, outcome: u8, amount: u64) -> Result<()> {
    let event_key = ctx.accounts.event.key();
    let user = ctx.accounts.user.key();
    let event = &mut ctx.accounts.event;
    let bet = &mut ctx.accounts.bet_record;
    let clock = Clock::get()?;

    bet.ensure_initialized(event_key, user, event.outcome_count(), ctx.bumps.bet_record);
    event.place_bet(bet, outcome, amount, clock.unix_timestamp, &ctx.accounts.protocol_config.params)?;

    deposit(
        &ctx.accounts.token_program,
        &ctx.accounts.user_ata,
        &ctx.accounts.stake_vault,
        &ctx.accounts.user,
        amount,
    )?;

    emit!(BetPlaced {
        event_id: event.event_id,
        user,
        outcome,
        amount,
        outcome_total: event.outcome_stakes[outcome as usize],
        total_staked: event.total_staked,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
