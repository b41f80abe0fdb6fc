use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::state::{BetRecord, EventLedger, ProtocolConfig};
use crate::events::BetWithdrawn;
use crate::errors::SettleError;
use crate::utils::pay_out;

#[derive(Accounts)]
pub struct WithdrawBet<'info> {
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

/// Returns the full stake on `outcome` from a cancelled event, or from a
/// resolved event where nobody backed the winner.
pub fn process_withdraw_bet(ctx: Context<WithdrawBet>, outcome: u8) -> Result<()> {
    let event = &mut ctx.accounts.event;
    let bet = &mut ctx.accounts.bet_record;
    let clock = Clock::get()?;

    let amount = event.withdraw_bet(bet, outcome, clock.unix_timestamp)?;

    let id_bytes = event.event_id.to_le_bytes();
    let seeds = &[EVENT_SEED, id_bytes.as_ref(), &[event.bump]];
    let signer = &[&seeds[..]];

    pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.stake_vault,
        &ctx.accounts.user_ata,
        event.to_account_info(),
        signer,
        amount,
    )?;

    emit!(BetWithdrawn {
        event_id: event.event_id,
        user: ctx.accounts.user.key(),
        outcome,
        amount,
        total_staked: event.total_staked,
    });

    Ok(())
}
