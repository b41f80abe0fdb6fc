use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::state::{compute_bet_limit, CollateralRecord, EventLedger, ProtocolConfig, TrustRecord};
use crate::events::CollateralToppedUp;
use crate::errors::SettleError;
use crate::utils::deposit;

#[derive(Accounts)]
pub struct TopUpCollateral<'info> {
    #[account(
        mut,
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
        has_one = creator @ SettleError::Unauthorized,
    )]
    pub event: Box<Account<'info, EventLedger>>,

    #[account(
        mut,
        seeds = [COLLATERAL_SEED, event.key().as_ref()],
        bump = collateral_record.bump,
    )]
    pub collateral_record: Box<Account<'info, CollateralRecord>>,

    #[account(
        seeds = [TRUST_SEED, creator.key().as_ref()],
        bump = trust_record.bump,
    )]
    pub trust_record: Box<Account<'info, TrustRecord>>,

    #[account(
        mut,
        seeds = [COLLATERAL_VAULT_SEED, event.key().as_ref()],
        bump,
    )]
    pub collateral_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = protocol_config.bump,
    )]
    pub protocol_config: Box<Account<'info, ProtocolConfig>>,

    #[account(
        mut,
        constraint = creator_ata.mint == protocol_config.collateral_mint @ SettleError::InvalidMint,
        token::authority = creator,
    )]
    pub creator_ata: Box<Account<'info, TokenAccount>>,

    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Adds collateral to an open event and re-derives its ceiling from the
/// new balance and the creator's current trust. Capacity only grows.
pub fn process_top_up_collateral(ctx: Context<TopUpCollateral>, amount: u64) -> Result<()> {
    let params = &ctx.accounts.protocol_config.params;
    let event = &mut ctx.accounts.event;
    let collateral = &mut ctx.accounts.collateral_record;

    require!(amount > 0, SettleError::ZeroAmount);
    let new_balance = collateral
        .balance
        .checked_add(amount)
        .ok_or(SettleError::MathOverflow)?;
    let candidate = compute_bet_limit(params, ctx.accounts.trust_record.score, new_balance)?;
    let new_ceiling = event.raise_ceiling(candidate)?;
    collateral.top_up(amount)?;

    deposit(
        &ctx.accounts.token_program,
        &ctx.accounts.creator_ata,
        &ctx.accounts.collateral_vault,
        &ctx.accounts.creator,
        amount,
    )?;

    emit!(CollateralToppedUp {
        event_id: event.event_id,
        amount,
        new_balance,
        new_ceiling,
    });

    Ok(())
}
