use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::state::{compute_bet_limit, required_collateral, CollateralRecord, EventLedger, ProtocolConfig, TrustRecord};
use crate::events::EventCreated;
use crate::errors::SettleError;
use crate::utils::deposit;

#[derive(Accounts)]
#[instruction(event_id: u64)] // must equal protocol_config.total_events
pub struct CreateEvent<'info> {
    #[account(
        init,
        seeds = [EVENT_SEED, event_id.to_le_bytes().as_ref()],
        bump,
        payer = creator,
        space = EventLedger::LEN
    )]
    pub event: Box<Account<'info, EventLedger>>,

    #[account(
        init,
        seeds = [COLLATERAL_SEED, event.key().as_ref()],
        bump,
        payer = creator,
        space = CollateralRecord::LEN
    )]
    pub collateral_record: Box<Account<'info, CollateralRecord>>,

    #[account(
        init_if_needed,
        seeds = [TRUST_SEED, creator.key().as_ref()],
        bump,
        payer = creator,
        space = TrustRecord::LEN
    )]
    pub trust_record: Box<Account<'info, TrustRecord>>,

    #[account(
        init,
        seeds = [COLLATERAL_VAULT_SEED, event.key().as_ref()],
        bump,
        payer = creator,
        token::mint = collateral_mint,
        token::authority = event,
    )]
    pub collateral_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        seeds = [STAKE_VAULT_SEED, event.key().as_ref()],
        bump,
        payer = creator,
        token::mint = collateral_mint,
        token::authority = event,
    )]
    pub stake_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        seeds = [DISPUTE_VAULT_SEED, event.key().as_ref()],
        bump,
        payer = creator,
        token::mint = collateral_mint,
        token::authority = event,
    )]
    pub dispute_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = protocol_config.bump,
        has_one = collateral_mint,
    )]
    pub protocol_config: Box<Account<'info, ProtocolConfig>>,

    #[account(mut)]
    pub creator: Signer<'info>,

    /// Creator's collateral token account
    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = creator,
    )]
    pub creator_ata: Box<Account<'info, TokenAccount>>,

    pub collateral_mint: Box<Account<'info, Mint>>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateEventParams {
    pub outcomes: Vec<String>,
    pub open_time: i64,
    pub close_time: i64,
    pub collateral_amount: u64,
}

pub fn process_create_event(
    ctx: Context<CreateEvent>,
    event_id: u64,
    params: CreateEventParams,
) -> Result<()> {
    let clock = Clock::get()?;
    let creator = ctx.accounts.creator.key();
    let event_key = ctx.accounts.event.key();
    let config = &mut ctx.accounts.protocol_config;
    let risk = config.params;

    // Sequential ids keep PDAs derivable from the counter alone
    require!(event_id == config.total_events, SettleError::InvalidEventId);

    let trust = &mut ctx.accounts.trust_record;
    trust.ensure_initialized(creator, &risk, ctx.bumps.trust_record);
    require!(trust.meets_threshold(&risk), SettleError::TrustTooLow);

    let required = required_collateral(&risk, trust.score)?;
    require!(params.collateral_amount >= required, SettleError::InsufficientCollateral);
    let ceiling = compute_bet_limit(&risk, trust.score, params.collateral_amount)?;

    let event = &mut ctx.accounts.event;
    event.initialize(
        event_id,
        creator,
        params.outcomes,
        params.open_time,
        params.close_time,
        clock.unix_timestamp,
        ceiling,
        &risk,
        ctx.bumps.event,
    )?;
    ctx.accounts.collateral_record.lock(
        event_key,
        creator,
        params.collateral_amount,
        ctx.bumps.collateral_record,
    )?;
    trust.record_event()?;
    config.total_events = config.total_events.checked_add(1).ok_or(SettleError::MathOverflow)?;

    deposit(
        &ctx.accounts.token_program,
        &ctx.accounts.creator_ata,
        &ctx.accounts.collateral_vault,
        &ctx.accounts.creator,
        params.collateral_amount,
    )?;

    msg!("Event {} created, ceiling {}", event_id, ceiling);
    emit!(EventCreated {
        event_id,
        creator,
        outcomes: event.outcomes.clone(),
        open_time: event.open_time,
        close_time: event.close_time,
        collateral: params.collateral_amount,
        ceiling,
        trust_score: trust.score,
    });

    Ok(())
}
