use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use crate::constants::*;
use crate::state::{settle_collateral, CollateralRecord, EventLedger, ProtocolConfig, TrustRecord};
use crate::events::{CollateralReleased, FeesDistributed};
use crate::errors::SettleError;
use crate::utils::pay_out;

#[derive(Accounts)]
pub struct ClaimCollateral<'info> {
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
        mut,
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
        mut,
        seeds = [STAKE_VAULT_SEED, event.key().as_ref()],
        bump,
    )]
    pub stake_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = protocol_config.bump,
        has_one = treasury,
    )]
    pub protocol_config: Box<Account<'info, ProtocolConfig>>,

    #[account(mut)]
    pub treasury: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = creator_ata.mint == protocol_config.collateral_mint @ SettleError::InvalidMint,
        constraint = creator_ata.owner == creator.key() @ SettleError::Unauthorized,
    )]
    pub creator_ata: Box<Account<'info, TokenAccount>>,

    pub creator: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Releases the creator's collateral once the event is settled or cancelled
/// and no dispute is pending. Settles the fee on the way out; every clean
/// release earns the creator trust.
pub fn process_claim_collateral(ctx: Context<ClaimCollateral>) -> Result<()> {
    let params = ctx.accounts.protocol_config.params;
    let event = &mut ctx.accounts.event;
    let clock = Clock::get()?;

    let settlement = settle_collateral(
        event,
        &mut ctx.accounts.collateral_record,
        &mut ctx.accounts.trust_record,
        &params,
        clock.unix_timestamp,
    )?;
    let fees = settlement.fees;
    let amount = settlement.released;

    let id_bytes = event.event_id.to_le_bytes();
    let seeds = &[EVENT_SEED, id_bytes.as_ref(), &[event.bump]];
    let signer = &[&seeds[..]];

    pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.stake_vault,
        &ctx.accounts.treasury,
        event.to_account_info(),
        signer,
        fees.protocol,
    )?;
    pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.stake_vault,
        &ctx.accounts.creator_ata,
        event.to_account_info(),
        signer,
        fees.creator,
    )?;
    pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.collateral_vault,
        &ctx.accounts.creator_ata,
        event.to_account_info(),
        signer,
        amount,
    )?;

    if fees.protocol > 0 || fees.creator > 0 {
        emit!(FeesDistributed {
            event_id: event.event_id,
            protocol: fees.protocol,
            creator: fees.creator,
        });
    }
    emit!(CollateralReleased {
        event_id: event.event_id,
        creator: event.creator,
        amount,
        trust_score: settlement.trust_score,
    });
    Ok(())
}
