use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::state::{settle_dispute, CollateralRecord, EventLedger, PoolDisposition, ProtocolConfig, TrustRecord};
use crate::events::{CollateralForfeited, DisputePoolSurrendered, DisputeResolved, FeesDistributed};
use crate::errors::SettleError;
use crate::utils::{burn_from_vault, pay_out};

#[derive(Accounts)]
pub struct ResolveDisputeExternally<'info> {
    #[account(
        mut,
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
        seeds = [TRUST_SEED, event.creator.as_ref()],
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
        mut,
        seeds = [DISPUTE_VAULT_SEED, event.key().as_ref()],
        bump,
    )]
    pub dispute_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = protocol_config.bump,
        has_one = treasury,
        has_one = collateral_mint,
        constraint = protocol_config.is_adjudicator(&adjudicator.key()) @ SettleError::Unauthorized,
    )]
    pub protocol_config: Box<Account<'info, ProtocolConfig>>,

    #[account(mut)]
    pub treasury: Box<Account<'info, TokenAccount>>,

    /// Receives the creator's share of a surrendered dispute pool
    #[account(
        mut,
        token::mint = collateral_mint,
        constraint = creator_ata.owner == event.creator @ SettleError::Unauthorized,
    )]
    pub creator_ata: Box<Account<'info, TokenAccount>>,

    /// Mutable for burns
    #[account(mut)]
    pub collateral_mint: Box<Account<'info, Mint>>,

    pub adjudicator: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Adjudicator's final outcome for a disputed event.
///
/// Overturned: collateral is forfeited (contributors / protocol / burn), the
/// creator is penalized and the whole fee goes to the protocol. Upheld with
/// the target met: the pool is split creator / protocol / burn. Upheld
/// without the target: contributors reclaim their stakes individually.
pub fn process_resolve_dispute(ctx: Context<ResolveDisputeExternally>, final_outcome: u8) -> Result<()> {
    let params = ctx.accounts.protocol_config.params;
    let event = &mut ctx.accounts.event;
    let clock = Clock::get()?;

    let settlement = settle_dispute(
        event,
        &mut ctx.accounts.collateral_record,
        &mut ctx.accounts.trust_record,
        final_outcome,
        &params,
        clock.unix_timestamp,
    )?;
    let forfeiture = settlement.forfeiture;
    let pool = settlement.pool;

    let id_bytes = event.event_id.to_le_bytes();
    let seeds = &[EVENT_SEED, id_bytes.as_ref(), &[event.bump]];
    let signer = &[&seeds[..]];

    // Forfeiture: protocol share out, burn share destroyed, contributors' share stays
    pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.collateral_vault,
        &ctx.accounts.treasury,
        event.to_account_info(),
        signer,
        forfeiture.minor,
    )?;
    burn_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.collateral_mint,
        &ctx.accounts.collateral_vault,
        event.to_account_info(),
        signer,
        forfeiture.burned,
    )?;
    pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.stake_vault,
        &ctx.accounts.treasury,
        event.to_account_info(),
        signer,
        settlement.fees.protocol,
    )?;

    // Surrendered pool
    pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.dispute_vault,
        &ctx.accounts.creator_ata,
        event.to_account_info(),
        signer,
        pool.major,
    )?;
    pay_out(
        &ctx.accounts.token_program,
        &ctx.accounts.dispute_vault,
        &ctx.accounts.treasury,
        event.to_account_info(),
        signer,
        pool.minor,
    )?;
    burn_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.collateral_mint,
        &ctx.accounts.dispute_vault,
        event.to_account_info(),
        signer,
        pool.burned,
    )?;

    if settlement.outcome_changed {
        msg!("Event {} overturned, creator trust now {}", event.event_id, settlement.trust_score);
        emit!(CollateralForfeited {
            event_id: event.event_id,
            contributors_share: forfeiture.major,
            protocol_share: forfeiture.minor,
            burned: forfeiture.burned,
        });
        emit!(FeesDistributed {
            event_id: event.event_id,
            protocol: settlement.fees.protocol,
            creator: settlement.fees.creator,
        });
    } else if settlement.disposition == PoolDisposition::SurrenderedToCreator {
        emit!(DisputePoolSurrendered {
            event_id: event.event_id,
            creator_share: pool.major,
            protocol_share: pool.minor,
            burned: pool.burned,
        });
    }

    emit!(DisputeResolved {
        event_id: event.event_id,
        adjudicator: ctx.accounts.adjudicator.key(),
        outcome_changed: settlement.outcome_changed,
        winning_outcome: final_outcome,
        disposition: settlement.disposition,
        trust_score: settlement.trust_score,
    });

    Ok(())
}
