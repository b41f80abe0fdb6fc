use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};
use crate::constants::{CONFIG_SEED, MAX_ADJUDICATORS};
use crate::state::{ProtocolConfig, RiskParams};
use crate::events::ProtocolInitialized;
use crate::errors::SettleError;

#[derive(Accounts)]
pub struct InitProtocol<'info> {
    #[account(
        init,
        seeds = [CONFIG_SEED],
        bump,
        payer = admin,
        space = ProtocolConfig::LEN
    )]
    pub protocol_config: Account<'info, ProtocolConfig>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub collateral_mint: Account<'info, Mint>,

    /// Receives protocol fees, protocol shares of forfeitures and swept pools
    #[account(token::mint = collateral_mint)]
    pub treasury: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
}

pub fn process_init_protocol(
    ctx: Context<InitProtocol>,
    params: RiskParams,
    adjudicators: Vec<Pubkey>,
) -> Result<()> {
    params.validate()?;
    require!(!adjudicators.is_empty(), SettleError::InvalidParams);
    require!(adjudicators.len() <= MAX_ADJUDICATORS, SettleError::TooManyAdjudicators);

    let config = &mut ctx.accounts.protocol_config;
    config.admin = ctx.accounts.admin.key();
    config.treasury = ctx.accounts.treasury.key();
    config.collateral_mint = ctx.accounts.collateral_mint.key();
    config.adjudicators = adjudicators;
    config.params = params;
    config.total_events = 0;
    config.bump = ctx.bumps.protocol_config;

    emit!(ProtocolInitialized {
        admin: config.admin,
        treasury: config.treasury,
        fee_bps: config.params.fee_bps,
        adjudicators: config.adjudicators.len() as u8,
    });

    Ok(())
}
