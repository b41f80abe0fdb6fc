use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};
use crate::errors::SettleError;

// Every value movement goes through these. Callers update their own
// bookkeeping first, then call in here; a failed CPI reverts the instruction.

/// User-signed deposit into a program vault. Checks the source balance first
/// so an underfunded account fails with a program error, not a token error.
pub fn deposit<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    owner: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    require!(from.amount >= amount, SettleError::InsufficientBalance);
    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: to.to_account_info(),
                authority: owner.to_account_info(),
            },
        ),
        amount,
    )
}

/// PDA-signed transfer out of a program vault. Zero amounts are skipped.
pub fn pay_out<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    signer: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    require!(vault.amount >= amount, SettleError::InsufficientVault);
    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: vault.to_account_info(),
                to: to.to_account_info(),
                authority,
            },
            signer,
        ),
        amount,
    )
}

/// Permanently destroys vault tokens. This is the non-recoverable sink for
/// burn shares of forfeited collateral and surrendered dispute pools.
pub fn burn_from_vault<'info>(
    token_program: &Program<'info, Token>,
    mint: &Account<'info, Mint>,
    vault: &Account<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    signer: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    require!(vault.amount >= amount, SettleError::InsufficientVault);
    token::burn(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Burn {
                mint: mint.to_account_info(),
                from: vault.to_account_info(),
                authority,
            },
            signer,
        ),
        amount,
    )
}
