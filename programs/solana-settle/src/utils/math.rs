use anchor_lang::prelude::*;
use crate::constants::BPS_DENOMINATOR;
use crate::errors::SettleError;

/// `amount * numerator / denominator` in u128, truncating toward zero.
pub fn mul_div(amount: u64, numerator: u64, denominator: u64) -> Result<u64> {
    require!(denominator > 0, SettleError::MathOverflow);
    let product = (amount as u128)
        .checked_mul(numerator as u128)
        .ok_or(SettleError::MathOverflow)?;
    u64::try_from(product / denominator as u128).map_err(|_| error!(SettleError::MathOverflow))
}

pub fn bps_of(amount: u64, bps: u16) -> Result<u64> {
    mul_div(amount, bps as u64, BPS_DENOMINATOR)
}

/// Disposition of a forfeited or surrendered balance.
///
/// `major` and `minor` are basis-point shares of the input; `burned` takes
/// whatever is left, so the three always sum to the input exactly.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ThreeWaySplit {
    pub major: u64,
    pub minor: u64,
    pub burned: u64,
}

pub fn split_three(amount: u64, major_bps: u16, minor_bps: u16) -> Result<ThreeWaySplit> {
    require!(
        major_bps as u64 + minor_bps as u64 <= BPS_DENOMINATOR,
        SettleError::InvalidParams
    );
    let major = bps_of(amount, major_bps)?;
    let minor = bps_of(amount, minor_bps)?;
    let burned = amount
        .checked_sub(major)
        .and_then(|rest| rest.checked_sub(minor))
        .ok_or(SettleError::MathOverflow)?;
    Ok(ThreeWaySplit { major, minor, burned })
}
