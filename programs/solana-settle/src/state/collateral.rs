use anchor_lang::prelude::*;
use crate::constants::BPS_DENOMINATOR;
use crate::errors::SettleError;
use crate::state::{CollateralMode, RiskParams};
use crate::utils::{mul_div, split_three, ThreeWaySplit};

/// Creator collateral custodied for one event.
///
/// Seeds: ["collateral", event]. The tokens themselves sit in the
/// ["collateral_vault", event] token account owned by the event PDA.
#[account]
#[derive(InitSpace)]
pub struct CollateralRecord {
    pub event: Pubkey,
    pub creator: Pubkey,
    /// Creator-owned balance, zero once released or forfeited
    pub balance: u64,
    pub locked: bool,
    pub forfeited: bool,
    /// Part of a forfeiture reserved for dispute contributors
    pub contributors_share: u64,
    pub contributors_claimed: u64,
    pub settled_at: Option<i64>,
    pub bump: u8,
}

impl CollateralRecord {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub fn lock(&mut self, event: Pubkey, creator: Pubkey, amount: u64, bump: u8) -> Result<()> {
        require!(amount > 0, SettleError::InsufficientCollateral);
        self.event = event;
        self.creator = creator;
        self.balance = amount;
        self.locked = true;
        self.forfeited = false;
        self.contributors_share = 0;
        self.contributors_claimed = 0;
        self.settled_at = None;
        self.bump = bump;
        Ok(())
    }

    pub fn top_up(&mut self, amount: u64) -> Result<u64> {
        require!(self.locked, SettleError::CollateralNotLocked);
        require!(amount > 0, SettleError::ZeroAmount);
        self.balance = self.balance.checked_add(amount).ok_or(SettleError::MathOverflow)?;
        Ok(self.balance)
    }

    /// Unlocks and zeroes the balance, returning what the creator is owed.
    pub fn release(&mut self, now: i64) -> Result<u64> {
        require!(self.locked, SettleError::CollateralNotLocked);
        let amount = self.balance;
        self.balance = 0;
        self.locked = false;
        self.settled_at = Some(now);
        Ok(amount)
    }

    /// Splits the locked balance into contributors / protocol / burn.
    /// The contributors' part stays in the vault until claimed.
    pub fn forfeit(&mut self, params: &RiskParams, now: i64) -> Result<ThreeWaySplit> {
        require!(self.locked, SettleError::CollateralNotLocked);
        let split = split_three(
            self.balance,
            params.forfeit_contributors_bps,
            params.forfeit_protocol_bps,
        )?;
        self.contributors_share = split.major;
        self.contributors_claimed = 0;
        self.balance = 0;
        self.locked = false;
        self.forfeited = true;
        self.settled_at = Some(now);
        Ok(split)
    }

    /// Pro-rata slice of the contributors' share. Once-per-contributor is
    /// enforced by the caller's `DisputeStake`.
    pub fn claim_share(&mut self, contribution: u64, pool_total: u64) -> Result<u64> {
        require!(self.forfeited, SettleError::NotForfeited);
        require!(contribution > 0, SettleError::NoContribution);
        let share = mul_div(self.contributors_share, contribution, pool_total)?;
        let remaining = self
            .contributors_share
            .checked_sub(self.contributors_claimed)
            .ok_or(SettleError::MathOverflow)?;
        let share = share.min(remaining);
        self.contributors_claimed = self
            .contributors_claimed
            .checked_add(share)
            .ok_or(SettleError::MathOverflow)?;
        Ok(share)
    }
}

/// Collateral a creator with `score` must post.
pub fn required_collateral(params: &RiskParams, score: i64) -> Result<u64> {
    match params.collateral_mode {
        CollateralMode::Fixed => Ok(params.fixed_collateral),
        CollateralMode::ReputationScaled => {
            require!(params.trust_max > 0, SettleError::MathOverflow);
            let headroom = (params.trust_max as i128 - score as i128).max(0) as u128;
            let scaled = (params.max_collateral as u128)
                .checked_mul(headroom)
                .ok_or(SettleError::MathOverflow)?
                / params.trust_max as u128;
            let scaled = u64::try_from(scaled).unwrap_or(u64::MAX);
            Ok(scaled.clamp(params.min_collateral, params.max_collateral))
        }
    }
}

/// Ceiling multiplier in basis points: above 100% for positive trust, below
/// (but never under the floor) for negative trust.
pub fn trust_factor_bps(params: &RiskParams, score: i64) -> Result<u64> {
    let step = params.trust_step_bps as u64;
    if score >= 0 {
        let bonus = (score as u64).checked_mul(step).ok_or(SettleError::MathOverflow)?;
        Ok(BPS_DENOMINATOR.checked_add(bonus).ok_or(SettleError::MathOverflow)?)
    } else {
        let magnitude = score.checked_abs().ok_or(SettleError::MathOverflow)? as u64;
        let reduction = magnitude.checked_mul(step).ok_or(SettleError::MathOverflow)?;
        Ok(BPS_DENOMINATOR
            .saturating_sub(reduction)
            .max(params.trust_floor_bps as u64))
    }
}

/// Maximum total stake an event backed by `collateral` may accept.
pub fn compute_bet_limit(params: &RiskParams, score: i64, collateral: u64) -> Result<u64> {
    let base = collateral
        .checked_mul(params.bet_multiplier)
        .ok_or(SettleError::MathOverflow)?;
    mul_div(base, trust_factor_bps(params, score)?, BPS_DENOMINATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked(amount: u64) -> CollateralRecord {
        let mut record = CollateralRecord {
            event: Pubkey::default(),
            creator: Pubkey::default(),
            balance: 0,
            locked: false,
            forfeited: false,
            contributors_share: 0,
            contributors_claimed: 0,
            settled_at: None,
            bump: 0,
        };
        record.lock(Pubkey::new_unique(), Pubkey::new_unique(), amount, 255).unwrap();
        record
    }

    #[test]
    fn test_bet_limit_with_zero_trust_is_plain_multiplier() {
        let params = RiskParams::default();
        assert_eq!(compute_bet_limit(&params, 0, 100).unwrap(), params.bet_multiplier * 100);
    }

    #[test]
    fn test_bet_limit_scales_with_trust() {
        let params = RiskParams::default();
        // +10 trust at 1%/point -> 110%
        assert_eq!(compute_bet_limit(&params, 10, 100).unwrap(), 220);
        // -50 trust -> 50%
        assert_eq!(compute_bet_limit(&params, -50, 100).unwrap(), 100);
        // -90 trust would be 10%, floored at 25%
        assert_eq!(compute_bet_limit(&params, -90, 100).unwrap(), 50);
    }

    #[test]
    fn test_bet_limit_rejects_overflowing_trust() {
        let params = RiskParams::default();
        assert!(compute_bet_limit(&params, i64::MIN, 100).is_err());
        assert!(compute_bet_limit(&params, i64::MAX, 100).is_err());
        assert!(compute_bet_limit(&params, 0, u64::MAX).is_err());
    }

    #[test]
    fn test_fixed_collateral_ignores_trust() {
        let params = RiskParams::default();
        assert_eq!(required_collateral(&params, -99).unwrap(), params.fixed_collateral);
        assert_eq!(required_collateral(&params, 99).unwrap(), params.fixed_collateral);
    }

    #[test]
    fn test_reputation_scaled_collateral() {
        let params = RiskParams {
            collateral_mode: CollateralMode::ReputationScaled,
            min_collateral: 10,
            max_collateral: 1_000,
            ..RiskParams::default()
        };
        assert_eq!(required_collateral(&params, 0).unwrap(), 1_000);
        assert_eq!(required_collateral(&params, 50).unwrap(), 500);
        assert_eq!(required_collateral(&params, 100).unwrap(), 10);
        assert_eq!(required_collateral(&params, 99).unwrap(), 10);
        assert_eq!(required_collateral(&params, -30).unwrap(), 1_000);
    }

    #[test]
    fn test_reputation_scaled_guards_zero_max_trust() {
        let params = RiskParams {
            collateral_mode: CollateralMode::ReputationScaled,
            trust_max: 0,
            ..RiskParams::default()
        };
        assert!(required_collateral(&params, 0).is_err());
    }

    #[test]
    fn test_release_zeroes_and_unlocks() {
        let mut record = locked(100);
        record.top_up(50).unwrap();
        assert_eq!(record.release(7).unwrap(), 150);
        assert_eq!(record.balance, 0);
        assert!(!record.locked);
        assert!(record.release(8).is_err());
        assert!(record.top_up(1).is_err());
    }

    #[test]
    fn test_forfeit_split_sums_to_locked_balance() {
        let params = RiskParams::default();
        let mut record = locked(1_001);
        let split = record.forfeit(&params, 9).unwrap();
        assert_eq!(split.major + split.minor + split.burned, 1_001);
        assert_eq!(record.contributors_share, split.major);
        assert_eq!(record.balance, 0);
        assert!(!record.locked && record.forfeited);
        assert!(record.forfeit(&params, 10).is_err());
    }

    #[test]
    fn test_forfeited_share_is_pro_rata() {
        let params = RiskParams::default();
        let mut record = locked(100);
        record.forfeit(&params, 1).unwrap();
        assert_eq!(record.claim_share(4, 10).unwrap(), 32);
        assert_eq!(record.claim_share(6, 10).unwrap(), 48);
        assert_eq!(record.contributors_claimed, 80);
    }

    #[test]
    fn test_claim_share_requires_forfeiture() {
        let mut record = locked(100);
        assert!(record.claim_share(1, 1).is_err());
    }
}
