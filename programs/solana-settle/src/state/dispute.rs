use anchor_lang::prelude::*;
use crate::constants::MAX_REASON_LEN;
use crate::errors::SettleError;
use crate::state::CollateralRecord;
use crate::utils::bps_of;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum DisputeState {
    #[default]
    None,
    Open,
    Resolved,
}

/// What happens to the contributed pool once the dispute is settled.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum PoolDisposition {
    #[default]
    Pending,
    /// Outcome upheld after the target was met: creator / protocol / burn
    SurrenderedToCreator,
    /// Outcome upheld, target never met: each contributor takes theirs back
    Refundable,
    /// Outcome overturned: contributions returned plus a collateral share
    ReturnedWithForfeiture,
    /// Never adjudicated; swept to the protocol after the long-stop
    Swept,
}

/// Dispute bookkeeping for one event, embedded in `EventLedger`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, InitSpace, Debug, Default)]
pub struct DisputePool {
    pub state: DisputeState,
    #[max_len(MAX_REASON_LEN)]
    pub reason: String,
    pub opened_by: Pubkey,
    /// End of the contribution window; pulled forward when the target is met
    pub deadline: i64,
    pub target: u64,
    pub total: u64,
    pub target_met: bool,
    pub contributors: u32,
    pub outcome_changed: bool,
    pub disposition: PoolDisposition,
    pub resolved_at: Option<i64>,
}

impl DisputePool {
    /// Opens the contribution window at outcome submission.
    pub fn arm(&mut self, now: i64, window: i64, total_staked: u64, target_bps: u16) -> Result<()> {
        self.state = DisputeState::None;
        self.deadline = now.checked_add(window).ok_or(SettleError::MathOverflow)?;
        self.target = bps_of(total_staked, target_bps)?;
        self.total = 0;
        self.target_met = false;
        self.contributors = 0;
        self.outcome_changed = false;
        self.disposition = PoolDisposition::Pending;
        self.resolved_at = None;
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.state == DisputeState::Open
    }

    pub fn window_closed(&self, now: i64) -> bool {
        now >= self.deadline
    }

    /// Adds `amount` to the pool. Returns true when this contribution met the target.
    pub fn contribute(
        &mut self,
        contributor: Pubkey,
        reason: &str,
        amount: u64,
        first_from_contributor: bool,
        min_contribution: u64,
        now: i64,
    ) -> Result<bool> {
        require!(self.state != DisputeState::Resolved, SettleError::DisputeAlreadyResolved);
        require!(!self.window_closed(now), SettleError::DisputeWindowExpired);
        require!(amount >= min_contribution, SettleError::BelowMinContribution);
        require!(reason.len() <= MAX_REASON_LEN, SettleError::ReasonTooLong);

        if self.state == DisputeState::None {
            self.state = DisputeState::Open;
            self.reason = reason.to_string();
            self.opened_by = contributor;
        }
        self.total = self.total.checked_add(amount).ok_or(SettleError::MathOverflow)?;
        if first_from_contributor {
            self.contributors = self.contributors.checked_add(1).ok_or(SettleError::MathOverflow)?;
        }

        if !self.target_met && self.total >= self.target {
            self.target_met = true;
            self.deadline = now;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn resolve(&mut self, outcome_changed: bool, now: i64) -> Result<PoolDisposition> {
        require!(self.is_open(), SettleError::NoOpenDispute);
        self.state = DisputeState::Resolved;
        self.outcome_changed = outcome_changed;
        self.disposition = if outcome_changed {
            PoolDisposition::ReturnedWithForfeiture
        } else if self.target_met {
            PoolDisposition::SurrenderedToCreator
        } else {
            PoolDisposition::Refundable
        };
        self.resolved_at = Some(now);
        Ok(self.disposition)
    }

    /// Closes out a dispute nobody adjudicated. The original outcome stands.
    pub fn sweep(&mut self, now: i64, abandon_timeout: i64) -> Result<u64> {
        require!(self.is_open(), SettleError::NoOpenDispute);
        let long_stop = self
            .deadline
            .checked_add(abandon_timeout)
            .ok_or(SettleError::MathOverflow)?;
        require!(now >= long_stop, SettleError::NotAbandoned);
        self.state = DisputeState::Resolved;
        self.outcome_changed = false;
        self.disposition = PoolDisposition::Swept;
        self.resolved_at = Some(now);
        Ok(self.total)
    }
}

/// One participant's contribution to an event's dispute pool.
///
/// Seeds: ["dispute_stake", event, contributor]
#[account]
#[derive(InitSpace)]
pub struct DisputeStake {
    pub event: Pubkey,
    pub contributor: Pubkey,
    pub amount: u64,
    pub settled: bool,
    pub bump: u8,
}

impl DisputeStake {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    /// Returns true on the contributor's first contribution.
    pub fn record(&mut self, event: Pubkey, contributor: Pubkey, amount: u64, bump: u8) -> Result<bool> {
        let first = self.amount == 0;
        if first {
            self.event = event;
            self.contributor = contributor;
            self.settled = false;
            self.bump = bump;
        }
        self.amount = self.amount.checked_add(amount).ok_or(SettleError::MathOverflow)?;
        Ok(first)
    }

    pub fn take_refund(&mut self, pool: &DisputePool) -> Result<u64> {
        require!(pool.disposition == PoolDisposition::Refundable, SettleError::NotRefundable);
        require!(!self.settled, SettleError::AlreadyClaimed);
        require!(self.amount > 0, SettleError::NoContribution);
        self.settled = true;
        Ok(self.amount)
    }

    /// Returns (own contribution, share of forfeited collateral).
    pub fn take_forfeiture(
        &mut self,
        pool: &DisputePool,
        collateral: &mut CollateralRecord,
    ) -> Result<(u64, u64)> {
        require!(
            pool.disposition == PoolDisposition::ReturnedWithForfeiture,
            SettleError::NotForfeited
        );
        require!(!self.settled, SettleError::AlreadyClaimed);
        require!(self.amount > 0, SettleError::NoContribution);
        self.settled = true;
        let share = collateral.claim_share(self.amount, pool.total)?;
        Ok((self.amount, share))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::assert_err;

    const HOUR: i64 = 3_600;

    fn armed(total_staked: u64) -> DisputePool {
        let mut pool = DisputePool::default();
        pool.arm(1_000, HOUR, total_staked, 1_000).unwrap();
        pool
    }

    fn stake() -> DisputeStake {
        DisputeStake {
            event: Pubkey::default(),
            contributor: Pubkey::default(),
            amount: 0,
            settled: false,
            bump: 0,
        }
    }

    #[test]
    fn test_arm_sets_target_and_deadline() {
        let pool = armed(100);
        assert_eq!(pool.target, 10);
        assert_eq!(pool.deadline, 1_000 + HOUR);
        assert_eq!(pool.state, DisputeState::None);
    }

    #[test]
    fn test_first_contribution_opens_and_records_reason() {
        let mut pool = armed(100);
        let who = Pubkey::new_unique();
        assert!(!pool.contribute(who, "wrong score", 4, true, 1, 1_100).unwrap());
        assert!(pool.is_open());
        assert_eq!(pool.reason, "wrong score");
        assert_eq!(pool.opened_by, who);
        pool.contribute(Pubkey::new_unique(), "ignored", 1, true, 1, 1_200).unwrap();
        assert_eq!(pool.reason, "wrong score");
        assert_eq!(pool.contributors, 2);
    }

    #[test]
    fn test_reaching_target_closes_window_early() {
        let mut pool = armed(100);
        assert!(!pool.contribute(Pubkey::new_unique(), "", 4, true, 1, 1_100).unwrap());
        assert!(pool.contribute(Pubkey::new_unique(), "", 6, true, 1, 1_200).unwrap());
        assert!(pool.target_met);
        assert_eq!(pool.deadline, 1_200);
        assert!(pool.window_closed(1_200));
        assert_err(
            pool.contribute(Pubkey::new_unique(), "", 5, true, 1, 1_201),
            SettleError::DisputeWindowExpired,
        );
    }

    #[test]
    fn test_contribution_guards() {
        let mut pool = armed(100);
        assert_err(
            pool.contribute(Pubkey::new_unique(), "", 1, true, 2, 1_100),
            SettleError::BelowMinContribution,
        );
        assert_err(
            pool.contribute(Pubkey::new_unique(), "", 5, true, 1, 1_000 + HOUR),
            SettleError::DisputeWindowExpired,
        );
        let long = "x".repeat(MAX_REASON_LEN + 1);
        assert_err(
            pool.contribute(Pubkey::new_unique(), &long, 5, true, 1, 1_100),
            SettleError::ReasonTooLong,
        );
        assert_eq!(pool.total, 0);
        assert_eq!(pool.state, DisputeState::None);
    }

    #[test]
    fn test_resolve_dispositions() {
        let mut pool = armed(100);
        assert_err(pool.resolve(false, 1_100), SettleError::NoOpenDispute);

        pool.contribute(Pubkey::new_unique(), "", 3, true, 1, 1_100).unwrap();
        assert_eq!(pool.resolve(false, 1_200).unwrap(), PoolDisposition::Refundable);
        assert_err(pool.resolve(true, 1_300), SettleError::NoOpenDispute);
        assert_err(
            pool.contribute(Pubkey::new_unique(), "", 3, true, 1, 1_300),
            SettleError::DisputeAlreadyResolved,
        );

        let mut pool = armed(100);
        pool.contribute(Pubkey::new_unique(), "", 10, true, 1, 1_100).unwrap();
        assert_eq!(pool.resolve(false, 1_200).unwrap(), PoolDisposition::SurrenderedToCreator);

        let mut pool = armed(100);
        pool.contribute(Pubkey::new_unique(), "", 10, true, 1, 1_100).unwrap();
        assert_eq!(pool.resolve(true, 1_200).unwrap(), PoolDisposition::ReturnedWithForfeiture);
        assert!(pool.outcome_changed);
    }

    #[test]
    fn test_sweep_after_long_stop() {
        let timeout = 7 * 24 * HOUR;
        let mut pool = armed(100);
        pool.contribute(Pubkey::new_unique(), "", 3, true, 1, 1_100).unwrap();
        let long_stop = pool.deadline + timeout;
        assert_err(pool.sweep(long_stop - 1, timeout), SettleError::NotAbandoned);
        assert_eq!(pool.sweep(long_stop, timeout).unwrap(), 3);
        assert_eq!(pool.disposition, PoolDisposition::Swept);
        assert!(!pool.is_open());
    }

    #[test]
    fn test_refund_once() {
        let mut pool = armed(100);
        let mut mine = stake();
        let who = Pubkey::new_unique();
        let event = Pubkey::new_unique();
        assert!(mine.record(event, who, 2, 250).unwrap());
        assert!(!mine.record(event, who, 1, 250).unwrap());
        pool.contribute(who, "", 3, true, 1, 1_100).unwrap();

        assert_err(mine.take_refund(&pool), SettleError::NotRefundable);
        pool.resolve(false, 1_200).unwrap();
        assert_eq!(mine.take_refund(&pool).unwrap(), 3);
        assert_err(mine.take_refund(&pool), SettleError::AlreadyClaimed);
    }

    #[test]
    fn test_forfeiture_claim_once() {
        let params = crate::state::RiskParams::default();
        let mut collateral = CollateralRecord {
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
        collateral.lock(Pubkey::new_unique(), Pubkey::new_unique(), 100, 255).unwrap();

        let mut pool = armed(100);
        let mut mine = stake();
        let who = Pubkey::new_unique();
        mine.record(Pubkey::new_unique(), who, 4, 1).unwrap();
        pool.contribute(who, "", 4, true, 1, 1_100).unwrap();
        pool.contribute(Pubkey::new_unique(), "", 6, true, 1, 1_100).unwrap();

        assert_err(mine.take_forfeiture(&pool, &mut collateral), SettleError::NotForfeited);
        pool.resolve(true, 1_200).unwrap();
        collateral.forfeit(&params, 1_200).unwrap();
        assert_eq!(mine.take_forfeiture(&pool, &mut collateral).unwrap(), (4, 32));
        assert_err(mine.take_forfeiture(&pool, &mut collateral), SettleError::AlreadyClaimed);
    }
}
