use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::SettleError;
use crate::state::{BetRecord, DisputePool, DisputeStake, RiskParams};
use crate::utils::{bps_of, mul_div};

/// One prediction event: stakes, lifecycle and the embedded dispute pool.
///
/// Seeds: ["event", event_id.to_le_bytes()]. Stakes are held in the
/// ["stake_vault", event] token account, owned by this PDA.
#[account]
#[derive(InitSpace, Default)]
pub struct EventLedger {
    pub event_id: u64,
    pub creator: Pubkey,
    #[max_len(MAX_OUTCOMES, MAX_OUTCOME_LABEL_LEN)]
    pub outcomes: Vec<String>,
    /// Total staked per outcome; sums to `total_staked`
    #[max_len(MAX_OUTCOMES)]
    pub outcome_stakes: Vec<u64>,
    pub total_staked: u64,
    /// Maximum `total_staked`, derived from collateral and trust
    pub ceiling: u64,
    pub created_at: i64,
    /// Betting stops here
    pub open_time: i64,
    /// Outcome may be submitted from here
    pub close_time: i64,
    pub status: EventStatus,
    pub winning_outcome: Option<u8>,
    pub resolved_at: Option<i64>,
    pub dispute: DisputePool,
    pub total_paid_out: u64,
    pub total_refunded: u64,
    pub fees_paid: u64,
    pub fees_settled: bool,
    pub bettors: u32,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum EventStatus {
    #[default]
    Open,
    Resolved,
    Closed,
    Cancelled,
}

/// Fee routing computed at settlement.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FeeSplit {
    pub protocol: u64,
    pub creator: u64,
}

pub fn validate_new_event(
    outcomes: &[String],
    open_time: i64,
    close_time: i64,
    now: i64,
    params: &RiskParams,
) -> Result<()> {
    require!(
        (MIN_OUTCOMES..=MAX_OUTCOMES).contains(&outcomes.len()),
        SettleError::InvalidOutcomeCount
    );
    for label in outcomes {
        require!(
            !label.is_empty() && label.len() <= MAX_OUTCOME_LABEL_LEN,
            SettleError::InvalidOutcomeLabel
        );
    }
    let earliest_open = now.checked_add(params.min_lead_time).ok_or(SettleError::MathOverflow)?;
    require!(open_time >= earliest_open, SettleError::OpenTimeTooSoon);
    require!(close_time > open_time, SettleError::InvalidTimestamps);
    Ok(())
}

impl EventLedger {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        event_id: u64,
        creator: Pubkey,
        outcomes: Vec<String>,
        open_time: i64,
        close_time: i64,
        now: i64,
        ceiling: u64,
        params: &RiskParams,
        bump: u8,
    ) -> Result<()> {
        validate_new_event(&outcomes, open_time, close_time, now, params)?;
        self.event_id = event_id;
        self.creator = creator;
        self.outcome_stakes = vec![0; outcomes.len()];
        self.outcomes = outcomes;
        self.total_staked = 0;
        self.ceiling = ceiling;
        self.created_at = now;
        self.open_time = open_time;
        self.close_time = close_time;
        self.status = EventStatus::Open;
        self.winning_outcome = None;
        self.resolved_at = None;
        self.dispute = DisputePool::default();
        self.total_paid_out = 0;
        self.total_refunded = 0;
        self.fees_paid = 0;
        self.fees_settled = false;
        self.bettors = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn outcome_count(&self) -> usize {
        self.outcomes.len()
    }

    fn check_outcome(&self, outcome: u8) -> Result<usize> {
        let index = outcome as usize;
        require!(index < self.outcome_count(), SettleError::InvalidOutcome);
        Ok(index)
    }

    /// Ceiling after a collateral top-up. Never lower than the current one,
    /// even if the creator's trust has dropped since creation.
    pub fn raise_ceiling(&mut self, candidate: u64) -> Result<u64> {
        require!(self.status == EventStatus::Open, SettleError::EventNotOpen);
        self.ceiling = candidate.max(self.ceiling);
        Ok(self.ceiling)
    }

    pub fn user_cap(&self, params: &RiskParams) -> Result<u64> {
        bps_of(self.ceiling, params.user_cap_bps)
    }

    pub fn place_bet(
        &mut self,
        bet: &mut BetRecord,
        outcome: u8,
        amount: u64,
        now: i64,
        params: &RiskParams,
    ) -> Result<()> {
        require!(self.status == EventStatus::Open, SettleError::EventNotOpen);
        require!(now < self.open_time, SettleError::BettingClosed);
        require!(amount > 0, SettleError::ZeroAmount);
        let index = self.check_outcome(outcome)?;

        let new_total = self.total_staked.checked_add(amount).ok_or(SettleError::MathOverflow)?;
        require!(new_total <= self.ceiling, SettleError::CeilingExceeded);
        let new_user_total = bet.total.checked_add(amount).ok_or(SettleError::MathOverflow)?;
        require!(new_user_total <= self.user_cap(params)?, SettleError::UserCapExceeded);
        let new_outcome_total = self.outcome_stakes[index]
            .checked_add(amount)
            .ok_or(SettleError::MathOverflow)?;
        let new_bet_stake = bet.stakes[index].checked_add(amount).ok_or(SettleError::MathOverflow)?;

        if !bet.participated {
            self.bettors = self.bettors.checked_add(1).ok_or(SettleError::MathOverflow)?;
            bet.participated = true;
        }
        bet.stakes[index] = new_bet_stake;
        bet.total = new_user_total;
        bet.last_bet_timestamp = now;
        self.outcome_stakes[index] = new_outcome_total;
        self.total_staked = new_total;
        Ok(())
    }

    pub fn submit_outcome(
        &mut self,
        caller: Pubkey,
        outcome: u8,
        now: i64,
        params: &RiskParams,
    ) -> Result<()> {
        require_keys_eq!(caller, self.creator, SettleError::Unauthorized);
        require!(self.status == EventStatus::Open, SettleError::EventNotOpen);
        require!(now >= self.close_time, SettleError::EventStillRunning);
        self.check_outcome(outcome)?;

        self.dispute
            .arm(now, params.dispute_window, self.total_staked, params.dispute_target_bps)?;
        self.winning_outcome = Some(outcome);
        self.resolved_at = Some(now);
        self.status = EventStatus::Resolved;
        Ok(())
    }

    /// Returns true when this contribution met the dispute target.
    #[allow(clippy::too_many_arguments)]
    pub fn contribute_to_dispute(
        &mut self,
        event_key: Pubkey,
        bet: &BetRecord,
        stake: &mut DisputeStake,
        contributor: Pubkey,
        reason: &str,
        amount: u64,
        now: i64,
        params: &RiskParams,
        stake_bump: u8,
    ) -> Result<bool> {
        require!(self.status == EventStatus::Resolved, SettleError::EventNotResolved);
        require!(
            bet.participated && bet.user == contributor && bet.event == event_key,
            SettleError::NotABettor
        );
        let first = stake.amount == 0;
        let target_met = self.dispute.contribute(
            contributor,
            reason,
            amount,
            first,
            params.min_dispute_contribution,
            now,
        )?;
        stake.record(event_key, contributor, amount, stake_bump)?;
        Ok(target_met)
    }

    /// Adjudicator's final word. Returns true if the winning outcome changed.
    pub fn resolve_dispute(&mut self, final_outcome: u8, now: i64) -> Result<bool> {
        self.check_outcome(final_outcome)?;
        let changed = self.winning_outcome != Some(final_outcome);
        self.dispute.resolve(changed, now)?;
        if changed {
            self.winning_outcome = Some(final_outcome);
        }
        Ok(changed)
    }

    pub fn is_settled_status(&self) -> bool {
        matches!(self.status, EventStatus::Resolved | EventStatus::Closed)
    }

    pub fn winning_total(&self) -> u64 {
        self.winning_outcome
            .and_then(|w| self.outcome_stakes.get(w as usize).copied())
            .unwrap_or(0)
    }

    /// Resolved, but nobody backed the winner: every bettor withdraws instead.
    pub fn is_refund_mode(&self) -> bool {
        self.is_settled_status() && self.winning_total() == 0
    }

    /// Dispute window over and no dispute awaiting adjudication.
    pub fn ensure_settlement_open(&self, now: i64) -> Result<()> {
        require!(!self.dispute.is_open(), SettleError::DisputeOpen);
        require!(self.dispute.window_closed(now), SettleError::DisputeWindowOpen);
        Ok(())
    }

    pub fn loot(&self) -> Result<u64> {
        self.total_staked
            .checked_sub(self.winning_total())
            .ok_or_else(|| error!(SettleError::MathOverflow))
    }

    pub fn fee(&self, params: &RiskParams) -> Result<u64> {
        bps_of(self.loot()?, params.fee_bps)
    }

    /// stake + stake * (loot - fee) / winning_total
    pub fn compute_payout(&self, bet: &BetRecord, params: &RiskParams) -> Result<u64> {
        let winner = self.winning_outcome.ok_or(SettleError::EventNotResolved)?;
        let winning_total = self.winning_total();
        require!(winning_total > 0, SettleError::NoWinningStake);
        let stake = bet.stake_on(winner);
        require!(stake > 0, SettleError::NoPosition);

        let loot = self.loot()?;
        let net_loot = loot.checked_sub(self.fee(params)?).ok_or(SettleError::MathOverflow)?;
        let winnings = mul_div(stake, net_loot, winning_total)?;
        Ok(stake.checked_add(winnings).ok_or(SettleError::MathOverflow)?)
    }

    /// What is still owed out of the stake vault.
    pub fn remaining_balance(&self) -> u64 {
        self.total_staked
            .saturating_sub(self.total_paid_out)
            .saturating_sub(self.fees_paid)
    }

    /// Marks the bet claimed and returns the amount to transfer.
    pub fn claim_payout(&mut self, bet: &mut BetRecord, now: i64, params: &RiskParams) -> Result<u64> {
        require!(self.is_settled_status(), SettleError::EventNotResolved);
        self.ensure_settlement_open(now)?;
        require!(!bet.claimed, SettleError::AlreadyClaimed);

        // Truncation leaves dust, so the last claimant is capped at what is left.
        let payout = self.compute_payout(bet, params)?.min(self.remaining_balance());
        bet.claimed = true;
        bet.payout = payout;
        self.total_paid_out = self
            .total_paid_out
            .checked_add(payout)
            .ok_or(SettleError::MathOverflow)?;
        Ok(payout)
    }

    /// Returns the caller's exact stake on `outcome` on a cancelled event or
    /// a resolved event nobody backed the winner of.
    pub fn withdraw_bet(&mut self, bet: &mut BetRecord, outcome: u8, now: i64) -> Result<u64> {
        match self.status {
            EventStatus::Cancelled => {}
            EventStatus::Resolved | EventStatus::Closed => {
                self.ensure_settlement_open(now)?;
                require!(self.is_refund_mode(), SettleError::WithdrawNotAllowed);
            }
            EventStatus::Open => return err!(SettleError::WithdrawNotAllowed),
        }
        let index = self.check_outcome(outcome)?;
        let amount = bet.stakes[index];
        require!(amount > 0, SettleError::NothingToWithdraw);

        let outcome_total = self.outcome_stakes[index]
            .checked_sub(amount)
            .ok_or(SettleError::MathOverflow)?;
        let total = self.total_staked.checked_sub(amount).ok_or(SettleError::MathOverflow)?;
        let user_total = bet.total.checked_sub(amount).ok_or(SettleError::MathOverflow)?;

        bet.stakes[index] = 0;
        bet.total = user_total;
        if user_total == 0 {
            bet.claimed = true;
        }
        self.outcome_stakes[index] = outcome_total;
        self.total_staked = total;
        self.total_refunded = self
            .total_refunded
            .checked_add(amount)
            .ok_or(SettleError::MathOverflow)?;
        Ok(amount)
    }

    pub fn cancel(&mut self, now: i64, params: &RiskParams) -> Result<()> {
        require!(self.status == EventStatus::Open, SettleError::EventNotOpen);
        let cutoff = self
            .open_time
            .checked_sub(params.cancel_buffer)
            .ok_or(SettleError::MathOverflow)?;
        require!(now < cutoff, SettleError::CancelWindowPassed);
        self.status = EventStatus::Cancelled;
        Ok(())
    }

    /// Only once the dispute window has run out and nothing is left to adjudicate.
    pub fn mark_closed(&mut self, now: i64) -> Result<()> {
        require!(self.status == EventStatus::Resolved, SettleError::EventNotResolved);
        require!(now >= self.close_time, SettleError::EventStillRunning);
        self.ensure_settlement_open(now)?;
        self.status = EventStatus::Closed;
        Ok(())
    }

    /// Fixes the fee once. Nothing is charged in refund mode; the creator's
    /// share is withheld when the creator's outcome was overturned.
    pub fn settle_fees(&mut self, creator_eligible: bool, params: &RiskParams) -> Result<FeeSplit> {
        require!(self.is_settled_status(), SettleError::EventNotResolved);
        if self.fees_settled {
            return Ok(FeeSplit::default());
        }
        self.fees_settled = true;
        if self.is_refund_mode() {
            return Ok(FeeSplit::default());
        }
        let fee = self.fee(params)?.min(self.remaining_balance());
        let creator = if creator_eligible {
            bps_of(fee, params.creator_fee_share_bps)?
        } else {
            0
        };
        let protocol = fee.checked_sub(creator).ok_or(SettleError::MathOverflow)?;
        self.fees_paid = fee;
        Ok(FeeSplit { protocol, creator })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DisputeState, PoolDisposition};
    use crate::utils::testing::assert_err;

    const NOW: i64 = 1_700_000_000;
    const HOUR: i64 = 3_600;
    const OPEN: i64 = NOW + 3 * HOUR;
    const CLOSE: i64 = NOW + 5 * HOUR;

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("outcome-{i}")).collect()
    }

    fn new_event(ceiling: u64) -> (EventLedger, Pubkey, RiskParams) {
        let params = RiskParams::default();
        let creator = Pubkey::new_unique();
        let mut event = EventLedger::default();
        event
            .initialize(0, creator, labels(2), OPEN, CLOSE, NOW, ceiling, &params, 255)
            .unwrap();
        (event, creator, params)
    }

    fn bettor(event_key: Pubkey, count: usize) -> BetRecord {
        let mut bet = BetRecord::default();
        bet.ensure_initialized(event_key, Pubkey::new_unique(), count, 250);
        bet
    }

    fn sum_stakes(event: &EventLedger) -> u64 {
        event.outcome_stakes.iter().sum()
    }

    #[test]
    fn test_create_validation() {
        let params = RiskParams::default();
        let creator = Pubkey::new_unique();
        let mut event = EventLedger::default();
        assert_err(
            event.initialize(0, creator, labels(1), OPEN, CLOSE, NOW, 100, &params, 1),
            SettleError::InvalidOutcomeCount,
        );
        assert_err(
            event.initialize(0, creator, labels(13), OPEN, CLOSE, NOW, 100, &params, 1),
            SettleError::InvalidOutcomeCount,
        );
        assert_err(
            event.initialize(0, creator, vec!["yes".into(), String::new()], OPEN, CLOSE, NOW, 100, &params, 1),
            SettleError::InvalidOutcomeLabel,
        );
        assert_err(
            event.initialize(0, creator, labels(2), NOW + 2 * HOUR - 1, CLOSE, NOW, 100, &params, 1),
            SettleError::OpenTimeTooSoon,
        );
        assert_err(
            event.initialize(0, creator, labels(2), OPEN, OPEN, NOW, 100, &params, 1),
            SettleError::InvalidTimestamps,
        );
        assert!(event
            .initialize(0, creator, labels(12), NOW + 2 * HOUR, CLOSE, NOW, 100, &params, 1)
            .is_ok());
        assert_eq!(event.outcome_stakes, vec![0; 12]);
    }

    #[test]
    fn test_bets_conserve_totals() {
        let (mut event, _, params) = new_event(10_000);
        let key = Pubkey::new_unique();
        let mut alice = bettor(key, 2);
        let mut bob = bettor(key, 2);
        event.place_bet(&mut alice, 0, 100, NOW, &params).unwrap();
        event.place_bet(&mut bob, 1, 250, NOW, &params).unwrap();
        event.place_bet(&mut alice, 1, 40, NOW + 1, &params).unwrap();
        assert_eq!(sum_stakes(&event), event.total_staked);
        assert_eq!(event.total_staked, 390);
        assert_eq!(alice.total, 140);
        assert_eq!(alice.stakes, vec![100, 40]);
        assert_eq!(event.bettors, 2);
        assert!(alice.participated);
    }

    #[test]
    fn test_bet_guards_leave_state_untouched() {
        let (mut event, _, params) = new_event(1_000);
        let mut bet = bettor(Pubkey::new_unique(), 2);
        assert_err(event.place_bet(&mut bet, 0, 0, NOW, &params), SettleError::ZeroAmount);
        assert_err(event.place_bet(&mut bet, 2, 10, NOW, &params), SettleError::InvalidOutcome);
        assert_err(event.place_bet(&mut bet, 0, 10, OPEN, &params), SettleError::BettingClosed);
        // 10% of 1000
        assert_err(event.place_bet(&mut bet, 0, 101, NOW, &params), SettleError::UserCapExceeded);
        assert_eq!(event.total_staked, 0);
        assert_eq!(bet.total, 0);
        assert!(!bet.participated);
    }

    #[test]
    fn test_ceiling_respected() {
        // Collateral 100, trust 0, multiplier 2 -> ceiling 200
        let params = RiskParams::default();
        let ceiling = crate::state::compute_bet_limit(&params, 0, 100).unwrap();
        assert_eq!(ceiling, 200);
        let (mut event, _, params) = new_event(ceiling);
        let key = Pubkey::new_unique();
        let mut placed = 0;
        for _ in 0..10 {
            let mut bet = bettor(key, 2);
            event.place_bet(&mut bet, 0, 20, NOW, &params).unwrap();
            placed += 20;
        }
        assert_eq!(placed, ceiling);
        let mut late = bettor(key, 2);
        assert_err(event.place_bet(&mut late, 1, 1, NOW, &params), SettleError::CeilingExceeded);
        assert!(event.total_staked <= event.ceiling);
    }

    #[test]
    fn test_top_up_never_lowers_ceiling() {
        let (mut event, _, params) = new_event(200);
        let mut bet = bettor(Pubkey::new_unique(), 2);
        event.place_bet(&mut bet, 0, 20, NOW, &params).unwrap();
        // A penalized creator re-derives a smaller ceiling
        assert_eq!(event.raise_ceiling(19).unwrap(), 200);
        assert_eq!(event.ceiling, 200);
        assert_eq!(event.raise_ceiling(400).unwrap(), 400);
        event.place_bet(&mut bet, 0, 20, NOW, &params).unwrap();
        assert_eq!(bet.total, 40);

        event.cancel(NOW, &params).unwrap();
        assert_err(event.raise_ceiling(800), SettleError::EventNotOpen);
        assert_eq!(event.ceiling, 400);
    }

    #[test]
    fn test_submit_outcome_guards() {
        let (mut event, creator, params) = new_event(1_000);
        assert_err(
            event.submit_outcome(Pubkey::new_unique(), 0, CLOSE, &params),
            SettleError::Unauthorized,
        );
        assert_err(event.submit_outcome(creator, 0, CLOSE - 1, &params), SettleError::EventStillRunning);
        assert_err(event.submit_outcome(creator, 5, CLOSE, &params), SettleError::InvalidOutcome);
        event.submit_outcome(creator, 1, CLOSE, &params).unwrap();
        assert_eq!(event.status, EventStatus::Resolved);
        assert_eq!(event.dispute.deadline, CLOSE + HOUR);
        assert_err(event.submit_outcome(creator, 0, CLOSE, &params), SettleError::EventNotOpen);
    }

    #[test]
    fn test_winner_payout_after_fee() {
        let (mut event, creator, params) = new_event(1_000);
        let key = Pubkey::new_unique();
        let mut user1 = bettor(key, 2);
        let mut user2 = bettor(key, 2);
        event.place_bet(&mut user1, 0, 50, NOW, &params).unwrap();
        event.place_bet(&mut user2, 1, 30, NOW, &params).unwrap();
        event.submit_outcome(creator, 0, CLOSE, &params).unwrap();

        let after_window = CLOSE + HOUR;
        assert_err(event.claim_payout(&mut user1, after_window - 1, &params), SettleError::DisputeWindowOpen);
        assert_eq!(event.claim_payout(&mut user1, after_window, &params).unwrap(), 77);
        assert_err(event.claim_payout(&mut user1, after_window, &params), SettleError::AlreadyClaimed);
        assert_eq!(event.total_paid_out, 77);
        assert_err(event.claim_payout(&mut user2, after_window, &params), SettleError::NoPosition);
        assert!(!user2.claimed);

        let fees = event.settle_fees(true, &params).unwrap();
        assert_eq!(fees.protocol + fees.creator, 3);
        assert_eq!(event.remaining_balance(), 0);
    }

    #[test]
    fn test_last_claimant_capped_at_remaining() {
        let (mut event, creator, params) = new_event(10_000);
        let key = Pubkey::new_unique();
        let mut winners: Vec<BetRecord> = (0..3).map(|_| bettor(key, 2)).collect();
        for w in winners.iter_mut() {
            event.place_bet(w, 0, 1, NOW, &params).unwrap();
        }
        let mut loser = bettor(key, 2);
        event.place_bet(&mut loser, 1, 100, NOW, &params).unwrap();
        event.submit_outcome(creator, 0, CLOSE, &params).unwrap();

        let fees = event.settle_fees(true, &params).unwrap();
        assert_eq!(fees.protocol + fees.creator, 10);
        let paid: u64 = winners
            .iter_mut()
            .map(|w| event.claim_payout(w, CLOSE + HOUR, &params).unwrap())
            .sum();
        // each gets 1 + 90/3 = 31
        assert_eq!(paid, 93);
        assert!(paid + event.fees_paid <= event.total_staked);
    }

    #[test]
    fn test_dispute_gating_and_outcome_change() {
        let (mut event, creator, params) = new_event(1_000);
        let key = Pubkey::new_unique();
        let mut user1 = bettor(key, 2);
        let mut user2 = bettor(key, 2);
        event.place_bet(&mut user1, 0, 50, NOW, &params).unwrap();
        event.place_bet(&mut user2, 1, 50, NOW, &params).unwrap();
        event.submit_outcome(creator, 0, CLOSE, &params).unwrap();
        assert_eq!(event.dispute.target, 10);

        let mut stake = DisputeStake {
            event: Pubkey::default(),
            contributor: Pubkey::default(),
            amount: 0,
            settled: false,
            bump: 0,
        };
        let outsider = bettor(key, 2);
        assert_err(
            event.contribute_to_dispute(key, &outsider, &mut stake, outsider.user, "", 5, CLOSE + 1, &params, 1),
            SettleError::NotABettor,
        );
        let user2_key = user2.user;
        event
            .contribute_to_dispute(key, &user2, &mut stake, user2_key, "B won", 4, CLOSE + 1, &params, 1)
            .unwrap();
        assert!(event
            .contribute_to_dispute(key, &user2, &mut stake, user2_key, "", 6, CLOSE + 2, &params, 1)
            .unwrap());
        assert_eq!(stake.amount, 10);
        assert_eq!(event.dispute.state, DisputeState::Open);

        // Window closed early, but the open dispute still blocks payouts
        assert_err(event.claim_payout(&mut user1, CLOSE + 2 * HOUR, &params), SettleError::DisputeOpen);

        assert!(event.resolve_dispute(1, CLOSE + 3).unwrap());
        assert_eq!(event.winning_outcome, Some(1));
        assert_eq!(event.dispute.disposition, PoolDisposition::ReturnedWithForfeiture);
        assert_err(event.resolve_dispute(1, CLOSE + 4), SettleError::NoOpenDispute);

        assert_err(event.claim_payout(&mut user1, CLOSE + 2 * HOUR, &params), SettleError::NoPosition);
        // 50 + 50 * (50 - 5) / 50
        assert_eq!(event.claim_payout(&mut user2, CLOSE + 2 * HOUR, &params).unwrap(), 95);
    }

    #[test]
    fn test_resolve_dispute_unchanged() {
        let (mut event, creator, params) = new_event(1_000);
        let key = Pubkey::new_unique();
        let mut user1 = bettor(key, 2);
        event.place_bet(&mut user1, 0, 50, NOW, &params).unwrap();
        event.submit_outcome(creator, 0, CLOSE, &params).unwrap();
        let mut stake = DisputeStake {
            event: Pubkey::default(),
            contributor: Pubkey::default(),
            amount: 0,
            settled: false,
            bump: 0,
        };
        let user1_key = user1.user;
        event
            .contribute_to_dispute(key, &user1, &mut stake, user1_key, "", 5, CLOSE + 1, &params, 1)
            .unwrap();
        assert_err(event.resolve_dispute(9, CLOSE + 2), SettleError::InvalidOutcome);
        assert!(!event.resolve_dispute(0, CLOSE + 2).unwrap());
        assert_eq!(event.winning_outcome, Some(0));
        assert_eq!(event.dispute.disposition, PoolDisposition::SurrenderedToCreator);
    }

    #[test]
    fn test_cancel_refunds_exact_stakes() {
        let (mut event, _, params) = new_event(10_000);
        let key = Pubkey::new_unique();
        let mut bets: Vec<BetRecord> = (0..4).map(|_| bettor(key, 2)).collect();
        let amounts = [100u64, 7, 333, 1];
        for (i, (bet, amount)) in bets.iter_mut().zip(amounts).enumerate() {
            event.place_bet(bet, (i % 2) as u8, amount, NOW, &params).unwrap();
        }
        assert_err(event.withdraw_bet(&mut bets[0], 0, NOW), SettleError::WithdrawNotAllowed);

        assert_err(event.cancel(OPEN - HOUR, &params), SettleError::CancelWindowPassed);
        event.cancel(OPEN - HOUR - 1, &params).unwrap();
        for (i, (bet, amount)) in bets.iter_mut().zip(amounts).enumerate() {
            assert_eq!(event.withdraw_bet(bet, (i % 2) as u8, NOW).unwrap(), amount);
            assert!(bet.claimed);
            assert_err(event.withdraw_bet(bet, (i % 2) as u8, NOW), SettleError::NothingToWithdraw);
            assert_eq!(sum_stakes(&event), event.total_staked);
        }
        assert_eq!(event.total_staked, 0);
        assert_eq!(event.total_refunded, 441);
    }

    #[test]
    fn test_refund_mode_when_winner_unbacked() {
        let (mut event, creator, params) = new_event(1_000);
        let mut bet = bettor(Pubkey::new_unique(), 2);
        event.place_bet(&mut bet, 1, 60, NOW, &params).unwrap();
        event.submit_outcome(creator, 0, CLOSE, &params).unwrap();
        assert!(event.is_refund_mode());

        assert_err(event.withdraw_bet(&mut bet, 1, CLOSE + 1), SettleError::DisputeWindowOpen);
        assert_err(event.claim_payout(&mut bet, CLOSE + HOUR, &params), SettleError::NoWinningStake);
        assert_eq!(event.withdraw_bet(&mut bet, 1, CLOSE + HOUR).unwrap(), 60);
        assert_eq!(event.settle_fees(true, &params).unwrap(), FeeSplit::default());
        assert_eq!(event.fees_paid, 0);
    }

    #[test]
    fn test_withdraw_not_allowed_with_backed_winner() {
        let (mut event, creator, params) = new_event(1_000);
        let key = Pubkey::new_unique();
        let mut winner = bettor(key, 2);
        let mut loser = bettor(key, 2);
        event.place_bet(&mut winner, 0, 10, NOW, &params).unwrap();
        event.place_bet(&mut loser, 1, 10, NOW, &params).unwrap();
        event.submit_outcome(creator, 0, CLOSE, &params).unwrap();
        assert_err(event.withdraw_bet(&mut loser, 1, CLOSE + HOUR), SettleError::WithdrawNotAllowed);
    }

    #[test]
    fn test_fees_settle_once_and_respect_eligibility() {
        let (mut event, creator, params) = new_event(10_000);
        let key = Pubkey::new_unique();
        let mut winner = bettor(key, 2);
        let mut loser = bettor(key, 2);
        event.place_bet(&mut winner, 0, 100, NOW, &params).unwrap();
        event.place_bet(&mut loser, 1, 400, NOW, &params).unwrap();
        event.submit_outcome(creator, 0, CLOSE, &params).unwrap();

        let split = event.settle_fees(false, &params).unwrap();
        assert_eq!(split, FeeSplit { protocol: 40, creator: 0 });
        assert_eq!(event.settle_fees(true, &params).unwrap(), FeeSplit::default());
        assert_eq!(event.fees_paid, 40);
    }

    #[test]
    fn test_close_keeps_claims_open() {
        let (mut event, creator, params) = new_event(1_000);
        let mut bet = bettor(Pubkey::new_unique(), 2);
        event.place_bet(&mut bet, 0, 10, NOW, &params).unwrap();
        assert_err(event.mark_closed(CLOSE), SettleError::EventNotResolved);
        event.submit_outcome(creator, 0, CLOSE, &params).unwrap();
        event.mark_closed(CLOSE + HOUR).unwrap();
        assert_eq!(event.status, EventStatus::Closed);
        assert_err(event.cancel(NOW, &params), SettleError::EventNotOpen);
        assert_eq!(event.claim_payout(&mut bet, CLOSE + HOUR, &params).unwrap(), 10);
    }

    #[test]
    fn test_close_waits_for_dispute_window() {
        let (mut event, creator, params) = new_event(1_000);
        let key = Pubkey::new_unique();
        let mut bet = bettor(key, 2);
        event.place_bet(&mut bet, 1, 10, NOW, &params).unwrap();
        event.submit_outcome(creator, 0, CLOSE, &params).unwrap();
        assert_err(event.mark_closed(CLOSE + 1), SettleError::DisputeWindowOpen);
        assert_eq!(event.status, EventStatus::Resolved);

        // Bettors can still dispute inside the window
        let mut stake = DisputeStake {
            event: Pubkey::default(),
            contributor: Pubkey::default(),
            amount: 0,
            settled: false,
            bump: 0,
        };
        event
            .contribute_to_dispute(key, &bet, &mut stake, bet.user, "", 5, CLOSE + 2, &params, 1)
            .unwrap();
        assert_err(event.mark_closed(CLOSE + HOUR), SettleError::DisputeOpen);
        event.resolve_dispute(0, CLOSE + HOUR).unwrap();
        event.mark_closed(CLOSE + HOUR).unwrap();
        assert_eq!(event.status, EventStatus::Closed);
    }
}
