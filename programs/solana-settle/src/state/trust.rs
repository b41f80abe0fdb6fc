use anchor_lang::prelude::*;
use crate::constants::BPS_DENOMINATOR;
use crate::errors::SettleError;
use crate::state::RiskParams;

/// Per-creator reputation.
///
/// Seeds: ["trust", creator]. Created on the creator's first event and
/// only mutated by collateral release and dispute outcomes.
#[account]
#[derive(InitSpace)]
pub struct TrustRecord {
    pub creator: Pubkey,
    pub score: i64,
    pub initialized: bool,
    pub events_created: u64,
    pub clean_releases: u64,
    pub penalties: u64,
    pub bump: u8,
}

impl TrustRecord {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub fn ensure_initialized(&mut self, creator: Pubkey, params: &RiskParams, bump: u8) {
        if self.initialized {
            return;
        }
        self.creator = creator;
        self.score = params.trust_initial;
        self.initialized = true;
        self.events_created = 0;
        self.clean_releases = 0;
        self.penalties = 0;
        self.bump = bump;
    }

    pub fn meets_threshold(&self, params: &RiskParams) -> bool {
        self.score > params.trust_threshold
    }

    pub fn record_event(&mut self) -> Result<()> {
        self.events_created = self.events_created.checked_add(1).ok_or(SettleError::MathOverflow)?;
        Ok(())
    }

    /// Clean collateral release.
    pub fn reward(&mut self, params: &RiskParams) -> Result<i64> {
        self.score = clamp_score(self.score as i128 + params.trust_reward as i128, params);
        self.clean_releases = self.clean_releases.checked_add(1).ok_or(SettleError::MathOverflow)?;
        Ok(self.score)
    }

    /// Dispute overturned the creator's reported outcome.
    pub fn penalize(&mut self, params: &RiskParams) -> Result<i64> {
        let penalty = penalty_for(self.score, params);
        self.score = clamp_score(self.score as i128 - penalty as i128, params);
        self.penalties = self.penalties.checked_add(1).ok_or(SettleError::MathOverflow)?;
        Ok(self.score)
    }
}

/// max(fixed minimum, score * penalty_bps). A negative score always takes the minimum.
pub fn penalty_for(score: i64, params: &RiskParams) -> i64 {
    let proportional = score as i128 * params.trust_penalty_bps as i128 / BPS_DENOMINATOR as i128;
    // |proportional| <= |score|, so this fits back into i64
    (proportional as i64).max(params.trust_min_penalty)
}

fn clamp_score(value: i128, params: &RiskParams) -> i64 {
    value.clamp(params.trust_min as i128, params.trust_max as i128) as i64
}
