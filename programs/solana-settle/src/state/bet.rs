use anchor_lang::prelude::*;
use crate::constants::MAX_OUTCOMES;

/// A user's stakes on one event.
///
/// Seeds: ["bet", event, user]
#[account]
#[derive(InitSpace, Default)]
pub struct BetRecord {
    pub event: Pubkey,
    pub user: Pubkey,
    /// Amount per outcome index
    #[max_len(MAX_OUTCOMES)]
    pub stakes: Vec<u64>,
    pub total: u64,
    /// Set on the first bet; gates dispute eligibility
    pub participated: bool,
    /// Flips once, on payout or when the last stake is withdrawn
    pub claimed: bool,
    pub payout: u64,
    pub last_bet_timestamp: i64,
    pub bump: u8,
}

impl BetRecord {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub fn ensure_initialized(&mut self, event: Pubkey, user: Pubkey, outcome_count: usize, bump: u8) {
        if self.stakes.len() == outcome_count {
            return;
        }
        self.event = event;
        self.user = user;
        self.stakes = vec![0; outcome_count];
        self.total = 0;
        self.participated = false;
        self.claimed = false;
        self.payout = 0;
        self.bump = bump;
    }

    pub fn stake_on(&self, outcome: u8) -> u64 {
        self.stakes.get(outcome as usize).copied().unwrap_or(0)
    }
}
