use anchor_lang::prelude::*;
use crate::state::{EventStatus, PoolDisposition};

#[event]
pub struct ProtocolInitialized {
    pub admin: Pubkey,
    pub treasury: Pubkey,
    pub fee_bps: u16,
    pub adjudicators: u8,
}

#[event]
pub struct EventCreated {
    pub event_id: u64,
    pub creator: Pubkey,
    pub outcomes: Vec<String>,
    pub open_time: i64,
    pub close_time: i64,
    pub collateral: u64,
    pub ceiling: u64,
    pub trust_score: i64,
}

#[event]
pub struct CollateralToppedUp {
    pub event_id: u64,
    pub amount: u64,
    pub new_balance: u64,
    pub new_ceiling: u64,
}

#[event]
pub struct BetPlaced {
    pub event_id: u64,
    pub user: Pubkey,
    pub outcome: u8,
    pub amount: u64,
    pub outcome_total: u64,
    pub total_staked: u64,
    pub timestamp: i64,
}

#[event]
pub struct OutcomeSubmitted {
    pub event_id: u64,
    pub outcome: u8,
    pub total_staked: u64,
    pub dispute_deadline: i64,
    pub dispute_target: u64,
}

#[event]
pub struct DisputeContributed {
    pub event_id: u64,
    pub contributor: Pubkey,
    pub amount: u64,
    pub pool_total: u64,
    pub target_met: bool,
}

#[event]
pub struct DisputeResolved {
    pub event_id: u64,
    pub adjudicator: Pubkey,
    pub outcome_changed: bool,
    pub winning_outcome: u8,
    pub disposition: PoolDisposition,
    pub trust_score: i64,
}

#[event]
pub struct CollateralForfeited {
    pub event_id: u64,
    pub contributors_share: u64,
    pub protocol_share: u64,
    pub burned: u64,
}

#[event]
pub struct DisputePoolSurrendered {
    pub event_id: u64,
    pub creator_share: u64,
    pub protocol_share: u64,
    pub burned: u64,
}

#[event]
pub struct DisputePoolSwept {
    pub event_id: u64,
    pub amount: u64,
}

#[event]
pub struct ForfeitedShareClaimed {
    pub event_id: u64,
    pub contributor: Pubkey,
    pub contribution: u64,
    pub share: u64,
}

#[event]
pub struct DisputeRefunded {
    pub event_id: u64,
    pub contributor: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PayoutClaimed {
    pub event_id: u64,
    pub user: Pubkey,
    pub amount: u64,
}

#[event]
pub struct BetWithdrawn {
    pub event_id: u64,
    pub user: Pubkey,
    pub outcome: u8,
    pub amount: u64,
    pub total_staked: u64,
}

#[event]
pub struct FeesDistributed {
    pub event_id: u64,
    pub protocol: u64,
    pub creator: u64,
}

#[event]
pub struct CollateralReleased {
    pub event_id: u64,
    pub creator: Pubkey,
    pub amount: u64,
    pub trust_score: i64,
}

/// Emitted once an event reaches a terminal status, for sequencing
/// collaborators that chain bets across events.
#[event]
pub struct OutcomeNotified {
    pub event_id: u64,
    pub status: EventStatus,
    pub winning_outcome: Option<u8>,
}
