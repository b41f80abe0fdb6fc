/// Seed for the singleton protocol configuration PDA
pub const CONFIG_SEED: &[u8] = b"protocol_config";

/// Seed for an event ledger PDA: ["event", event_id.to_le_bytes()]
pub const EVENT_SEED: &[u8] = b"event";

/// Seed for a bettor's record: ["bet", event, user]
pub const BET_SEED: &[u8] = b"bet";

/// Seed for a creator's trust record: ["trust", creator]
pub const TRUST_SEED: &[u8] = b"trust";

pub const COLLATERAL_SEED: &[u8] = b"collateral";
pub const COLLATERAL_VAULT_SEED: &[u8] = b"collateral_vault";
pub const STAKE_VAULT_SEED: &[u8] = b"stake_vault";
pub const DISPUTE_VAULT_SEED: &[u8] = b"dispute_vault";
pub const DISPUTE_STAKE_SEED: &[u8] = b"dispute_stake";

pub const BPS_DENOMINATOR: u64 = 10_000;

pub const MIN_OUTCOMES: usize = 2;
pub const MAX_OUTCOMES: usize = 12;
pub const MAX_OUTCOME_LABEL_LEN: usize = 32;
pub const MAX_REASON_LEN: usize = 200;
pub const MAX_ADJUDICATORS: usize = 4;

/// Default minimum lead time between creation and open time (2 hours)
pub const DEFAULT_MIN_LEAD_TIME: i64 = 2 * 60 * 60;

/// Default dispute window after outcome submission (1 hour)
pub const DEFAULT_DISPUTE_WINDOW: i64 = 60 * 60;

/// Default buffer before open time after which cancellation is refused (1 hour)
pub const DEFAULT_CANCEL_BUFFER: i64 = 60 * 60;

/// Default long-stop after which an unadjudicated dispute pool can be swept (7 days)
pub const DEFAULT_ABANDON_TIMEOUT: i64 = 7 * 24 * 60 * 60;

pub const DEFAULT_FEE_BPS: u16 = 1_000; // 10% of loot
pub const DEFAULT_CREATOR_FEE_SHARE_BPS: u16 = 5_000; // half the fee goes to the creator
pub const DEFAULT_USER_CAP_BPS: u16 = 1_000; // 10% of ceiling
pub const DEFAULT_DISPUTE_TARGET_BPS: u16 = 1_000; // 10% of total staked

/// Default 80/10/10 split, burn takes the remainder
pub const DEFAULT_SPLIT_MAJOR_BPS: u16 = 8_000;
pub const DEFAULT_SPLIT_MINOR_BPS: u16 = 1_000;

pub const DEFAULT_BET_MULTIPLIER: u64 = 2;
pub const DEFAULT_TRUST_STEP_BPS: u16 = 100; // 1% of ceiling per trust point
pub const DEFAULT_TRUST_FLOOR_BPS: u16 = 2_500;

pub const DEFAULT_TRUST_INITIAL: i64 = 10;
pub const DEFAULT_TRUST_MIN: i64 = -100;
pub const DEFAULT_TRUST_MAX: i64 = 100;
pub const DEFAULT_TRUST_THRESHOLD: i64 = -50;
pub const DEFAULT_TRUST_REWARD: i64 = 1;
pub const DEFAULT_TRUST_MIN_PENALTY: i64 = 10;
pub const DEFAULT_TRUST_PENALTY_BPS: u16 = 2_500; // 25% of current score

pub const DEFAULT_FIXED_COLLATERAL: u64 = 100 * 1_000_000; // 100 tokens, 6 decimals
pub const DEFAULT_MIN_COLLATERAL: u64 = 10 * 1_000_000;
pub const DEFAULT_MAX_COLLATERAL: u64 = 1_000 * 1_000_000;

pub const DEFAULT_MIN_DISPUTE_CONTRIBUTION: u64 = 1;
