use anchor_lang::prelude::*;
use crate::constants::*;
use crate::errors::SettleError;

/// Singleton protocol configuration.
///
/// Seeds: ["protocol_config"]
#[account]
#[derive(InitSpace)]
pub struct ProtocolConfig {
    /// Authority for cancel/close and abandoned-dispute sweeps
    pub admin: Pubkey,
    /// Token account receiving protocol fees and protocol shares
    pub treasury: Pubkey,
    pub collateral_mint: Pubkey,
    /// Identities allowed to call `resolve_dispute_externally`
    #[max_len(MAX_ADJUDICATORS)]
    pub adjudicators: Vec<Pubkey>,
    pub params: RiskParams,
    pub total_events: u64,
    pub bump: u8,
}

impl ProtocolConfig {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    pub fn is_adjudicator(&self, key: &Pubkey) -> bool {
        self.adjudicators.iter().any(|a| a == key)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum CollateralMode {
    /// Every creator posts `fixed_collateral`
    Fixed,
    /// `max_collateral * (trust_max - score) / trust_max`, clamped to [min, max]
    ReputationScaled,
}

/// Economic and timing parameters. Fixed at `init_protocol`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub struct RiskParams {
    pub min_lead_time: i64,
    pub dispute_window: i64,
    pub cancel_buffer: i64,
    pub abandon_timeout: i64,

    /// Protocol fee on loot
    pub fee_bps: u16,
    /// Share of the fee routed to the creator on a clean release
    pub creator_fee_share_bps: u16,
    /// Per-user cap as a share of the ceiling
    pub user_cap_bps: u16,
    /// Dispute target as a share of total staked at outcome submission
    pub dispute_target_bps: u16,
    pub min_dispute_contribution: u64,

    /// Forfeiture: contributors / protocol, burn takes the rest
    pub forfeit_contributors_bps: u16,
    pub forfeit_protocol_bps: u16,
    /// Surrendered dispute pool: creator / protocol, burn takes the rest
    pub pool_creator_bps: u16,
    pub pool_protocol_bps: u16,

    pub collateral_mode: CollateralMode,
    pub fixed_collateral: u64,
    pub min_collateral: u64,
    pub max_collateral: u64,

    pub bet_multiplier: u64,
    pub trust_step_bps: u16,
    pub trust_floor_bps: u16,

    pub trust_initial: i64,
    pub trust_min: i64,
    pub trust_max: i64,
    pub trust_threshold: i64,
    pub trust_reward: i64,
    pub trust_min_penalty: i64,
    pub trust_penalty_bps: u16,
}

impl Default for RiskParams {
    fn default() -> Self {
        Self {
            min_lead_time: DEFAULT_MIN_LEAD_TIME,
            dispute_window: DEFAULT_DISPUTE_WINDOW,
            cancel_buffer: DEFAULT_CANCEL_BUFFER,
            abandon_timeout: DEFAULT_ABANDON_TIMEOUT,
            fee_bps: DEFAULT_FEE_BPS,
            creator_fee_share_bps: DEFAULT_CREATOR_FEE_SHARE_BPS,
            user_cap_bps: DEFAULT_USER_CAP_BPS,
            dispute_target_bps: DEFAULT_DISPUTE_TARGET_BPS,
            min_dispute_contribution: DEFAULT_MIN_DISPUTE_CONTRIBUTION,
            forfeit_contributors_bps: DEFAULT_SPLIT_MAJOR_BPS,
            forfeit_protocol_bps: DEFAULT_SPLIT_MINOR_BPS,
            pool_creator_bps: DEFAULT_SPLIT_MAJOR_BPS,
            pool_protocol_bps: DEFAULT_SPLIT_MINOR_BPS,
            collateral_mode: CollateralMode::Fixed,
            fixed_collateral: DEFAULT_FIXED_COLLATERAL,
            min_collateral: DEFAULT_MIN_COLLATERAL,
            max_collateral: DEFAULT_MAX_COLLATERAL,
            bet_multiplier: DEFAULT_BET_MULTIPLIER,
            trust_step_bps: DEFAULT_TRUST_STEP_BPS,
            trust_floor_bps: DEFAULT_TRUST_FLOOR_BPS,
            trust_initial: DEFAULT_TRUST_INITIAL,
            trust_min: DEFAULT_TRUST_MIN,
            trust_max: DEFAULT_TRUST_MAX,
            trust_threshold: DEFAULT_TRUST_THRESHOLD,
            trust_reward: DEFAULT_TRUST_REWARD,
            trust_min_penalty: DEFAULT_TRUST_MIN_PENALTY,
            trust_penalty_bps: DEFAULT_TRUST_PENALTY_BPS,
        }
    }
}

impl RiskParams {
    pub fn validate(&self) -> Result<()> {
        let bps = BPS_DENOMINATOR;
        require!(self.min_lead_time >= 0, SettleError::InvalidParams);
        require!(self.dispute_window > 0, SettleError::InvalidParams);
        require!(self.cancel_buffer >= 0, SettleError::InvalidParams);
        require!(self.abandon_timeout > 0, SettleError::InvalidParams);

        require!(self.fee_bps as u64 <= bps, SettleError::InvalidParams);
        require!(self.creator_fee_share_bps as u64 <= bps, SettleError::InvalidParams);
        require!(self.user_cap_bps > 0 && self.user_cap_bps as u64 <= bps, SettleError::InvalidParams);
        require!(self.dispute_target_bps as u64 <= bps, SettleError::InvalidParams);
        require!(self.min_dispute_contribution > 0, SettleError::InvalidParams);
        require!(
            self.forfeit_contributors_bps as u64 + self.forfeit_protocol_bps as u64 <= bps,
            SettleError::InvalidParams
        );
        require!(
            self.pool_creator_bps as u64 + self.pool_protocol_bps as u64 <= bps,
            SettleError::InvalidParams
        );

        require!(self.min_collateral <= self.max_collateral, SettleError::InvalidParams);
        if self.collateral_mode == CollateralMode::Fixed {
            require!(self.fixed_collateral > 0, SettleError::InvalidParams);
        } else {
            require!(self.min_collateral > 0, SettleError::InvalidParams);
        }
        require!(self.bet_multiplier > 0, SettleError::InvalidParams);
        require!(self.trust_floor_bps > 0 && self.trust_floor_bps as u64 <= bps, SettleError::InvalidParams);

        // trust_max is a divisor in reputation-scaled collateral; trust_min
        // must leave room for `abs` without overflow.
        require!(self.trust_min > i64::MIN && self.trust_min <= 0, SettleError::InvalidParams);
        require!(self.trust_max > 0, SettleError::InvalidParams);
        require!(
            self.trust_min <= self.trust_initial && self.trust_initial <= self.trust_max,
            SettleError::InvalidParams
        );
        require!(self.trust_reward >= 0 && self.trust_min_penalty >= 0, SettleError::InvalidParams);
        require!(self.trust_penalty_bps as u64 <= bps, SettleError::InvalidParams);
        Ok(())
    }
}
