use anchor_lang::prelude::*;

#[error_code]
pub enum SettleError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid protocol parameters")]
    InvalidParams,
    #[msg("Too many adjudicators (max 4)")]
    TooManyAdjudicators,
    #[msg("Event id does not match the next sequential id")]
    InvalidEventId,
    #[msg("Outcome count must be between 2 and 12")]
    InvalidOutcomeCount,
    #[msg("Outcome label empty or too long (max 32)")]
    InvalidOutcomeLabel,
    #[msg("Open time is too soon")]
    OpenTimeTooSoon,
    #[msg("Close time must be after open time")]
    InvalidTimestamps,
    #[msg("Creator trust score below threshold")]
    TrustTooLow,
    #[msg("Collateral below the required amount")]
    InsufficientCollateral,
    #[msg("Token balance insufficient")]
    InsufficientBalance,
    #[msg("Event is not open")]
    EventNotOpen,
    #[msg("Event is not resolved")]
    EventNotResolved,
    #[msg("Betting period has ended")]
    BettingClosed,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Invalid outcome index")]
    InvalidOutcome,
    #[msg("Bet would exceed the event stake ceiling")]
    CeilingExceeded,
    #[msg("Bet would exceed the per-user cap")]
    UserCapExceeded,
    #[msg("Event has not closed yet")]
    EventStillRunning,
    #[msg("Dispute window expired")]
    DisputeWindowExpired,
    #[msg("Dispute window still open")]
    DisputeWindowOpen,
    #[msg("Dispute is open and awaiting adjudication")]
    DisputeOpen,
    #[msg("No open dispute")]
    NoOpenDispute,
    #[msg("Dispute already resolved")]
    DisputeAlreadyResolved,
    #[msg("Only bettors on this event may dispute")]
    NotABettor,
    #[msg("Dispute contribution below minimum")]
    BelowMinContribution,
    #[msg("Dispute reason too long (max 200)")]
    ReasonTooLong,
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("No stake on the winning outcome")]
    NoPosition,
    #[msg("Nobody staked on the winning outcome, withdraw instead")]
    NoWinningStake,
    #[msg("Withdrawal not allowed in the current state")]
    WithdrawNotAllowed,
    #[msg("Nothing to withdraw")]
    NothingToWithdraw,
    #[msg("Cancellation window has passed")]
    CancelWindowPassed,
    #[msg("Collateral already released or forfeited")]
    CollateralNotLocked,
    #[msg("Collateral has not been forfeited")]
    NotForfeited,
    #[msg("No dispute contribution to claim")]
    NoContribution,
    #[msg("Dispute contributions are not refundable")]
    NotRefundable,
    #[msg("Dispute has not been abandoned yet")]
    NotAbandoned,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Invalid mint account")]
    InvalidMint,
    #[msg("Vault balance insufficient")]
    InsufficientVault,
}
