pub mod compute_bet_limit;
pub mod preview_payout;

pub use compute_bet_limit::*;
pub use preview_payout::*;
