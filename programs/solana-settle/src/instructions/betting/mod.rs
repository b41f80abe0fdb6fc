pub mod place_bet;
pub mod claim_payout;
pub mod withdraw_bet;

pub use place_bet::*;
pub use claim_payout::*;
pub use withdraw_bet::*;
