pub mod claim_collateral;

pub use claim_collateral::*;
