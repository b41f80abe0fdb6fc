pub mod contribute_to_dispute;
pub mod resolve_dispute;
pub mod claim_forfeited_share;
pub mod claim_dispute_refund;

pub use contribute_to_dispute::*;
pub use resolve_dispute::*;
pub use claim_forfeited_share::*;
pub use claim_dispute_refund::*;
