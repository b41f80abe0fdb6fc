pub mod create_event;
pub mod top_up_collateral;
pub mod submit_outcome;

pub use create_event::*;
pub use top_up_collateral::*;
pub use submit_outcome::*;
