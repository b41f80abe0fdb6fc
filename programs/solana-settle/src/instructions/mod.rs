pub mod admin;
pub mod lifecycle;
pub mod betting;
pub mod dispute;
pub mod collateral;
pub mod views;

pub use admin::*;
pub use lifecycle::*;
pub use betting::*;
pub use dispute::*;
pub use collateral::*;
pub use views::*;
