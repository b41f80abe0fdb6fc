pub mod config;
pub mod trust;
pub mod collateral;
pub mod event;
pub mod bet;
pub mod dispute;
pub mod settlement;

pub use config::*;
pub use trust::*;
pub use collateral::*;
pub use event::*;
pub use bet::*;
pub use dispute::*;
pub use settlement::*;
