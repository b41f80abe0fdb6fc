pub mod init_protocol;
pub mod cancel_event;
pub mod close_event;
pub mod sweep_abandoned_dispute;

pub use init_protocol::*;
pub use cancel_event::*;
pub use close_event::*;
pub use sweep_abandoned_dispute::*;
