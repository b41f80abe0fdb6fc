pub mod math;
pub mod transfer;
#[cfg(test)]
pub mod testing;

pub use math::*;
pub use transfer::*;
