pub mod result;
pub mod target;

pub use result::{AddressList, ProbeResult};
pub use target::{ProbeTarget, Protocol, TargetError};
