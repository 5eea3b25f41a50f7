//! Host resolution and reachability probing through platform tools.

mod command;
pub mod probe;
pub mod provider;
pub mod reachability;
pub mod resolver;
pub mod runner;

pub use probe::HostProbe;
pub use runner::SystemCommandRunner;
