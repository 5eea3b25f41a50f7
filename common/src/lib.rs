pub mod command;
pub mod config;
pub mod network;
pub mod platform;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
