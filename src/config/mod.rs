/// Main configuration module.
///
/// Re-exports submodules for game and client configuration.
pub mod client;
pub mod game;

pub use client::{Cli, ClientConfig};
