//! Wire protocol spoken with the authority server.

pub mod messages;

#[cfg(test)]
mod tests;

pub use messages::{ClientIntent, Handshake, ServerEvent, StateUpdate};
