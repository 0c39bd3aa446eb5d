//! Client runtime.
//!
//! This module wires the sync engine to the outside world:
//! - The `GameClient` actor that owns the engine and drives the countdown ticks
//! - The WebSocket transport to the authority server
//! - Error types for the fallible edges (configuration, connection)

pub mod actor;
pub mod error;
pub mod transport;


pub use actor::{GameClient, GetView, Presenter};
pub use error::ClientError;
pub use transport::{connect, Transport, WsTransport};
