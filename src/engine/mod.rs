//! Sync engine: the orchestrator between transport events, user gestures and the
//! turn countdown.

pub mod sync;
pub mod view;


pub use sync::{Effect, EngineConfig, Input, SyncEngine, UserIntent};
pub use view::ClientView;
