//! Game model shared by the engine and the presentation.
//!
//! Board snapshots, marks and coordinates, plus the per-turn countdown.

pub mod board;
pub mod timer;
pub mod types;

#[cfg(test)]
mod tests;

pub use board::{Board, BoardError, BoardSnapshot};
pub use timer::{Countdown, TimerEvent, TimerToken};
pub use types::{Coord, Mark, Symbol, Winner};
