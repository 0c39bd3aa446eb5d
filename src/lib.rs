//! Client side of an online caro (five-in-a-row) match.
//!
//! The authority server owns the rules. This crate mirrors its state, gates user input
//! by mode and turn, runs the per-turn countdown and renders what it is told.

pub mod client;
pub mod config;
pub mod console;
pub mod engine;
pub mod game;
pub mod protocol;
pub mod session;
