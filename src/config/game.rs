/// Game configuration constants.
///
/// This module defines the gameplay parameters the client assumes until told otherwise:
/// board dimensions and the per-turn countdown.
use std::time::Duration;

/// Number of rows (and columns) of the square board.
pub const BOARD_SIZE: usize = 16;

/// Duration of a player's turn in seconds.
pub const TURN_DURATION_SECS: u32 = 30;

/// Interval between two countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);
