use crate::game::{BoardSnapshot, Symbol};
use crate::session::{Mode, Outcome, RoomId};

/// Everything the presentation needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientView {
    pub mode: Mode,
    pub my_symbol: Option<Symbol>,
    pub room: Option<RoomId>,
    pub my_turn: bool,
    pub solo: bool,
    pub board: BoardSnapshot,
    /// Connection / room line.
    pub status: String,
    /// Whose turn it is, or how the game ended.
    pub turn_status: String,
    /// Seconds left, shown only while it is our turn.
    pub countdown: Option<u32>,
    pub outcome: Option<Outcome>,
}
