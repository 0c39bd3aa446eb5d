use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game::{Board, Coord, Symbol, Winner};
use crate::session::RoomId;

// Every frame is a JSON object `{"event": <name>, "data": <payload>}`.

/// Client -> server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientIntent {
    FindRoom { solo: bool },
    MakeMove { room: RoomId, row: usize, col: usize },
    Timeout { room: RoomId },
}

impl ClientIntent {
    pub fn find_room(solo: bool) -> Self {
        Self::FindRoom { solo }
    }
    pub fn make_move(room: RoomId, at: Coord) -> Self {
        Self::MakeMove {
            room,
            row: at.row,
            col: at.col,
        }
    }
    pub fn timeout(room: RoomId) -> Self {
        Self::Timeout { room }
    }
}

// Server -> client
#[derive(Message, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[rtype(result = "()")]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// The payload is optional: a bare `{"event": "connected"}` or `"data": null` is
    /// accepted.
    Connected(Option<Handshake>),
    Waiting {
        msg: String,
    },
    RoomJoined {
        room: RoomId,
        symbol: Symbol,
    },
    StartGame {
        turn: Symbol,
    },
    StateUpdate(StateUpdate),
    Error {
        msg: String,
    },
    OpponentLeft {
        msg: String,
    },
}

/// Session details sent with `connected`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Handshake {
    #[serde(default)]
    pub sid: Option<String>,
}

/// Full authoritative state of the room after a move, a timeout or a finish.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StateUpdate {
    pub board: Board,
    pub finished: bool,
    #[serde(default)]
    pub winner: Option<Winner>,
    #[serde(default)]
    pub winner_positions: Vec<Coord>,
    #[serde(default)]
    pub last_move: Option<Coord>,
    #[serde(default)]
    pub turn: Option<Symbol>,
}
