//! Session state.
//!
//! Holds who we are in the current room and which mode the client is in. Every method
//! that changes the mode checks the mode it starts from and returns `false` instead of
//! performing a transition that is not allowed, so the only reachable paths are
//! Menu -> InRoom -> Finished -> Menu plus InRoom -> Menu.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game::Symbol;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Menu,
    InRoom,
    Finished,
}

/// Room membership handed out by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub room: RoomId,
    pub symbol: Symbol,
}

#[derive(Debug)]
pub struct Session {
    mode: Mode,
    seat: Option<Seat>,
    my_turn: bool,
    solo: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            mode: Mode::Menu,
            seat: None,
            my_turn: false,
            solo: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn seat(&self) -> Option<&Seat> {
        self.seat.as_ref()
    }

    pub fn my_symbol(&self) -> Option<Symbol> {
        self.seat.as_ref().map(|seat| seat.symbol)
    }

    pub fn room(&self) -> Option<&RoomId> {
        self.seat.as_ref().map(|seat| &seat.room)
    }

    pub fn is_my_turn(&self) -> bool {
        self.my_turn
    }

    pub fn is_solo(&self) -> bool {
        self.solo
    }

    /// Record a matchmaking request. Menu only.
    pub fn request_match(&mut self, solo: bool) -> bool {
        if self.mode != Mode::Menu {
            return false;
        }
        self.solo = solo;
        true
    }

    /// Menu -> InRoom.
    pub fn join(&mut self, seat: Seat) -> bool {
        if self.mode != Mode::Menu {
            return false;
        }
        self.seat = Some(seat);
        self.mode = Mode::InRoom;
        self.my_turn = false;
        true
    }

    /// Only meaningful while seated in a running game.
    pub fn set_turn(&mut self, my_turn: bool) -> bool {
        if self.mode != Mode::InRoom {
            return false;
        }
        self.my_turn = my_turn;
        true
    }

    /// InRoom -> Finished.
    pub fn finish(&mut self) -> bool {
        if self.mode != Mode::InRoom {
            return false;
        }
        self.mode = Mode::Finished;
        self.my_turn = false;
        true
    }

    /// InRoom | Finished -> Menu, forgetting the seat.
    pub fn leave(&mut self) -> bool {
        if self.mode == Mode::Menu {
            return false;
        }
        self.mode = Mode::Menu;
        self.seat = None;
        self.my_turn = false;
        true
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
