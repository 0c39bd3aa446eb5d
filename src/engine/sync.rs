//! Client game-state synchronization engine.
//!
//! The engine is a reducer over `(state, input) -> effects`. It is the only owner of
//! the session, the board and the countdown; the runtime feeds it inputs in arrival
//! order and carries out the effects it returns.

use actix::prelude::*;
use log::{debug, info, warn};

use crate::config::game::{BOARD_SIZE, TURN_DURATION_SECS};
use crate::engine::view::ClientView;
use crate::game::{BoardSnapshot, Coord, Countdown, Mark, Symbol, TimerEvent, TimerToken};
use crate::protocol::{ClientIntent, ServerEvent, StateUpdate};
use crate::session::{Mode, Outcome, RoomId, Seat, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub board_size: usize,
    pub turn_duration_secs: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            turn_duration_secs: TURN_DURATION_SECS,
        }
    }
}

/// Gestures forwarded by the presentation.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
#[rtype(result = "()")]
pub enum UserIntent {
    FindRoom { solo: bool },
    PlaceMark(Coord),
    /// Sent only after the user confirmed leaving the room.
    ExitToMenu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Server(ServerEvent),
    User(UserIntent),
    Tick(TimerToken),
}

/// Work the runtime must carry out after an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Send(ClientIntent),
    /// Deliver `Input::Tick(token)` once per tick interval, replacing any previous schedule.
    StartTicking(TimerToken),
    /// Drop the tick schedule. Safe to repeat.
    StopTicking,
}

const MSG_CONNECTED: &str = "Connected. Choose a mode to start!";
const MSG_MY_TURN: &str = "Your turn!";
const MSG_THEIR_TURN: &str = "Waiting for the opponent...";
const MSG_TIMED_OUT: &str = "Time's up! You lost this turn.";
const MSG_BACK_TO_MENU: &str = "Returned to the main menu.";

pub struct SyncEngine {
    config: EngineConfig,
    session: Session,
    board: BoardSnapshot,
    countdown: Countdown,
    outcome: Option<Outcome>,
    status: String,
    turn_status: String,
}

impl SyncEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            session: Session::new(),
            board: BoardSnapshot::empty(config.board_size),
            countdown: Countdown::new(),
            outcome: None,
            status: String::new(),
            turn_status: String::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn board(&self) -> &BoardSnapshot {
        &self.board
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn handle(&mut self, input: Input) -> Vec<Effect> {
        match input {
            Input::Server(event) => self.on_server_event(event),
            Input::User(intent) => self.on_user_intent(intent),
            Input::Tick(token) => self.on_tick(token),
        }
    }

    /// Read-only snapshot for the presentation.
    pub fn view(&self) -> ClientView {
        let countdown = (self.session.is_my_turn() && self.countdown.is_running())
            .then(|| self.countdown.remaining());
        ClientView {
            mode: self.session.mode(),
            my_symbol: self.session.my_symbol(),
            room: self.session.room().cloned(),
            my_turn: self.session.is_my_turn(),
            solo: self.session.is_solo(),
            board: self.board.clone(),
            status: self.status.clone(),
            turn_status: self.turn_status.clone(),
            countdown,
            outcome: self.outcome,
        }
    }

    fn on_server_event(&mut self, event: ServerEvent) -> Vec<Effect> {
        match event {
            ServerEvent::Connected(handshake) => {
                let sid = handshake.and_then(|h| h.sid);
                debug!("[SyncEngine] Connected sid={:?}", sid);
                self.status = MSG_CONNECTED.to_string();
                Vec::new()
            }
            ServerEvent::Waiting { msg } => {
                if self.session.mode() == Mode::Menu {
                    self.status = msg;
                } else {
                    debug!("[SyncEngine] Ignoring waiting notice outside the menu");
                }
                Vec::new()
            }
            ServerEvent::RoomJoined { room, symbol } => self.on_room_joined(room, symbol),
            ServerEvent::StartGame { turn } => self.on_start_game(turn),
            ServerEvent::StateUpdate(update) => self.on_state_update(update),
            ServerEvent::Error { msg } => {
                warn!("[SyncEngine] Server error: {}", msg);
                self.status = msg;
                Vec::new()
            }
            ServerEvent::OpponentLeft { msg } => self.on_opponent_left(msg),
        }
    }

    fn on_room_joined(&mut self, room: RoomId, symbol: Symbol) -> Vec<Effect> {
        let seat = Seat {
            room: room.clone(),
            symbol,
        };
        if !self.session.join(seat) {
            warn!(
                "[SyncEngine] room_joined for room={} while in {:?}, ignored",
                room,
                self.session.mode()
            );
            return Vec::new();
        }
        info!("[SyncEngine] Joined room={} as {}", room, symbol);
        self.reset_board();
        self.outcome = None;
        self.status = format!("Joined room {room}. You are {symbol}.");
        self.turn_status.clear();
        Vec::new()
    }

    fn on_start_game(&mut self, turn: Symbol) -> Vec<Effect> {
        if self.session.mode() != Mode::InRoom {
            warn!(
                "[SyncEngine] start_game while in {:?}, ignored",
                self.session.mode()
            );
            return Vec::new();
        }
        self.reset_board();
        self.outcome = None;
        self.assign_turn(Some(turn))
    }

    fn on_state_update(&mut self, update: StateUpdate) -> Vec<Effect> {
        if self.session.mode() != Mode::InRoom {
            warn!(
                "[SyncEngine] state_update while in {:?}, ignored",
                self.session.mode()
            );
            return Vec::new();
        }
        if update.board.size() != self.config.board_size {
            warn!(
                "[SyncEngine] state_update with a {}x{} board, expected {}, ignored",
                update.board.size(),
                update.board.size(),
                self.config.board_size
            );
            return Vec::new();
        }

        self.board = BoardSnapshot {
            board: update.board,
            winning_line: update.winner_positions,
            last_move: update.last_move,
        };

        if !update.finished {
            return self.assign_turn(update.turn);
        }

        self.countdown.stop();
        let (me, solo) = match self.session.my_symbol() {
            Some(me) => (me, self.session.is_solo()),
            None => return vec![Effect::StopTicking],
        };
        self.session.finish();
        let outcome = Outcome::derive(update.winner, me, solo);
        info!(
            "[SyncEngine] Game finished winner={:?} outcome={:?}",
            update.winner, outcome
        );
        self.outcome = Some(outcome);
        self.turn_status = outcome.message().to_string();
        vec![Effect::StopTicking]
    }

    fn on_opponent_left(&mut self, msg: String) -> Vec<Effect> {
        info!("[SyncEngine] Opponent left: {}", msg);
        let mut effects = Vec::new();
        if self.session.mode() == Mode::InRoom {
            self.countdown.stop();
            self.session.set_turn(false);
            self.turn_status = msg.clone();
            effects.push(Effect::StopTicking);
        }
        self.status = msg;
        effects
    }

    fn on_user_intent(&mut self, intent: UserIntent) -> Vec<Effect> {
        match intent {
            UserIntent::FindRoom { solo } => {
                if !self.session.request_match(solo) {
                    debug!("[SyncEngine] find_room outside the menu suppressed");
                    return Vec::new();
                }
                info!("[SyncEngine] Looking for a room solo={}", solo);
                vec![Effect::Send(ClientIntent::find_room(solo))]
            }
            UserIntent::PlaceMark(at) => self.on_place_mark(at),
            UserIntent::ExitToMenu => {
                if self.session.mode() == Mode::Menu {
                    return Vec::new();
                }
                self.countdown.stop();
                self.session.leave();
                self.reset_board();
                self.outcome = None;
                self.turn_status.clear();
                self.status = MSG_BACK_TO_MENU.to_string();
                info!("[SyncEngine] Back to menu");
                vec![Effect::StopTicking]
            }
        }
    }

    fn on_place_mark(&mut self, at: Coord) -> Vec<Effect> {
        if self.session.mode() != Mode::InRoom || !self.session.is_my_turn() {
            debug!("[SyncEngine] Move at {} suppressed: not our turn", at);
            return Vec::new();
        }
        if self.board.board.mark(at) != Some(Mark::Empty) {
            debug!("[SyncEngine] Move at {} suppressed: cell unavailable", at);
            return Vec::new();
        }
        match self.session.room() {
            Some(room) => vec![Effect::Send(ClientIntent::make_move(room.clone(), at))],
            None => Vec::new(),
        }
    }

    fn on_tick(&mut self, token: TimerToken) -> Vec<Effect> {
        match self.countdown.tick(token) {
            None => Vec::new(),
            Some(TimerEvent::Tick { remaining }) => {
                debug!("[SyncEngine] {}s left", remaining);
                Vec::new()
            }
            Some(TimerEvent::Expired) => {
                let mut effects = vec![Effect::StopTicking];
                if self.session.mode() != Mode::InRoom || !self.session.is_my_turn() {
                    return effects;
                }
                // Optimistic: the next authoritative update decides the real turn.
                self.session.set_turn(false);
                self.turn_status = MSG_TIMED_OUT.to_string();
                if let Some(room) = self.session.room() {
                    info!("[SyncEngine] Turn timed out in room={}", room);
                    effects.push(Effect::Send(ClientIntent::timeout(room.clone())));
                }
                effects
            }
        }
    }

    /// Recompute the turn flag from the authority's `turn` and (re)arm the countdown.
    fn assign_turn(&mut self, turn: Option<Symbol>) -> Vec<Effect> {
        let my_turn = turn.is_some() && turn == self.session.my_symbol();
        self.session.set_turn(my_turn);
        self.countdown.stop();
        if my_turn {
            self.turn_status = MSG_MY_TURN.to_string();
            let token = self.countdown.start(self.config.turn_duration_secs);
            vec![Effect::StartTicking(token)]
        } else {
            self.turn_status = MSG_THEIR_TURN.to_string();
            vec![Effect::StopTicking]
        }
    }

    fn reset_board(&mut self) {
        self.board = BoardSnapshot::empty(self.config.board_size);
    }
}
