//! Terminal rendering.
//!
//! Draws the board, the status lines and the countdown from a `ClientView`.

use std::fmt::Write;

use crate::client::Presenter;
use crate::engine::ClientView;
use crate::game::{Coord, Mark};
use crate::session::Mode;

/// Render a whole frame to a string.
pub fn draw(view: &ClientView) -> String {
    let mut out = String::new();
    if !view.status.is_empty() {
        let _ = writeln!(out, "{}", view.status);
    }

    match view.mode {
        Mode::Menu => {
            out.push_str("Commands: find | solo | help | quit\n");
            return out;
        }
        Mode::InRoom | Mode::Finished => {}
    }

    if let (Some(room), Some(symbol)) = (&view.room, view.my_symbol) {
        let _ = writeln!(out, "Room {room} | you play {symbol}");
    }
    out.push_str(&draw_board(view));
    if !view.turn_status.is_empty() {
        let _ = writeln!(out, "{}", view.turn_status);
    }
    if let Some(secs) = view.countdown {
        let _ = writeln!(out, "Time left: {secs}s");
    }
    if view.mode == Mode::Finished {
        out.push_str("Type `menu` to go back to the main menu.\n");
    }
    out
}

/// Board grid with row/column indices. Winning cells are bracketed, the last move is
/// starred.
pub fn draw_board(view: &ClientView) -> String {
    let snapshot = &view.board;
    let mut out = String::from("    ");
    for col in 0..snapshot.board.size() {
        let _ = write!(out, "{:<3}", col);
    }
    out.push('\n');

    for (row, marks) in snapshot.board.rows().enumerate() {
        let _ = write!(out, "{:>2}  ", row);
        for (col, mark) in marks.iter().enumerate() {
            let at = Coord::new(row, col);
            let symbol = match mark {
                Mark::Empty => ".",
                Mark::X => "X",
                Mark::O => "O",
            };
            let cell = if snapshot.is_winning(at) {
                format!("[{symbol}]")
            } else if snapshot.is_last_move(at) {
                format!("{symbol}*")
            } else {
                symbol.to_string()
            };
            let _ = write!(out, "{:<3}", cell);
        }
        out.push('\n');
    }
    out
}

/// Presenter printing frames to stdout. A tick that only moves the countdown prints
/// a single line instead of the whole board.
#[derive(Default)]
pub struct ConsoleView {
    last_frame: String,
    last_countdown: Option<u32>,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Presenter for ConsoleView {
    fn render(&mut self, view: &ClientView) {
        let countdown = view.countdown;
        let frame = draw(&ClientView {
            countdown: None,
            ..view.clone()
        });
        if frame != self.last_frame {
            println!("\n{frame}");
            if let Some(secs) = countdown {
                println!("Time left: {secs}s");
            }
            self.last_frame = frame;
        } else if countdown != self.last_countdown {
            if let Some(secs) = countdown {
                println!("Time left: {secs}s");
            }
        }
        self.last_countdown = countdown;
    }

    fn disconnected(&mut self) {
        println!("Disconnected from the server. Type `quit` to exit.");
    }
}
