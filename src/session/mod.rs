//! Session identity and the coarse UI mode that gates user input.

pub mod outcome;
pub mod state;


pub use outcome::Outcome;
pub use state::{Mode, RoomId, Seat, Session};
