//! Terminal presentation: draws `ClientView` snapshots and turns typed commands into
//! user intents.

pub mod input;
pub mod render;


pub use input::{parse_command, Command, CommandError};
pub use render::{draw, ConsoleView};
