//! Console input.
//!
//! Reads commands line by line from stdin and forwards them to the `GameClient` as
//! typed user intents. Leaving a room asks for confirmation first.

use actix::Addr;
use log::debug;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::client::GameClient;
use crate::engine::UserIntent;
use crate::game::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Find,
    Solo,
    Place(Coord),
    Menu,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, type `help`")]
    Unknown(String),
    #[error("usage: move <row> <col>")]
    BadMove,
}

pub const HELP: &str = "\
find              look for an opponent
solo              play against the machine
move <row> <col>  place your mark (zero-based), `<row> <col>` works too
menu              leave the current room
help              show this list
quit              exit";

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => Err(CommandError::Empty),
        ["find"] => Ok(Command::Find),
        ["solo"] => Ok(Command::Solo),
        ["menu"] | ["home"] => Ok(Command::Menu),
        ["help"] | ["?"] => Ok(Command::Help),
        ["quit"] | ["exit"] | ["q"] => Ok(Command::Quit),
        ["move" | "m", row, col] | [row, col] => parse_coord(row, col),
        ["move" | "m", ..] => Err(CommandError::BadMove),
        [word, ..] => Err(CommandError::Unknown(word.to_string())),
    }
}

fn parse_coord(row: &str, col: &str) -> Result<Command, CommandError> {
    match (row.parse(), col.parse()) {
        (Ok(row), Ok(col)) => Ok(Command::Place(Coord::new(row, col))),
        _ => Err(CommandError::BadMove),
    }
}

fn is_yes(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Read stdin until EOF or `quit`.
pub async fn run(client: Addr<GameClient>) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut confirming_exit = false;

    while let Some(line) = lines.next_line().await? {
        if confirming_exit {
            confirming_exit = false;
            if is_yes(&line) {
                client.do_send(UserIntent::ExitToMenu);
            } else {
                println!("Staying in the current game.");
            }
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Find) => client.do_send(UserIntent::FindRoom { solo: false }),
            Ok(Command::Solo) => client.do_send(UserIntent::FindRoom { solo: true }),
            Ok(Command::Place(at)) => client.do_send(UserIntent::PlaceMark(at)),
            Ok(Command::Menu) => {
                println!("Leave the current game? [y/N]");
                confirming_exit = true;
            }
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Quit) => break,
            Err(CommandError::Empty) => {}
            Err(e) => println!("{e}"),
        }
    }
    debug!("[Console] Input closed");
    Ok(())
}
