use crate::game::{Symbol, Winner};

/// How a finished game ended, from the local player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Draw,
    Win,
    /// Lost to the server-side opponent of a solo game.
    MachineWin,
    Loss,
}

impl Outcome {
    /// Evaluated in order: draw, own win, machine win (solo only), loss.
    /// A finished game without a winner counts as a loss.
    pub fn derive(winner: Option<Winner>, me: Symbol, solo: bool) -> Self {
        match winner {
            Some(Winner::Draw) => Outcome::Draw,
            Some(w) if w.symbol() == Some(me) => Outcome::Win,
            Some(w) if solo && w.symbol() == Some(me.opponent()) => Outcome::MachineWin,
            _ => Outcome::Loss,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::Draw => "Draw!",
            Outcome::Win => "You win!",
            Outcome::MachineWin => "The machine wins!",
            Outcome::Loss => "You lose!",
        }
    }
}
