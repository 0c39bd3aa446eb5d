//! Board model.
//!
//! A board is only ever built empty or decoded whole from an authoritative snapshot;
//! there is no way to edit a single cell.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::game::types::{Coord, Mark};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board row {row} has {len} cells, expected {size}")]
    Ragged { row: usize, len: usize, size: usize },
}

/// Square grid of marks stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Mark>>", into = "Vec<Vec<Mark>>")]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Board of `size` x `size` empty cells.
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Mark at `at`, or `None` when the coordinate is off the board.
    pub fn mark(&self, at: Coord) -> Option<Mark> {
        if at.row >= self.size || at.col >= self.size {
            return None;
        }
        self.cells.get(at.row * self.size + at.col).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        // chunks() panics on zero
        self.cells.chunks(self.size.max(1))
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|mark| !mark.is_empty()).count()
    }
}

impl TryFrom<Vec<Vec<Mark>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Mark>>) -> Result<Self, Self::Error> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, marks) in rows.into_iter().enumerate() {
            if marks.len() != size {
                return Err(BoardError::Ragged {
                    row,
                    len: marks.len(),
                    size,
                });
            }
            cells.extend(marks);
        }
        Ok(Self { size, cells })
    }
}

impl From<Board> for Vec<Vec<Mark>> {
    fn from(board: Board) -> Self {
        board.rows().map(|row| row.to_vec()).collect()
    }
}

/// Board plus the presentational annotations pushed by the authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub board: Board,
    pub winning_line: Vec<Coord>,
    pub last_move: Option<Coord>,
}

impl BoardSnapshot {
    pub fn empty(size: usize) -> Self {
        Self {
            board: Board::empty(size),
            winning_line: Vec::new(),
            last_move: None,
        }
    }

    pub fn is_winning(&self, at: Coord) -> bool {
        self.winning_line.contains(&at)
    }

    pub fn is_last_move(&self, at: Coord) -> bool {
        self.last_move == Some(at)
    }
}
