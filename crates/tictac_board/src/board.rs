//! Core board types.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The local player's mark.
    X,
    /// The opposing mark, assigned by the server.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A single square of the board.
///
/// On the wire a square is `null` or a mark string, so serde goes through
/// `Option<Mark>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Mark>", into = "Option<Mark>")]
pub enum Cell {
    /// Nobody has played here.
    Empty,
    /// Occupied by a player.
    Marked(Mark),
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        match mark {
            Some(mark) => Cell::Marked(mark),
            None => Cell::Empty,
        }
    }
}

impl From<Cell> for Option<Mark> {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Marked(mark) => Some(mark),
            Cell::Empty => None,
        }
    }
}

/// A rejected board mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index does not name one of the nine squares.
    #[display("square {index} is out of bounds")]
    OutOfBounds {
        /// The offending index.
        index: usize,
    },
    /// The square already holds a mark.
    #[display("square {index} is already occupied")]
    Occupied {
        /// The offending index.
        index: usize,
    },
}

/// 3x3 board, squares in row-major order (row = i/3, column = i%3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Number of squares. The board never resizes.
    pub const SIZE: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Self::SIZE],
        }
    }

    /// Gets the square at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks whether the square at `index` is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Places `mark` on the square at `index`.
    ///
    /// Fails without mutating anything when the index is out of bounds or
    /// the square is occupied.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.get(index) {
            None => Err(MoveError::OutOfBounds { index }),
            Some(Cell::Marked(_)) => Err(MoveError::Occupied { index }),
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Marked(mark);
                Ok(())
            }
        }
    }

    /// All squares as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
