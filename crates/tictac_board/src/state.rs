//! The aggregate state exchanged with the server.

use crate::{Board, Mark, MoveError, WinDescriptor};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board plus win descriptor, in the exact shape of the `/game` payload.
///
/// A client starts from [`GameState::new`], immediately overwrites it with
/// the server's state, mutates it optimistically on each legal move, and
/// replaces it again with whatever the server sends back after a save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board_state: Board,
    win: WinDescriptor,
}

impl GameState {
    /// Creates a fresh round: nine empty squares, no outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a state from parts. Mostly useful for stub stores.
    pub fn from_parts(board: Board, win: WinDescriptor) -> Self {
        Self {
            board_state: board,
            win,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board_state
    }

    /// The win descriptor.
    pub fn win(&self) -> &WinDescriptor {
        &self.win
    }

    /// Whether the round has ended in a win or a tie.
    pub fn is_decided(&self) -> bool {
        self.win.is_decided()
    }

    /// Places `mark` on square `index`, leaving the state untouched when
    /// the move is illegal.
    #[instrument(skip(self))]
    pub fn mark(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        self.board_state.place(index, mark)
    }

    /// Discards the round: empty board, undecided outcome.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Outcome;

    #[test]
    fn test_new_state_is_empty_and_undecided() {
        let state = GameState::new();
        assert!((0..9).all(|index| state.board().is_empty(index)));
        assert_eq!(state.win().outcome(), Outcome::Undecided);
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        let mut state = GameState::from_parts(board, WinDescriptor::won(Mark::X, 0b000000111));

        state.reset();
        assert_eq!(state, GameState::new());
    }
}
