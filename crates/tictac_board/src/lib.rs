//! Tic-tac-toe board state and wire types.
//!
//! This crate holds the pieces of game state a client shares with the game
//! server: the nine-square [`Board`], the packed [`WinDescriptor`] the
//! server uses to report how a round ended, and the [`GameState`] aggregate
//! whose serde representation matches the `/game` payload exactly.
//!
//! The server is the authority on outcomes. Nothing in here computes wins;
//! the client only validates move legality before a round-trip and renders
//! whatever the server says afterwards.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod state;
mod win;

pub use board::{Board, Cell, Mark, MoveError};
pub use state::GameState;
pub use win::{Outcome, WinDescriptor, WinFormatError};
