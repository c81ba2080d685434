//! Keyboard bindings.

use crossterm::event::{KeyCode, KeyEvent};

/// What a key press asks the client to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the client.
    Quit,
    /// Discard local state and re-fetch from the server.
    Replay,
    /// Mark the square at this index.
    Mark(usize),
}

/// Maps a key press to its action, if it has one.
///
/// Digits 1-9 address squares 0-8 in row-major order, matching the
/// placeholders drawn in empty squares.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Replay),
        KeyCode::Char(c @ '1'..='9') => Some(Action::Mark(c as usize - '1' as usize)),
        _ => None,
    }
}
