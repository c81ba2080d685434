//! Render state derived from the model, and the click-target registry.

use ratatui::layout::{Position, Rect};
use tictac_board::{GameState, Outcome};

/// Id prefix for board squares; the index parses back out of `square-<n>`.
pub const SQUARE_ID_PREFIX: &str = "square";

/// Id of the replay control.
pub const REPLAY_ID: &str = "replay";

/// What the view derives from the model, plus where everything clickable
/// was last drawn.
///
/// The view holds no game state of its own. [`BoardView::render_updates`]
/// reconciles the derived pieces whenever the model reports a change; the
/// renderer re-registers click targets on every draw so hits always
/// resolve against what is actually on screen.
#[derive(Debug, Default)]
pub struct BoardView {
    status: Option<String>,
    winning: u16,
    targets: Vec<(Rect, String)>,
}

impl BoardView {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles derived render state against the model.
    ///
    /// A won round sets the status banner and takes the winning-square set
    /// from the descriptor's mask. A tie sets the banner only; the mask is
    /// not consulted. An undecided round clears both. Running this twice
    /// over the same state renders identically to running it once.
    pub fn render_updates(&mut self, state: &GameState) {
        match state.win().outcome() {
            Outcome::Won(mark) => {
                self.status = Some(format!("{} wins!", mark));
                self.winning = state.win().mask();
            }
            Outcome::Tie => {
                self.status = Some("It's a tie!".to_string());
                self.winning = 0;
            }
            Outcome::Undecided => {
                self.status = None;
                self.winning = 0;
            }
        }
    }

    /// The decided-outcome banner, if the round is over.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Whether the square at `index` gets the winning highlight.
    pub fn is_winning(&self, index: usize) -> bool {
        index < 9 && self.winning & (1 << index) != 0
    }

    /// Forgets all click targets; the next draw re-registers them.
    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Registers `area` as the click target with the given id.
    pub fn register_target(&mut self, area: Rect, id: String) {
        self.targets.push((area, id));
    }

    /// Resolves a terminal position to the id of the target under it.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<String> {
        self.targets
            .iter()
            .find(|(area, _)| area.contains(Position { x: column, y: row }))
            .map(|(_, id)| id.clone())
    }
}
