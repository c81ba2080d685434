//! The top-level controller wiring the model and view together.

use crate::model::{BoardModel, ModelEvent};
use crate::store::GameStore;
use crate::view::{BoardView, REPLAY_ID};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Owns the model/view pair and routes input to named handlers.
///
/// There is exactly one of these per client session, held by the event
/// loop; nothing here is ambient or global.
pub struct App {
    model: BoardModel,
    view: BoardView,
}

impl App {
    /// Creates the controller with a model backed by `store`.
    pub fn new(store: Arc<dyn GameStore>, events: mpsc::UnboundedSender<ModelEvent>) -> Self {
        Self {
            model: BoardModel::new(store, events),
            view: BoardView::new(),
        }
    }

    /// The model.
    pub fn model(&self) -> &BoardModel {
        &self.model
    }

    /// The view.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Mutable view access for the renderer's target registry.
    pub fn view_mut(&mut self) -> &mut BoardView {
        &mut self.view
    }

    /// Handles a click on any registered target.
    pub fn target_clicked(&mut self, id: &str) {
        if id == REPLAY_ID {
            self.replay();
        } else {
            self.square_was_clicked(id);
        }
    }

    /// Handles a click on a board square identified by a `square-<n>` id.
    ///
    /// The index is the numeric suffix after the last `-`. A malformed id
    /// is a no-op; a parsed index goes through the same legality checks as
    /// the key path.
    pub fn square_was_clicked(&mut self, target_id: &str) {
        match target_id
            .rsplit('-')
            .next()
            .and_then(|suffix| suffix.parse::<usize>().ok())
        {
            Some(index) => self.square_clicked(index),
            None => debug!(target_id, "click target id did not parse, ignoring"),
        }
    }

    /// Attempts to mark the square at `index` and persist the result.
    ///
    /// On a finished board the click starts a new round and marks the
    /// square in the same gesture. A click on an occupied square is
    /// silently ignored. Clicks are dropped while a round-trip is
    /// outstanding.
    pub fn square_clicked(&mut self, index: usize) {
        if self.model.sync_in_flight() {
            debug!(index, "sync in flight, ignoring click");
            return;
        }
        if self.model.state().is_decided() {
            self.model.reset_game();
        }
        if self.model.mark_square(index) {
            self.model.save();
        }
    }

    /// Discards local state in favor of a fresh fetch from the server.
    ///
    /// Also runs once at startup to load the initial state.
    pub fn replay(&mut self) {
        self.model.fetch();
    }

    /// Consumes a model notification.
    pub fn handle_event(&mut self, event: ModelEvent) {
        match event {
            ModelEvent::Changed => self.view.render_updates(self.model.state()),
            ModelEvent::Synced(state) => self.model.complete_sync(state),
            ModelEvent::SyncFailed(reason) => {
                warn!(%reason, "sync failed, keeping last known state");
                self.model.sync_failed();
            }
        }
    }
}
