//! The board model: single source of truth for game state.

use crate::store::GameStore;
use std::sync::Arc;
use tictac_board::{GameState, Mark};
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

/// Notifications the model emits for the view.
#[derive(Debug, Clone)]
pub enum ModelEvent {
    /// Game state mutated; derived render state needs reconciling.
    Changed,
    /// A fetch or save round-trip completed with this authoritative state.
    Synced(GameState),
    /// A fetch or save round-trip failed; last-known state stays visible.
    SyncFailed(String),
}

/// Owns the [`GameState`] and every way of mutating it.
///
/// Local mutations are synchronous. Persistence runs on spawned tasks and
/// reports back through the event channel, so the state itself is only
/// ever touched from the UI task. The sole coupling to the view is the
/// [`ModelEvent::Changed`] notification after each successful mutation.
pub struct BoardModel {
    state: GameState,
    mark: Mark,
    store: Arc<dyn GameStore>,
    events: mpsc::UnboundedSender<ModelEvent>,
    in_flight: bool,
}

impl BoardModel {
    /// Creates a model backed by `store`, reporting through `events`.
    ///
    /// The local player always marks `X`; the server plays the opponent.
    pub fn new(store: Arc<dyn GameStore>, events: mpsc::UnboundedSender<ModelEvent>) -> Self {
        Self {
            state: GameState::new(),
            mark: Mark::X,
            store,
            events,
            in_flight: false,
        }
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The local player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Whether a fetch or save is still outstanding.
    pub fn sync_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Marks the square at `index` for the local player.
    ///
    /// Returns false without touching anything when the square is occupied
    /// or the index is out of range. No network I/O happens here; the
    /// caller decides whether to persist the new state.
    #[instrument(skip(self))]
    pub fn mark_square(&mut self, index: usize) -> bool {
        match self.state.mark(index, self.mark) {
            Ok(()) => {
                self.notify_changed();
                true
            }
            Err(reason) => {
                debug!(%reason, "move rejected");
                false
            }
        }
    }

    /// Starts a fresh local round: empty board, undecided outcome.
    ///
    /// Nothing is persisted until the first move of the new round.
    pub fn reset_game(&mut self) {
        self.state.reset();
        self.notify_changed();
    }

    /// Replaces local state with the server's, asynchronously.
    ///
    /// The authoritative state arrives as [`ModelEvent::Synced`] once the
    /// transfer completes; rendering is never blocked on it.
    #[instrument(skip(self))]
    pub fn fetch(&mut self) {
        self.in_flight = true;
        let store = Arc::clone(&self.store);
        let events = self.events.clone();
        tokio::spawn(async move {
            let event = match store.fetch().await {
                Ok(state) => ModelEvent::Synced(state),
                Err(error) => {
                    warn!(error = %error, "fetch failed");
                    ModelEvent::SyncFailed(error.to_string())
                }
            };
            let _ = events.send(event);
        });
    }

    /// Persists the current state, asynchronously.
    ///
    /// The server's response, win determination included, arrives as
    /// [`ModelEvent::Synced`].
    #[instrument(skip(self))]
    pub fn save(&mut self) {
        self.in_flight = true;
        let store = Arc::clone(&self.store);
        let events = self.events.clone();
        let snapshot = self.state.clone();
        tokio::spawn(async move {
            let event = match store.save(&snapshot).await {
                Ok(state) => ModelEvent::Synced(state),
                Err(error) => {
                    warn!(error = %error, "save failed");
                    ModelEvent::SyncFailed(error.to_string())
                }
            };
            let _ = events.send(event);
        });
    }

    /// Accepts the authoritative state of a completed round-trip.
    pub fn complete_sync(&mut self, state: GameState) {
        self.state = state;
        self.in_flight = false;
        self.notify_changed();
    }

    /// Records a failed round-trip. Last-known state stays visible; the
    /// user re-attempts with another click or a replay.
    pub fn sync_failed(&mut self) {
        self.in_flight = false;
    }

    fn notify_changed(&self) {
        // A closed channel just means nobody is left to re-render.
        let _ = self.events.send(ModelEvent::Changed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;

    struct NullStore;

    #[async_trait]
    impl GameStore for NullStore {
        async fn fetch(&self) -> Result<GameState> {
            Ok(GameState::new())
        }

        async fn save(&self, _state: &GameState) -> Result<GameState> {
            Ok(GameState::new())
        }
    }

    fn model() -> (BoardModel, mpsc::UnboundedReceiver<ModelEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (BoardModel::new(Arc::new(NullStore), tx), rx)
    }

    #[test]
    fn test_successful_mark_notifies_the_view() {
        let (mut model, mut rx) = model();
        assert!(model.mark_square(4));
        assert!(matches!(rx.try_recv(), Ok(ModelEvent::Changed)));
    }

    #[test]
    fn test_failed_mark_stays_silent() {
        let (mut model, mut rx) = model();
        model.mark_square(4);
        rx.try_recv().unwrap();

        assert!(!model.mark_square(4));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_out_of_range_mark_is_a_no_op() {
        let (mut model, _rx) = model();
        let before = model.state().clone();

        assert!(!model.mark_square(9));
        assert_eq!(model.state(), &before);
    }

    #[test]
    fn test_reset_clears_state_and_notifies() {
        let (mut model, mut rx) = model();
        model.mark_square(0);
        rx.try_recv().unwrap();

        model.reset_game();
        assert_eq!(model.state(), &GameState::new());
        assert!(matches!(rx.try_recv(), Ok(ModelEvent::Changed)));
    }

    #[test]
    fn test_complete_sync_replaces_state() {
        let (mut model, mut rx) = model();
        let mut server_state = GameState::new();
        server_state.mark(8, Mark::O).unwrap();

        model.complete_sync(server_state.clone());
        assert_eq!(model.state(), &server_state);
        assert!(!model.sync_in_flight());
        assert!(matches!(rx.try_recv(), Ok(ModelEvent::Changed)));
    }
}
