//! Persistence against the game server.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tictac_board::GameState;
use tracing::{debug, instrument};

/// The remote store that owns authoritative game state.
///
/// `fetch` replaces everything the client knows with the server's state;
/// `save` submits the client's state and hands back the server's
/// authoritative response, win determination included. Transport details
/// live behind this seam.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Reads the current game from the server.
    async fn fetch(&self) -> Result<GameState>;

    /// Writes `state` to the server and returns the authoritative result.
    async fn save(&self, state: &GameState) -> Result<GameState>;
}

/// REST implementation of [`GameStore`] against the server's `/game`
/// resource: GET reads the current game, POST submits a move and receives
/// the authoritative state back.
#[derive(Debug, Clone)]
pub struct RestStore {
    base_url: String,
    client: reqwest::Client,
}

impl RestStore {
    /// Creates a store for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn game_url(&self) -> String {
        format!("{}/game", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl GameStore for RestStore {
    #[instrument(skip(self), fields(url = %self.game_url()))]
    async fn fetch(&self) -> Result<GameState> {
        debug!("Fetching game state");
        let state = self
            .client
            .get(self.game_url())
            .send()
            .await
            .context("game fetch request failed")?
            .error_for_status()
            .context("game fetch rejected by server")?
            .json()
            .await
            .context("game fetch returned an unreadable payload")?;
        Ok(state)
    }

    #[instrument(skip_all, fields(url = %self.game_url()))]
    async fn save(&self, state: &GameState) -> Result<GameState> {
        debug!("Saving game state");
        let state = self
            .client
            .post(self.game_url())
            .json(state)
            .send()
            .await
            .context("game save request failed")?
            .error_for_status()
            .context("game save rejected by server")?
            .json()
            .await
            .context("game save returned an unreadable payload")?;
        Ok(state)
    }
}
