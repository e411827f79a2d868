pub mod session;

use std::sync::Arc;

use crate::{config::AppConfig, dao::game_store::GameStore};

pub use self::session::{Session, SessionStore, SessionUser};

/// Reference-counted handle cloned into every handler and background task.
pub type SharedState = Arc<AppState>;

/// Central application state handed to every handler.
pub struct AppState {
    game_store: Arc<dyn GameStore>,
    sessions: SessionStore,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(game_store: Arc<dyn GameStore>, config: AppConfig) -> SharedState {
        Arc::new(Self {
            game_store,
            sessions: SessionStore::new(config.session_ttl),
            config,
        })
    }

    /// Persistence backend for games and users.
    pub fn game_store(&self) -> Arc<dyn GameStore> {
        self.game_store.clone()
    }

    /// Registry of logged-in sessions.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Runtime configuration the server was started with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
