use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

use crate::state::SharedState;

/// Periodically drop expired sessions so abandoned logins do not accumulate.
pub async fn run(state: SharedState) {
    let mut ticker = interval(state.config().session_sweep_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let removed = state.sessions().sweep_expired();
        if removed > 0 {
            debug!(removed, remaining = state.sessions().len(), "swept expired sessions");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use tokio::time::sleep;

    use super::*;
    use crate::{
        config::AppConfig,
        dao::game_store::memory::MemoryGameStore,
        state::{AppState, SessionUser},
    };

    fn admin() -> SessionUser {
        SessionUser {
            username: "admin".into(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn expired_sessions_are_dropped_on_each_tick() {
        let config = AppConfig {
            session_ttl: Duration::ZERO,
            session_sweep_interval: Duration::from_secs(60),
            ..AppConfig::default()
        };
        let state = AppState::new(Arc::new(MemoryGameStore::new()), config);
        state.sessions().create(admin());
        state.sessions().create(admin());

        let sweeper = tokio::spawn(run(state.clone()));

        // The first tick fires immediately.
        sleep(Duration::from_millis(1)).await;
        assert!(state.sessions().is_empty());

        state.sessions().create(admin());
        sleep(Duration::from_secs(59)).await;
        assert_eq!(state.sessions().len(), 1);

        sleep(Duration::from_secs(2)).await;
        assert!(state.sessions().is_empty());

        sweeper.abort();
    }
}
