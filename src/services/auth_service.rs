//! Credential checks and session lifecycle.

use tracing::{info, warn};

use crate::{
    dto::auth::LoginRequest,
    error::ServiceError,
    state::{Session, SessionUser, SharedState},
};

/// Check the credentials against the store and open a session on success.
///
/// Both fields are compared as plain strings; the error never tells which one
/// did not match.
pub async fn login(state: &SharedState, request: LoginRequest) -> Result<Session, ServiceError> {
    let LoginRequest { username, password } = request;
    let Some(user) = state
        .game_store()
        .find_user(username.clone(), password)
        .await?
    else {
        warn!(%username, "rejected login attempt");
        return Err(ServiceError::InvalidCredentials);
    };

    let session = state.sessions().create(SessionUser {
        username: user.username,
    });
    info!(username = %username, expires_at = %session.expires_at, "user logged in");
    Ok(session)
}

/// Destroy the session behind `token`, if any. Succeeds either way.
pub fn logout(state: &SharedState, token: Option<&str>) {
    let destroyed = token.is_some_and(|token| state.sessions().destroy(token));
    info!(destroyed, "logout processed");
}

/// Resolve the user of an authenticated session.
pub fn authenticate(state: &SharedState, token: Option<&str>) -> Result<SessionUser, ServiceError> {
    let token =
        token.ok_or_else(|| ServiceError::Unauthorized("missing session cookie".into()))?;
    state
        .sessions()
        .authenticated_user(token)
        .ok_or_else(|| ServiceError::Unauthorized("session expired or unknown".into()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{config::AppConfig, dao::game_store::memory::MemoryGameStore, state::AppState};

    fn state() -> SharedState {
        AppState::new(Arc::new(MemoryGameStore::seeded()), AppConfig::default())
    }

    fn credentials(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn valid_login_opens_an_authenticated_session() {
        let state = state();
        let session = login(&state, credentials("admin", "password123"))
            .await
            .unwrap();

        let user = authenticate(&state, Some(&session.id)).unwrap();
        assert_eq!(user.username, "admin");
    }

    #[tokio::test]
    async fn wrong_password_creates_no_session() {
        let state = state();
        let result = login(&state, credentials("admin", "wrong")).await;

        assert!(matches!(result, Err(ServiceError::InvalidCredentials)));
        assert!(state.sessions().is_empty());
    }

    #[tokio::test]
    async fn logout_revokes_the_session() {
        let state = state();
        let session = login(&state, credentials("admin", "password123"))
            .await
            .unwrap();

        logout(&state, Some(&session.id));
        assert!(matches!(
            authenticate(&state, Some(&session.id)),
            Err(ServiceError::Unauthorized(_))
        ));

        // Logging out without a session is not an error.
        logout(&state, None);
    }

    #[test]
    fn missing_token_is_unauthorized() {
        let state = state();
        assert!(matches!(
            authenticate(&state, None),
            Err(ServiceError::Unauthorized(_))
        ));
    }
}
