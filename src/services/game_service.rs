//! Game resource operations on top of the injected [`GameStore`](crate::dao::game_store::GameStore).

use tracing::{debug, info};

use crate::{
    dao::models::NewGameEntity,
    dto::game::{Game, GameInput},
    error::ServiceError,
    state::{SessionUser, SharedState},
};

fn not_found(id: i64) -> ServiceError {
    ServiceError::NotFound(format!("game `{id}` not found"))
}

fn sanitize_input(input: GameInput) -> Result<NewGameEntity, ServiceError> {
    let entity = input.into_entity();
    if entity.title.is_empty() {
        return Err(ServiceError::InvalidInput("title must not be blank".into()));
    }
    Ok(entity)
}

/// Every game in primary-key order.
pub async fn list_games(state: &SharedState) -> Result<Vec<Game>, ServiceError> {
    let games = state.game_store().list_games().await?;
    debug!(count = games.len(), "listed games");
    Ok(games.into_iter().map(Into::into).collect())
}

/// Fetch the game stored under `id`, or `NotFound`.
pub async fn get_game(state: &SharedState, id: i64) -> Result<Game, ServiceError> {
    state
        .game_store()
        .find_game(id)
        .await?
        .map(Into::into)
        .ok_or_else(|| not_found(id))
}

/// Persist a new game; the store picks the identifier.
pub async fn create_game(
    state: &SharedState,
    actor: &SessionUser,
    input: GameInput,
) -> Result<Game, ServiceError> {
    let entity = sanitize_input(input)?;
    let created = state.game_store().create_game(entity).await?;
    info!(id = created.id, title = %created.title, actor = %actor.username, "game created");
    Ok(created.into())
}

/// Replace title and genre of an existing game.
pub async fn update_game(
    state: &SharedState,
    actor: &SessionUser,
    id: i64,
    input: GameInput,
) -> Result<Game, ServiceError> {
    let entity = sanitize_input(input)?;
    let updated = state
        .game_store()
        .update_game(id, entity)
        .await?
        .ok_or_else(|| not_found(id))?;
    info!(id, actor = %actor.username, "game updated");
    Ok(updated.into())
}

/// Remove a game and hand back the deleted record.
pub async fn delete_game(
    state: &SharedState,
    actor: &SessionUser,
    id: i64,
) -> Result<Game, ServiceError> {
    let removed = state
        .game_store()
        .delete_game(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    info!(id, title = %removed.title, actor = %actor.username, "game deleted");
    Ok(removed.into())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{config::AppConfig, dao::game_store::memory::MemoryGameStore, state::AppState};

    fn state() -> SharedState {
        AppState::new(Arc::new(MemoryGameStore::seeded()), AppConfig::default())
    }

    fn admin() -> SessionUser {
        SessionUser {
            username: "admin".into(),
        }
    }

    fn input(title: &str, genre: Option<&str>) -> GameInput {
        GameInput {
            title: title.into(),
            genre: genre.map(Into::into),
        }
    }

    #[tokio::test]
    async fn create_get_delete_round_trip() {
        let state = state();

        let created = create_game(&state, &admin(), input("X", Some("Y")))
            .await
            .unwrap();
        assert_eq!(created.title, "X");
        assert_eq!(created.genre.as_deref(), Some("Y"));

        let fetched = get_game(&state, created.id).await.unwrap();
        assert_eq!(fetched, created);

        let deleted = delete_game(&state, &admin(), created.id).await.unwrap();
        assert_eq!(deleted, created);

        assert!(matches!(
            get_game(&state, created.id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn deleting_unknown_id_leaves_store_untouched() {
        let state = state();
        let before = list_games(&state).await.unwrap();

        assert!(matches!(
            delete_game(&state, &admin(), 9999).await,
            Err(ServiceError::NotFound(_))
        ));
        assert_eq!(list_games(&state).await.unwrap(), before);
    }

    #[tokio::test]
    async fn blank_title_is_rejected_before_storage() {
        let state = state();
        assert!(matches!(
            create_game(&state, &admin(), input("   ", None)).await,
            Err(ServiceError::InvalidInput(_))
        ));
        assert_eq!(list_games(&state).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let state = state();
        assert!(matches!(
            update_game(&state, &admin(), 404, input("Gone", None)).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
