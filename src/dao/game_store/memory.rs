//! In-process backend keeping games in a vector, mainly used by tests and
//! for running the API without a database file.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::dao::{
    game_store::GameStore,
    models::{GameEntity, NewGameEntity, SEED_GAMES, SEED_USERS, UserEntity},
    storage::StorageResult,
};

#[derive(Default)]
struct Tables {
    games: Vec<GameEntity>,
    users: Vec<(UserEntity, String)>,
}

/// Game store backed by in-memory vectors ordered by id.
#[derive(Clone, Default)]
pub struct MemoryGameStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryGameStore {
    /// Empty store without games or users.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the default games and administrator accounts.
    pub fn seeded() -> Self {
        let games = SEED_GAMES
            .iter()
            .zip(1..)
            .map(|((title, genre), id)| GameEntity {
                id,
                title: (*title).to_owned(),
                genre: Some((*genre).to_owned()),
            })
            .collect();
        let users = SEED_USERS
            .iter()
            .zip(1..)
            .map(|((username, password), id)| {
                (
                    UserEntity {
                        id,
                        username: (*username).to_owned(),
                    },
                    (*password).to_owned(),
                )
            })
            .collect();

        Self {
            tables: Arc::new(RwLock::new(Tables { games, users })),
        }
    }
}

impl GameStore for MemoryGameStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let tables = self.tables.clone();
        Box::pin(async move { Ok(tables.read().await.games.clone()) })
    }

    fn find_game(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let tables = self.tables.clone();
        Box::pin(async move {
            let guard = tables.read().await;
            Ok(guard.games.iter().find(|game| game.id == id).cloned())
        })
    }

    fn create_game(&self, game: NewGameEntity) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let tables = self.tables.clone();
        Box::pin(async move {
            let mut guard = tables.write().await;
            let next_id = guard.games.iter().map(|g| g.id).max().unwrap_or(0) + 1;
            let created = game.with_id(next_id);
            guard.games.push(created.clone());
            Ok(created)
        })
    }

    fn update_game(
        &self,
        id: i64,
        game: NewGameEntity,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let tables = self.tables.clone();
        Box::pin(async move {
            let mut guard = tables.write().await;
            let Some(slot) = guard.games.iter_mut().find(|g| g.id == id) else {
                return Ok(None);
            };
            *slot = game.with_id(id);
            Ok(Some(slot.clone()))
        })
    }

    fn delete_game(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let tables = self.tables.clone();
        Box::pin(async move {
            let mut guard = tables.write().await;
            let removed = guard
                .games
                .iter()
                .position(|g| g.id == id)
                .map(|index| guard.games.remove(index));
            Ok(removed)
        })
    }

    fn find_user(
        &self,
        username: String,
        password: String,
    ) -> BoxFuture<'static, StorageResult<Option<UserEntity>>> {
        let tables = self.tables.clone();
        Box::pin(async move {
            let guard = tables.read().await;
            Ok(guard
                .users
                .iter()
                .find(|(user, stored)| user.username == username && *stored == password)
                .map(|(user, _)| user.clone()))
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_game(title: &str, genre: Option<&str>) -> NewGameEntity {
        NewGameEntity {
            title: title.into(),
            genre: genre.map(Into::into),
        }
    }

    #[tokio::test]
    async fn first_game_in_empty_store_gets_id_one() {
        let store = MemoryGameStore::new();
        let created = store.create_game(new_game("Tetris", None)).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.genre, None);
    }

    #[tokio::test]
    async fn ids_follow_the_current_maximum() {
        let store = MemoryGameStore::seeded();
        store.delete_game(1).await.unwrap();

        let created = store
            .create_game(new_game("Metroid", Some("Action")))
            .await
            .unwrap();
        assert_eq!(created.id, 3);

        let ids: Vec<i64> = store
            .list_games()
            .await
            .unwrap()
            .iter()
            .map(|g| g.id)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn delete_returns_removed_record_once() {
        let store = MemoryGameStore::seeded();
        let removed = store.delete_game(2).await.unwrap().unwrap();
        assert_eq!(removed.title, "The Legend of Zelda");
        assert!(store.delete_game(2).await.unwrap().is_none());
        assert!(store.find_game(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_replaces_fields_and_keeps_id() {
        let store = MemoryGameStore::seeded();
        let updated = store
            .update_game(1, new_game("Super Mario Bros. 3", None))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.title, "Super Mario Bros. 3");
        assert_eq!(updated.genre, None);

        assert!(
            store
                .update_game(9999, new_game("Ghost", None))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn user_lookup_requires_both_fields() {
        let store = MemoryGameStore::seeded();
        let admin = store
            .find_user("admin".into(), "password123".into())
            .await
            .unwrap();
        assert_eq!(admin.map(|u| u.username), Some("admin".to_owned()));

        assert!(
            store
                .find_user("admin".into(), "wrong".into())
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            store
                .find_user("nobody".into(), "password123".into())
                .await
                .unwrap()
                .is_none()
        );
    }
}
