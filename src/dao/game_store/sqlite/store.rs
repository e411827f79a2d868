use futures::future::BoxFuture;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use tracing::info;

use crate::dao::{
    game_store::GameStore,
    models::{GameEntity, NewGameEntity, SEED_GAMES, SEED_USERS, UserEntity},
    storage::StorageResult,
};

use super::{
    config::SqliteConfig,
    error::{SqliteDaoError, SqliteResult},
    models::{CREATE_GAMES_TABLE, CREATE_USERS_TABLE, GameRow, UserRow},
};

const SELECT_GAMES: &str = "SELECT id, title, genre FROM games ORDER BY id";
const SELECT_GAME: &str = "SELECT id, title, genre FROM games WHERE id = ?";
const INSERT_GAME: &str = "INSERT INTO games (id, title, genre) \
     VALUES ((SELECT COALESCE(MAX(id), 0) + 1 FROM games), ?, ?) \
     RETURNING id, title, genre";
const UPDATE_GAME: &str =
    "UPDATE games SET title = ?, genre = ? WHERE id = ? RETURNING id, title, genre";
const DELETE_GAME: &str = "DELETE FROM games WHERE id = ? RETURNING id, title, genre";
const SELECT_USER: &str = "SELECT id, username FROM users WHERE username = ? AND password = ?";

/// Game store persisting into the `games` and `users` tables of a SQLite file.
#[derive(Clone)]
pub struct SqliteGameStore {
    pool: SqlitePool,
}

impl SqliteGameStore {
    /// Open the database, create missing tables and seed empty ones.
    pub async fn connect(config: SqliteConfig) -> SqliteResult<Self> {
        let mut options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout);
        if config.is_in_memory() {
            // Dropping the only connection would drop the whole database.
            options = options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = options
            .connect(&config.url)
            .await
            .map_err(|source| SqliteDaoError::Connect {
                url: config.url.clone(),
                source,
            })?;

        let store = Self { pool };
        store.ensure_schema().await?;
        store.seed().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> SqliteResult<()> {
        for (table, ddl) in [("games", CREATE_GAMES_TABLE), ("users", CREATE_USERS_TABLE)] {
            sqlx::query(ddl)
                .execute(&self.pool)
                .await
                .map_err(|source| SqliteDaoError::CreateTable { table, source })?;
        }
        Ok(())
    }

    async fn seed(&self) -> SqliteResult<()> {
        if self.is_empty("games").await? {
            for (title, genre) in SEED_GAMES {
                sqlx::query("INSERT INTO games (title, genre) VALUES (?, ?)")
                    .bind(title)
                    .bind(genre)
                    .execute(&self.pool)
                    .await
                    .map_err(|source| SqliteDaoError::Seed {
                        table: "games",
                        source,
                    })?;
            }
            info!(count = SEED_GAMES.len(), "seeded games table");
        }

        if self.is_empty("users").await? {
            for (username, password) in SEED_USERS {
                sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
                    .bind(username)
                    .bind(password)
                    .execute(&self.pool)
                    .await
                    .map_err(|source| SqliteDaoError::Seed {
                        table: "users",
                        source,
                    })?;
            }
            info!(count = SEED_USERS.len(), "seeded users table");
        }

        Ok(())
    }

    async fn is_empty(&self, table: &'static str) -> SqliteResult<bool> {
        // `table` only ever comes from the literals above.
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .map_err(|source| SqliteDaoError::Seed { table, source })?;
        Ok(count == 0)
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl GameStore for SqliteGameStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let rows = sqlx::query_as::<_, GameRow>(SELECT_GAMES)
                .fetch_all(&pool)
                .await
                .map_err(|source| SqliteDaoError::ListGames { source })?;
            Ok(rows.into_iter().map(Into::into).collect())
        })
    }

    fn find_game(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let row = sqlx::query_as::<_, GameRow>(SELECT_GAME)
                .bind(id)
                .fetch_optional(&pool)
                .await
                .map_err(|source| SqliteDaoError::LoadGame { id, source })?;
            Ok(row.map(Into::into))
        })
    }

    fn create_game(&self, game: NewGameEntity) -> BoxFuture<'static, StorageResult<GameEntity>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let row = sqlx::query_as::<_, GameRow>(INSERT_GAME)
                .bind(game.title)
                .bind(game.genre)
                .fetch_one(&pool)
                .await
                .map_err(|source| SqliteDaoError::InsertGame { source })?;
            Ok(row.into())
        })
    }

    fn update_game(
        &self,
        id: i64,
        game: NewGameEntity,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let row = sqlx::query_as::<_, GameRow>(UPDATE_GAME)
                .bind(game.title)
                .bind(game.genre)
                .bind(id)
                .fetch_optional(&pool)
                .await
                .map_err(|source| SqliteDaoError::UpdateGame { id, source })?;
            Ok(row.map(Into::into))
        })
    }

    fn delete_game(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<GameEntity>>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let row = sqlx::query_as::<_, GameRow>(DELETE_GAME)
                .bind(id)
                .fetch_optional(&pool)
                .await
                .map_err(|source| SqliteDaoError::DeleteGame { id, source })?;
            Ok(row.map(Into::into))
        })
    }

    fn find_user(
        &self,
        username: String,
        password: String,
    ) -> BoxFuture<'static, StorageResult<Option<UserEntity>>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            let row = sqlx::query_as::<_, UserRow>(SELECT_USER)
                .bind(username.clone())
                .bind(password)
                .fetch_optional(&pool)
                .await
                .map_err(|source| SqliteDaoError::LoadUser { username, source })?;
            Ok(row.map(Into::into))
        })
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        let pool = self.pool.clone();
        Box::pin(async move {
            sqlx::query("SELECT 1")
                .execute(&pool)
                .await
                .map_err(|source| SqliteDaoError::HealthCheck { source })?;
            Ok(())
        })
    }
}
