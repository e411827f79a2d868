//! Error types raised by the SQLite storage implementation.

use thiserror::Error;

use crate::dao::storage::StorageError;

/// Convenient result alias returning [`SqliteDaoError`] failures.
pub type SqliteResult<T> = Result<T, SqliteDaoError>;

/// Failures that can occur while talking to SQLite.
#[derive(Debug, Error)]
pub enum SqliteDaoError {
    /// The database could not be opened.
    #[error("failed to open SQLite database `{url}`")]
    Connect {
        /// Connection URL that was tried.
        url: String,
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// Creating a table failed.
    #[error("failed to create table `{table}`")]
    CreateTable {
        /// Table being prepared.
        table: &'static str,
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// Inserting the start-up rows failed.
    #[error("failed to seed table `{table}`")]
    Seed {
        /// Table being prepared.
        table: &'static str,
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// Reading the whole `games` table failed.
    #[error("failed to list games")]
    ListGames {
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// Fetching one game by id failed.
    #[error("failed to load game `{id}`")]
    LoadGame {
        /// Game the statement targeted.
        id: i64,
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// Inserting a new game failed.
    #[error("failed to insert game")]
    InsertGame {
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// Rewriting a game failed.
    #[error("failed to update game `{id}`")]
    UpdateGame {
        /// Game the statement targeted.
        id: i64,
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// Removing a game failed.
    #[error("failed to delete game `{id}`")]
    DeleteGame {
        /// Game the statement targeted.
        id: i64,
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// The credentials lookup failed.
    #[error("failed to look up user `{username}`")]
    LoadUser {
        /// Username that was looked up; the password is never recorded.
        username: String,
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
    /// `SELECT 1` did not go through.
    #[error("SQLite health check failed")]
    HealthCheck {
        /// Driver error.
        #[source]
        source: sqlx::Error,
    },
}

impl From<SqliteDaoError> for StorageError {
    fn from(err: SqliteDaoError) -> Self {
        StorageError::unavailable(err.to_string(), err)
    }
}
