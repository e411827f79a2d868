use sqlx::FromRow;

use crate::dao::models::{GameEntity, UserEntity};

pub const CREATE_GAMES_TABLE: &str = "CREATE TABLE IF NOT EXISTS games (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    genre TEXT
)";

pub const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)";

#[derive(Debug, FromRow)]
pub struct GameRow {
    pub id: i64,
    pub title: String,
    pub genre: Option<String>,
}

impl From<GameRow> for GameEntity {
    fn from(row: GameRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            genre: row.genre,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
}

impl From<UserRow> for UserEntity {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
        }
    }
}
