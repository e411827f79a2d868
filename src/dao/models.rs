use serde::{Deserialize, Serialize};

/// A game row as persisted in the `games` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameEntity {
    /// Primary key, assigned by the store on creation.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Optional genre label.
    pub genre: Option<String>,
}

/// Mutable fields of a game, used for both creation and replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGameEntity {
    pub title: String,
    pub genre: Option<String>,
}

impl NewGameEntity {
    /// Attach an identifier, producing the persisted representation.
    pub fn with_id(self, id: i64) -> GameEntity {
        GameEntity {
            id,
            title: self.title,
            genre: self.genre,
        }
    }
}

/// An administrator account as persisted in the `users` table.
///
/// The password never leaves the store; lookups compare it in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserEntity {
    pub id: i64,
    pub username: String,
}

/// Rows inserted into an empty `games` table on first start-up.
pub const SEED_GAMES: [(&str, &str); 2] = [
    ("Super Mario Bros.", "Platformer"),
    ("The Legend of Zelda", "Action-adventure"),
];

/// Accounts inserted into an empty `users` table on first start-up.
pub const SEED_USERS: [(&str, &str); 2] = [("admin", "password123"), ("guest", "guest123")];
