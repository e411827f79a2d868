use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;
use validator::Validate;

use crate::dao::models::{GameEntity, NewGameEntity};

/// A game as exposed by the REST API.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Game {
    /// Identifier assigned by the store.
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Super Mario Bros.")]
    pub title: String,
    /// Omitted when the game has no genre.
    #[schema(example = "Platformer")]
    pub genre: Option<String>,
}

impl From<GameEntity> for Game {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            genre: entity.genre,
        }
    }
}

/// Payload used to create a game or replace an existing one.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct GameInput {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "Metroid")]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    #[schema(example = "Action")]
    pub genre: Option<String>,
}

impl GameInput {
    /// Normalise whitespace; a blank genre counts as absent.
    pub fn into_entity(self) -> NewGameEntity {
        NewGameEntity {
            title: self.title.trim().to_owned(),
            genre: self
                .genre
                .map(|genre| genre.trim().to_owned())
                .filter(|genre| !genre.is_empty()),
        }
    }
}
