pub mod memory;
#[cfg(feature = "sqlite-store")]
pub mod sqlite;

use crate::dao::models::{GameEntity, NewGameEntity, UserEntity};
use crate::dao::storage::StorageResult;
use futures::future::BoxFuture;

/// Abstraction over the persistence layer for games and administrator accounts.
///
/// Every call is atomic on its own; concurrent writers on the same id resolve
/// as last-writer-wins.
pub trait GameStore: Send + Sync {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>>;
    fn find_game(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    fn create_game(&self, game: NewGameEntity) -> BoxFuture<'static, StorageResult<GameEntity>>;
    fn update_game(
        &self,
        id: i64,
        game: NewGameEntity,
    ) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    fn delete_game(&self, id: i64) -> BoxFuture<'static, StorageResult<Option<GameEntity>>>;
    fn find_user(
        &self,
        username: String,
        password: String,
    ) -> BoxFuture<'static, StorageResult<Option<UserEntity>>>;
    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>>;
}
