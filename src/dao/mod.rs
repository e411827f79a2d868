/// Game and user persistence backends.
pub mod game_store;
/// Persisted record definitions.
pub mod models;
/// Storage abstraction layer shared by every backend.
pub mod storage;
