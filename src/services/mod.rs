/// Credential checks and session lifecycle.
pub mod auth_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Game inventory operations.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Background eviction of expired sessions.
pub mod session_sweeper;
