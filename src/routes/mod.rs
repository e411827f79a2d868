use axum::Router;

use crate::state::SharedState;

pub mod auth;
pub mod cookie;
pub mod docs;
pub mod extract;
pub mod games;
pub mod health;
pub mod hello;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(hello::router())
        .merge(auth::router())
        .merge(games::router(state.clone()));

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
