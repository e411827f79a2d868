use axum::{Router, routing::get};

use crate::state::SharedState;

/// Returns a Hello World greeting to verify the API is up.
#[utoipa::path(
    get,
    path = "/hello",
    responses((status = 200, description = "A successful response", body = String, content_type = "text/plain"))
)]
pub async fn hello() -> &'static str {
    "Hello World"
}

/// Greeting route used as a liveness smoke test.
pub fn router() -> Router<SharedState> {
    Router::new().route("/hello", get(hello))
}
