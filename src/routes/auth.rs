use axum::{Json, Router, extract::State, routing::post};
use axum_extra::extract::CookieJar;

use crate::{
    dto::auth::{LoginRequest, MessageResponse},
    error::AppError,
    routes::{cookie, extract::AppJson},
    services::auth_service,
    state::SharedState,
};

/// Session login and logout.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
}

/// Exchange credentials for a session cookie.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in; session cookie set", body = MessageResponse),
        (status = 400, description = "Malformed credentials payload", body = MessageResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse)
    )
)]
pub async fn login(
    State(state): State<SharedState>,
    jar: CookieJar,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    let session = auth_service::login(&state, payload).await?;
    Ok((
        cookie::issue(jar, state.config(), session.id),
        Json(MessageResponse::new("Login successful")),
    ))
}

/// Destroy the current session, if any.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    responses((status = 200, description = "Logged out; session cookie cleared", body = MessageResponse))
)]
pub async fn logout(
    State(state): State<SharedState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let token = cookie::session_token(&jar, &state.config().session_cookie_name);
    auth_service::logout(&state, token.as_deref());
    (
        cookie::clear(jar, state.config()),
        Json(MessageResponse::new("Logout successful")),
    )
}
