use axum::{
    Extension, Json, Router,
    body::Body,
    extract::{Path, State},
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use axum_extra::extract::CookieJar;
use validator::Validate;

use crate::{
    dto::game::{Game, GameInput},
    error::AppError,
    routes::{cookie, extract::AppJson},
    services::{auth_service, game_service},
    state::{SessionUser, SharedState},
};

/// Game inventory endpoints, all behind the session gate.
pub fn router(state: SharedState) -> Router<SharedState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route(
            "/games/{id}",
            get(get_game).put(update_game).delete(delete_game),
        )
        .route_layer(middleware::from_fn_with_state(state, require_session))
}

/// List every game in the inventory.
#[utoipa::path(
    get,
    path = "/games",
    tag = "games",
    responses(
        (status = 200, description = "All games", body = [Game]),
        (status = 401, description = "No active session")
    )
)]
pub async fn list_games(State(state): State<SharedState>) -> Result<Json<Vec<Game>>, AppError> {
    Ok(Json(game_service::list_games(&state).await?))
}

/// Fetch a single game.
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "games",
    params(("id" = i64, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "The game", body = Game),
        (status = 401, description = "No active session"),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<i64>,
) -> Result<Json<Game>, AppError> {
    Ok(Json(game_service::get_game(&state, id).await?))
}

/// Add a game; the identifier is assigned by the store.
#[utoipa::path(
    post,
    path = "/games",
    tag = "games",
    request_body = GameInput,
    responses(
        (status = 201, description = "Game created", body = Game),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "No active session")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    Extension(user): Extension<SessionUser>,
    AppJson(payload): AppJson<GameInput>,
) -> Result<(StatusCode, Json<Game>), AppError> {
    payload.validate()?;
    let game = game_service::create_game(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// Replace the title and genre of a game.
#[utoipa::path(
    put,
    path = "/games/{id}",
    tag = "games",
    params(("id" = i64, Path, description = "Identifier of the game")),
    request_body = GameInput,
    responses(
        (status = 200, description = "Game updated", body = Game),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "No active session"),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    Extension(user): Extension<SessionUser>,
    Path(id): Path<i64>,
    AppJson(payload): AppJson<GameInput>,
) -> Result<Json<Game>, AppError> {
    payload.validate()?;
    Ok(Json(
        game_service::update_game(&state, &user, id, payload).await?,
    ))
}

/// Remove a game, returning the deleted record.
#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = "games",
    params(("id" = i64, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Game deleted", body = Game),
        (status = 401, description = "No active session"),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    Extension(user): Extension<SessionUser>,
    Path(id): Path<i64>,
) -> Result<Json<Game>, AppError> {
    Ok(Json(game_service::delete_game(&state, &user, id).await?))
}

async fn require_session(
    State(state): State<SharedState>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = cookie::session_token(&jar, &state.config().session_cookie_name);
    let user = auth_service::authenticate(&state, token.as_deref())?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}
