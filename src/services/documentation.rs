use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the Retro Game Inventory API.
#[openapi(
    info(
        title = "Retro Game Inventory API",
        version = "1.0.0",
        description = "Retro Game Inventory API documented with Swagger"
    ),
    paths(
        crate::routes::health::healthcheck,
        crate::routes::hello::hello,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::games::list_games,
        crate::routes::games::get_game,
        crate::routes::games::create_game,
        crate::routes::games::update_game,
        crate::routes::games::delete_game,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::auth::LoginRequest,
            crate::dto::auth::MessageResponse,
            crate::dto::game::Game,
            crate::dto::game::GameInput,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Session login and logout"),
        (name = "games", description = "Game inventory, requires a session cookie"),
    )
)]
pub struct ApiDoc;
