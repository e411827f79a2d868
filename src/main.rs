//! Retro Game Inventory binary entrypoint wiring storage, sessions and the REST API.

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use retro_game_inventory::{
    config::{AppConfig, StorageKind},
    dao::game_store::{GameStore, memory::MemoryGameStore},
    routes,
    services::session_sweeper,
    state::{AppState, SharedState},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load();
    let store = open_store(&config).await?;
    let port = config.port;

    let app_state = AppState::new(store, config);
    tokio::spawn(session_sweeper::run(app_state.clone()));

    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "starting server");
    info!("Swagger docs available at http://localhost:{port}/api-docs");

    let listener = TcpListener::bind(addr).await.context("binding server")?;
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving axum")?;

    Ok(())
}

/// Instantiate the configured persistence backend.
async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn GameStore>> {
    match config.storage {
        StorageKind::Memory => {
            info!("using in-memory storage; data is lost on restart");
            Ok(Arc::new(MemoryGameStore::seeded()))
        }
        #[cfg(feature = "sqlite-store")]
        StorageKind::Sqlite => {
            use retro_game_inventory::dao::game_store::sqlite::{SqliteConfig, SqliteGameStore};

            let store = SqliteGameStore::connect(SqliteConfig::new(config.database_url.clone()))
                .await
                .context("opening SQLite database")?;
            info!(url = %config.database_url, "connected to SQLite");
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "sqlite-store"))]
        StorageKind::Sqlite => {
            anyhow::bail!("SQLite storage requested but the `sqlite-store` feature is disabled")
        }
    }
}

/// Build the top-level router and attach cross-cutting middleware layers.
///
/// CORS mirrors the caller's origin and allows credentials so the admin panel
/// can send its session cookie from another origin.
fn build_router(state: SharedState) -> Router<()> {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Configure tracing subscribers so logs include spans by default.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=debug".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wait for Ctrl+C or SIGTERM and shut the server down gracefully.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut term = signal(SignalKind::terminate()).expect("install SIGTERM handler");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {},
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
