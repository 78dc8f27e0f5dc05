use axum::{Router, http::HeaderValue, http::Method, routing::get};
use configuration::{CorsSettings, Settings};
use database::{DbRepository, PokedexSource};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod extract;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PokedexSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn PokedexSource>) -> Self {
        Self { source }
    }
}

/// Builds the CORS layer. An empty origin list, or one containing `*`,
/// allows any origin.
pub fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let any = settings.allowed_origins.is_empty()
        || settings.allowed_origins.iter().any(|origin| origin == "*");
    let origins = if any {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = settings
            .allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(%origin, error = %e, "Ignoring invalid CORS origin.");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
}

/// Defines every route of the API on top of the given state.
pub fn build_router(state: AppState, cors: &CorsSettings) -> Router {
    Router::new()
        .route("/", get(handlers::list_pokemon))
        .route("/api/pokemon/", get(handlers::list_pokemon))
        .route("/api/pokemon/:pokemon_id/", get(handlers::get_pokemon))
        .route("/api/team-pokemon-moves/", get(handlers::list_team_pokemon_moves))
        .route("/api/pokemon-evolutions/", get(handlers::list_pokemon_evolutions))
        .route("/api/raid-boss-details/", get(handlers::list_raid_boss_details))
        // Slashless spellings redirect to the canonical paths above.
        .route("/api/pokemon", get(handlers::append_slash))
        .route("/api/pokemon/:pokemon_id", get(handlers::append_slash_to_pokemon))
        .route("/api/team-pokemon-moves", get(handlers::append_slash))
        .route("/api/pokemon-evolutions", get(handlers::append_slash))
        .route("/api/raid-boss-details", get(handlers::append_slash))
        .fallback(handlers::not_found)
        .with_state(Arc::new(state))
        .layer(cors_layer(cors))
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Connects the pool, serves HTTP until a shutdown signal, then closes the pool.
pub async fn run_server(settings: &Settings) -> anyhow::Result<()> {
    let db_pool = database::connect(&settings.database).await?;
    let db_repo = DbRepository::new(db_pool);

    let app = build_router(AppState::new(Arc::new(db_repo.clone())), &settings.cors);

    let addr = settings.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped; closing the database pool.");
    db_repo.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C.");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM.");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received.");
}
