//! Palco API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use palco_content::InMemoryCatalog;
use palco_narrative::NarrativeSession;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use palco_api::{routes, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting palco API server");

    // Read configuration from environment.
    let content_path = std::env::var("CONTENT_PATH")
        .map_err(|_| "CONTENT_PATH environment variable must be set")?;
    let start_scene =
        std::env::var("START_SCENE").map_err(|_| "START_SCENE environment variable must be set")?;
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse()
        .map_err(|e| format!("PORT must be a valid u16: {e}"))?;

    // Load the authored catalog; dangling branch targets are authoring
    // mistakes worth surfacing but not refusing to run over.
    let catalog = InMemoryCatalog::load(Path::new(&content_path))?;
    for issue in catalog.dangling_references() {
        tracing::warn!(%issue, "dangling reference in catalog");
    }

    let session = NarrativeSession::start(Arc::new(catalog), &start_scene)?;
    let app_state = state::AppState::new(session);

    // Build router. Voters connect from arbitrary phone origins on the
    // venue network, so CORS stays permissive.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/stage", routes::stage::router())
        .nest("/api/v1/vote", routes::vote::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
