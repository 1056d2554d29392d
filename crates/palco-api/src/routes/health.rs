//! Liveness endpoint for the venue front-of-house checks.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Snapshot returned by GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Scene the narrative session currently stands in.
    pub scene_id: String,
    /// Whether an audience vote is running right now.
    pub vote_open: bool,
}

/// GET /health
///
/// Reports liveness plus enough of the show state to eyeball a deploy:
/// which scene the session is parked in and whether a poll is open.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let session = state.stage.lock().await;
    let vote = state.vote.lock().await;
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        scene_id: session.scene_id().to_owned(),
        vote_open: vote.is_open(),
    })
}

/// Returns the liveness router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
