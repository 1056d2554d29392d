//! Routes serving the voters' phones.

use axum::extract::State;
use axum::{Json, Router, routing::get, routing::post};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /cast.
#[derive(Debug, Deserialize)]
pub struct CastRequest {
    /// The voter's connection id; a repeated cast from the same id revises
    /// the earlier ballot.
    pub voter_id: String,
    /// The chosen option index.
    pub option_index: usize,
}

/// Snapshot handed to newly connected voters.
#[derive(Debug, Serialize)]
pub struct VoteStateResponse {
    /// Whether a vote is in progress.
    pub is_open: bool,
    /// Option labels of the current (or most recent) vote.
    pub options: Vec<String>,
}

/// Per-option totals plus the poll status.
#[derive(Debug, Serialize)]
pub struct TallyResponse {
    /// Whether a vote is in progress.
    pub is_open: bool,
    /// Option labels, index-aligned with `totals`.
    pub options: Vec<String>,
    /// Ballot count per option.
    pub totals: Vec<usize>,
}

/// GET /state
async fn vote_state(State(state): State<AppState>) -> Json<VoteStateResponse> {
    let vote = state.vote.lock().await;
    Json(VoteStateResponse {
        is_open: vote.is_open(),
        options: vote.options().to_vec(),
    })
}

/// POST /cast
///
/// Records (or revises) one ballot and returns the live totals.
#[instrument(skip(state, request), fields(voter_id = %request.voter_id))]
async fn cast(
    State(state): State<AppState>,
    Json(request): Json<CastRequest>,
) -> Result<Json<TallyResponse>, ApiError> {
    let mut vote = state.vote.lock().await;

    vote.cast(&request.voter_id, request.option_index)?;

    Ok(Json(TallyResponse {
        is_open: vote.is_open(),
        options: vote.options().to_vec(),
        totals: vote.tally(),
    }))
}

/// GET /tally
async fn tally(State(state): State<AppState>) -> Json<TallyResponse> {
    let vote = state.vote.lock().await;
    Json(TallyResponse {
        is_open: vote.is_open(),
        options: vote.options().to_vec(),
        totals: vote.tally(),
    })
}

/// Returns the router for the voter transport.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/state", get(vote_state))
        .route("/cast", post(cast))
        .route("/tally", get(tally))
}
