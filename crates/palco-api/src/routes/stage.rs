//! Routes driving the presenter screen.

use axum::extract::State;
use axum::{Json, Router, routing::get, routing::post};
use palco_core::SceneMedia;
use palco_narrative::{ChoicePrompt, NarrativeSession, Phase};
use palco_script::ActiveActors;
use palco_vote::VoteSession;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ApiError;
use crate::state::{AppState, open_vote_at_fork};

/// Request body for POST /choose.
#[derive(Debug, Deserialize)]
pub struct ChooseRequest {
    /// Index into the current scene's choice list (for a voted branch,
    /// the winning option index).
    pub choice_index: usize,
}

/// Presenter projection of the narrative and vote sessions.
#[derive(Debug, Serialize)]
pub struct StageView {
    /// Current scene id.
    pub scene_id: String,
    /// Cursor phase: `line`, `choice`, or `terminal`.
    pub phase: &'static str,
    /// Speaker of the line under the cursor.
    pub speaker: Option<String>,
    /// Text of the line under the cursor.
    pub text: Option<String>,
    /// Actors currently on stage.
    pub actors: ActiveActors,
    /// Scene media passthrough (background, actors at scene start).
    pub media: SceneMedia,
    /// Choice labels of the current scene.
    pub choices: Vec<String>,
    /// Affordance at a choice point: `continue` or `vote`.
    pub prompt: Option<&'static str>,
    /// Whether a vote is currently open.
    pub vote_open: bool,
    /// Live per-option totals while a vote is open.
    pub totals: Option<Vec<usize>>,
}

impl StageView {
    fn project(session: &NarrativeSession, vote: &VoteSession) -> Self {
        let line = session.current_line();
        Self {
            scene_id: session.scene_id().to_owned(),
            phase: match session.phase() {
                Phase::AtLine(_) => "line",
                Phase::AtChoice => "choice",
                Phase::Terminal => "terminal",
            },
            speaker: line.and_then(|l| l.speaker.clone()),
            text: line.map(|l| l.text.clone()),
            actors: session.actors().clone(),
            media: session.media().clone(),
            choices: session.choices().iter().map(|c| c.label.clone()).collect(),
            prompt: session.choice_prompt().map(|p| match p {
                ChoicePrompt::Continue => "continue",
                ChoicePrompt::Vote => "vote",
            }),
            vote_open: vote.is_open(),
            totals: vote.is_open().then(|| vote.tally()),
        }
    }
}

/// GET /view
async fn view(State(state): State<AppState>) -> Json<StageView> {
    let session = state.stage.lock().await;
    let vote = state.vote.lock().await;
    Json(StageView::project(&session, &vote))
}

/// POST /advance
///
/// Advances the dialogue cursor. Landing on a multi-option choice point
/// opens the audience vote over the choice labels.
#[instrument(skip(state))]
async fn advance(State(state): State<AppState>) -> Result<Json<StageView>, ApiError> {
    let mut session = state.stage.lock().await;
    let mut vote = state.vote.lock().await;

    session.advance()?;
    open_vote_at_fork(&session, &mut vote);

    Ok(Json(StageView::project(&session, &vote)))
}

/// POST /choose
///
/// Takes a choice and closes the vote that was open for it. A rejected
/// choice (no target, bad index) leaves both the session and the vote
/// untouched so the presenter can pick again.
#[instrument(skip(state, request), fields(choice_index = request.choice_index))]
async fn choose(
    State(state): State<AppState>,
    Json(request): Json<ChooseRequest>,
) -> Result<Json<StageView>, ApiError> {
    let mut session = state.stage.lock().await;
    let mut vote = state.vote.lock().await;

    match session.choose(request.choice_index) {
        Ok(()) => {
            vote.close();
            // The entered scene can itself stand at a voted fork when all
            // of its dialogue is filtered out.
            open_vote_at_fork(&session, &mut vote);
            Ok(Json(StageView::project(&session, &vote)))
        }
        Err(err) => {
            // A dangling target parks the session; the poll ends with it.
            if session.is_terminal() {
                vote.close();
            }
            Err(err.into())
        }
    }
}

/// Returns the router for the presenter screen.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/view", get(view))
        .route("/advance", post(advance))
        .route("/choose", post(choose))
}
