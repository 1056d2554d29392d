//! Shared application state.

use std::sync::Arc;

use palco_narrative::{ChoicePrompt, NarrativeSession};
use palco_vote::VoteSession;
use tokio::sync::Mutex;

/// Application state shared across all request handlers.
///
/// Both sessions are single-writer values; the mutexes serialize the
/// presenter's and the voters' concurrent calls. Handlers that need both
/// always lock the stage first.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The presenter-driven narrative session.
    pub stage: Arc<Mutex<NarrativeSession>>,
    /// The process-wide vote session.
    pub vote: Arc<Mutex<VoteSession>>,
}

impl AppState {
    /// Creates application state around a started narrative session.
    ///
    /// A start scene can stand at a multi-option choice point right away
    /// (everything before the fork filtered out), so the vote session is
    /// synchronized here too, not just on advance.
    #[must_use]
    pub fn new(session: NarrativeSession) -> Self {
        let mut vote = VoteSession::new();
        open_vote_at_fork(&session, &mut vote);
        Self {
            stage: Arc::new(Mutex::new(session)),
            vote: Arc::new(Mutex::new(vote)),
        }
    }
}

/// Opens the audience vote over the choice labels when the session stands
/// at a multi-option choice point.
///
/// Entering `AtChoice` on a voted fork and opening the poll go together,
/// whatever path led there: a cursor advance, a choice into a scene whose
/// dialogue is fully filtered out, or session startup.
pub fn open_vote_at_fork(session: &NarrativeSession, vote: &mut VoteSession) {
    if session.choice_prompt() == Some(ChoicePrompt::Vote) && !vote.is_open() {
        let options = session.choices().iter().map(|c| c.label.clone()).collect();
        vote.open(options);
    }
}
