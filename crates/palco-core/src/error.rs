//! Domain error types.

use thiserror::Error;

use crate::scene::SceneId;

/// Top-level domain error type.
///
/// No variant here is fatal to the process: `SceneNotFound` and `Content`
/// are surfaced to the collaborator layer for user-visible messaging, the
/// rest are recovered locally by leaving state unchanged. Malformed script
/// directives are deliberately absent — they degrade to literal text inside
/// the tokenizer instead of failing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A scene id was looked up that the catalog does not contain.
    #[error("scene not found: {0}")]
    SceneNotFound(SceneId),

    /// `advance` or `choose` was called in a session state that does not
    /// permit it. The call is a no-op; the message records what was refused.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// A ballot was cast while no vote was open.
    #[error("vote is not open")]
    VoteClosed,

    /// A ballot named an option index outside the open vote's option list.
    #[error("option index {index} out of range for {option_count} options")]
    OptionOutOfRange {
        /// The rejected option index.
        index: usize,
        /// The number of options in the open vote.
        option_count: usize,
    },

    /// Authored content failed to load or is structurally unusable.
    #[error("content error: {0}")]
    Content(String),
}
