//! Palco — narrative orchestration.
//!
//! Owns the current scene, the state snapshot, and the dialogue cursor;
//! composes the script tokenizer, conditional filter, stage-direction
//! executor, and scene router into the advance/choose state machine that
//! drives the presenter screen.

pub mod router;
pub mod session;

pub use router::route_scene;
pub use session::{ChoicePrompt, NarrativeSession, Phase};
