//! Palco Core — shared domain types.
//!
//! This crate defines the authored-content data model, the mutable
//! narrative state, and the error taxonomy that all other crates depend
//! on. It contains no parsing or transport code.

pub mod catalog;
pub mod error;
pub mod scene;
pub mod state;

pub use catalog::SceneCatalog;
pub use error::EngineError;
pub use scene::{Choice, RouteRule, Scene, SceneId, SceneMedia, StateChange};
pub use state::GameState;
