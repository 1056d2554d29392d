//! Authored scene model.
//!
//! Scenes are immutable once loaded from the authored catalog. The catalog
//! document is an object mapping scene id to scene, so the id lives in the
//! map key rather than in the scene body.

use serde::{Deserialize, Serialize};

/// Identifier of one authored scene (the catalog map key).
pub type SceneId = String;

/// One authored unit of narrative content plus its branching metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Raw script text; tokenized on every scene entry.
    pub text: String,
    /// Presentation passthrough (background image, actors at scene start).
    #[serde(default)]
    pub media: SceneMedia,
    /// Branching options. Zero = terminal, one = continue step, two or
    /// more = audience vote.
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Automatic routing rule; supersedes manual advancement when present.
    #[serde(default)]
    pub route: Option<RouteRule>,
}

/// Media references attached to a scene. Not interpreted by the core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneMedia {
    /// Background image id.
    #[serde(default)]
    pub background: Option<String>,
    /// Actor ids present when the scene opens, in authored order.
    #[serde(default)]
    pub actors: Vec<String>,
}

/// One branching option presented at the end of a scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Display label, also used as the vote option label.
    pub label: String,
    /// State mutation applied when this choice is taken.
    #[serde(default)]
    pub state_change: Option<StateChange>,
    /// Scene entered when this choice is taken. A choice without a target
    /// cannot be taken.
    #[serde(default)]
    pub target: Option<SceneId>,
}

/// A single variable assignment carried by a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateChange {
    /// Variable name.
    pub variable: String,
    /// New value (string-typed; comparisons are string equality).
    pub value: String,
}

/// Automatic scene routing rule, evaluated whenever the owning scene
/// becomes current.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRule {
    /// Variable to test.
    pub variable: String,
    /// Value to compare against.
    pub value: String,
    /// Scene entered when the variable equals the value.
    pub target_if_true: SceneId,
    /// Scene entered otherwise.
    pub target_if_false: SceneId,
}
