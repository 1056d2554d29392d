//! Tagged directive variants.
//!
//! The authored syntax embeds `{{TYPE}}` / `{{TYPE: ARGS}}` instructions in
//! scene text. They split into two disjoint roles: stage directives, which
//! the executor folds into the on-stage actor set, and conditionals, which
//! the filter consumes. A line carrying a conditional is a control line and
//! never reaches the visible sequence.

use serde::Serialize;

/// Where an actor stands on the projected stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StagePosition {
    /// Stage left.
    Left,
    /// Stage right.
    Right,
    /// Center stage (the default when no position is authored).
    #[default]
    Center,
}

impl StagePosition {
    /// Parses an authored position tag. Unknown tags fall back to center
    /// rather than failing — tokenization is total.
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag.trim() {
            "left" => Self::Left,
            "right" => Self::Right,
            _ => Self::Center,
        }
    }
}

/// A stage directive extracted from a script line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Directive {
    /// Puts an actor on stage as part of the scene opening.
    SceneStart {
        /// Actor id.
        actor: String,
        /// Stage position.
        position: StagePosition,
    },
    /// Puts an actor on stage, overwriting its position if already present.
    Show {
        /// Actor id.
        actor: String,
        /// Stage position.
        position: StagePosition,
    },
    /// Removes an actor from stage; a no-op when the actor is absent.
    Hide {
        /// Actor id.
        actor: String,
    },
    /// Reserved hooks (`IA_CONTEXT`, `IA_PROMPT`) carried through
    /// uninterpreted for a future collaborator.
    Opaque {
        /// The directive tag as authored.
        kind: String,
        /// The raw argument string.
        args: String,
    },
}

/// A conditional-visibility directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Conditional {
    /// Keeps subsequent lines only when `variable` equals `value`.
    If {
        /// Variable to test (missing reads as the empty string).
        variable: String,
        /// Value compared with string equality.
        value: String,
    },
    /// Inverts the current skip-mode.
    Else,
    /// Resets skip-mode to kept.
    Endif,
}
