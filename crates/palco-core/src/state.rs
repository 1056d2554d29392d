//! Mutable narrative state.

use std::collections::HashMap;

use crate::scene::StateChange;

/// String-keyed, string-valued narrative state.
///
/// Mutated only by applying a choice's [`StateChange`]; persists across
/// scene transitions for the lifetime of a session and nowhere else.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    values: HashMap<String, String>,
}

impl GameState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `variable`, or the empty string when unset.
    ///
    /// Missing-as-empty keeps conditional and routing comparisons total.
    #[must_use]
    pub fn get(&self, variable: &str) -> &str {
        self.values.get(variable).map_or("", String::as_str)
    }

    /// Applies a choice's state mutation, overwriting any prior value of
    /// the same variable.
    pub fn apply(&mut self, change: &StateChange) {
        self.values
            .insert(change.variable.clone(), change.value.clone());
    }
}
