//! Shared fixtures for palco tests.

use std::collections::HashMap;
use std::sync::Arc;

use palco_content::InMemoryCatalog;
use palco_core::{Choice, Scene, SceneMedia, StateChange};

/// A scene with the given script text and no choices (terminal).
#[must_use]
pub fn scene(text: &str) -> Scene {
    Scene {
        text: text.to_owned(),
        media: SceneMedia::default(),
        choices: Vec::new(),
        route: None,
    }
}

/// A scene with the given script text and choices.
#[must_use]
pub fn scene_with(text: &str, choices: Vec<Choice>) -> Scene {
    Scene {
        choices,
        ..scene(text)
    }
}

/// A choice without a state mutation.
#[must_use]
pub fn choice(label: &str, target: Option<&str>) -> Choice {
    Choice {
        label: label.to_owned(),
        state_change: None,
        target: target.map(str::to_owned),
    }
}

/// A choice that sets `variable` to `value` when taken.
#[must_use]
pub fn choice_setting(label: &str, target: &str, variable: &str, value: &str) -> Choice {
    Choice {
        label: label.to_owned(),
        state_change: Some(StateChange {
            variable: variable.to_owned(),
            value: value.to_owned(),
        }),
        target: Some(target.to_owned()),
    }
}

/// Builds a shared in-memory catalog from `(id, scene)` pairs.
#[must_use]
pub fn catalog(scenes: Vec<(&str, Scene)>) -> Arc<InMemoryCatalog> {
    let scenes: HashMap<_, _> = scenes
        .into_iter()
        .map(|(id, scene)| (id.to_owned(), scene))
        .collect();
    Arc::new(InMemoryCatalog::new(scenes))
}
