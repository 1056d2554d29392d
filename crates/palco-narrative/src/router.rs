//! Automatic scene routing.

use palco_core::{GameState, RouteRule, SceneId};

/// Decides the next scene for a routing rule against a state snapshot.
///
/// Fires automatically whenever the owning scene becomes current; it is not
/// gated by user interaction and supersedes manual advancement.
#[must_use]
pub fn route_scene<'a>(rule: &'a RouteRule, state: &GameState) -> &'a SceneId {
    if state.get(&rule.variable) == rule.value {
        &rule.target_if_true
    } else {
        &rule.target_if_false
    }
}
