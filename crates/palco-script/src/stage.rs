//! Stage-direction executor.

use std::collections::BTreeMap;

use crate::directive::{Directive, StagePosition};

/// The actors currently on stage, keyed by actor id.
///
/// An ordered map keeps presentation snapshots stable across calls.
pub type ActiveActors = BTreeMap<String, StagePosition>;

/// Folds one line's directives into the on-stage actor set.
///
/// Pure: the caller replaces its stored mapping with the returned one.
/// Directives accumulate across a scene; the session clears the mapping on
/// every scene change.
#[must_use]
pub fn apply_directives(current: &ActiveActors, directives: &[Directive]) -> ActiveActors {
    let mut next = current.clone();
    for directive in directives {
        match directive {
            Directive::SceneStart { actor, position } | Directive::Show { actor, position } => {
                next.insert(actor.clone(), *position);
            }
            Directive::Hide { actor } => {
                next.remove(actor);
            }
            // Reserved hooks; interpreted by a collaborator, not here.
            Directive::Opaque { .. } => {}
        }
    }
    next
}
