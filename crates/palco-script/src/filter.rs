//! Conditional visibility filter.
//!
//! Single pass, single level: conditional blocks do not nest. A second
//! `IF` before an `ENDIF` overwrites the toggle rather than pushing a
//! stack frame — the authored corpus relies on that flat behavior.

use palco_core::GameState;

use crate::directive::Conditional;
use crate::tokenizer::ParsedLine;

/// Filters a tokenized line sequence against a state snapshot, removing
/// all control lines and every content line inside a failed branch.
///
/// State is read once per pass: a mid-scene mutation only affects the next
/// scene's filtering, because state changes only happen between scenes.
#[must_use]
pub fn filter_visible(lines: &[ParsedLine], state: &GameState) -> Vec<ParsedLine> {
    let mut skipping = false;
    let mut visible = Vec::with_capacity(lines.len());
    for line in lines {
        match &line.conditional {
            Some(Conditional::If { variable, value }) => skipping = state.get(variable) != value,
            Some(Conditional::Else) => skipping = !skipping,
            Some(Conditional::Endif) => skipping = false,
            None => {
                if !skipping {
                    visible.push(line.clone());
                }
            }
        }
    }
    visible
}
