//! Palco — script interpretation.
//!
//! Turns raw authored scene text into an ordered, state-filtered sequence
//! of displayable lines and folds stage directives into the set of actors
//! currently on stage. Everything here is pure: no I/O, no shared state.

pub mod directive;
pub mod filter;
pub mod stage;
pub mod tokenizer;

pub use directive::{Conditional, Directive, StagePosition};
pub use filter::filter_visible;
pub use stage::{ActiveActors, apply_directives};
pub use tokenizer::{ParsedLine, tokenize};
