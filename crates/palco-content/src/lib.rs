//! Palco — authored content.
//!
//! Loads the compiled story catalog (a JSON object mapping scene id to
//! scene, as emitted by the authoring pipeline) into an in-memory
//! [`SceneCatalog`] and reports dangling branch targets.

pub mod catalog;

pub use catalog::InMemoryCatalog;
