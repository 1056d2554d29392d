//! Scene catalog abstraction.

use crate::error::EngineError;
use crate::scene::Scene;

/// Read-only lookup of authored scenes.
///
/// The narrative session consumes the catalog through this seam; the
/// concrete in-memory implementation lives in `palco-content`.
pub trait SceneCatalog: Send + Sync {
    /// Returns the scene with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SceneNotFound`] when the catalog has no scene
    /// with that id.
    fn lookup(&self, scene_id: &str) -> Result<&Scene, EngineError>;
}
