//! In-memory scene catalog.

use std::collections::HashMap;
use std::path::Path;

use palco_core::{EngineError, Scene, SceneCatalog, SceneId};

/// The full authored catalog, loaded once at startup and immutable after.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    scenes: HashMap<SceneId, Scene>,
}

impl InMemoryCatalog {
    /// Builds a catalog from already-constructed scenes.
    #[must_use]
    pub fn new(scenes: HashMap<SceneId, Scene>) -> Self {
        Self { scenes }
    }

    /// Parses a catalog from the authored JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Content`] when the document is not valid
    /// JSON of the expected shape.
    pub fn from_json_str(document: &str) -> Result<Self, EngineError> {
        let scenes: HashMap<SceneId, Scene> = serde_json::from_str(document)
            .map_err(|e| EngineError::Content(format!("catalog parse failed: {e}")))?;
        Ok(Self { scenes })
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Content`] when the file cannot be read or
    /// parsed.
    pub fn load(path: &Path) -> Result<Self, EngineError> {
        let document = std::fs::read_to_string(path).map_err(|e| {
            EngineError::Content(format!("cannot read catalog {}: {e}", path.display()))
        })?;
        let catalog = Self::from_json_str(&document)?;
        tracing::info!(path = %path.display(), scenes = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The number of scenes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Lists dangling references: choice targets and routing targets that
    /// name scenes the catalog does not contain.
    ///
    /// Authoring mistakes, not fatal ones — startup logs these as warnings
    /// and the affected lookups fail at runtime with `SceneNotFound`.
    #[must_use]
    pub fn dangling_references(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let mut check = |scene_id: &str, role: &str, target: &str| {
            if !self.scenes.contains_key(target) {
                issues.push(format!("scene {scene_id}: {role} target {target} does not exist"));
            }
        };
        for (scene_id, scene) in &self.scenes {
            for choice in &scene.choices {
                if let Some(target) = &choice.target {
                    check(scene_id, "choice", target);
                }
            }
            if let Some(rule) = &scene.route {
                check(scene_id, "route", &rule.target_if_true);
                check(scene_id, "route", &rule.target_if_false);
            }
        }
        issues.sort();
        issues
    }
}

impl SceneCatalog for InMemoryCatalog {
    fn lookup(&self, scene_id: &str) -> Result<&Scene, EngineError> {
        self.scenes
            .get(scene_id)
            .ok_or_else(|| EngineError::SceneNotFound(scene_id.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "opening": {
            "text": "ANA: Bos días.\n{{SHOW: bea@right}}BEA: Imos aló.",
            "media": { "background": "aula", "actors": ["ana"] },
            "choices": [
                { "label": "Join the strike", "target": "assembly",
                  "state_change": { "variable": "joined", "value": "yes" } },
                { "label": "Go home", "target": "home" }
            ]
        },
        "assembly": { "text": "crowd noise" },
        "home": {
            "text": "quiet",
            "route": {
                "variable": "joined", "value": "yes",
                "target_if_true": "assembly", "target_if_false": "home_end"
            }
        },
        "home_end": { "text": "rest" }
    }"#;

    #[test]
    fn test_parses_authored_document() {
        let catalog = InMemoryCatalog::from_json_str(DOCUMENT).unwrap();

        assert_eq!(catalog.len(), 4);
        let opening = catalog.lookup("opening").unwrap();
        assert_eq!(opening.media.background.as_deref(), Some("aula"));
        assert_eq!(opening.choices.len(), 2);
        assert_eq!(
            opening.choices[0].state_change.as_ref().unwrap().value,
            "yes"
        );
    }

    #[test]
    fn test_optional_fields_default() {
        let catalog = InMemoryCatalog::from_json_str(r#"{ "solo": { "text": "hi" } }"#).unwrap();

        let scene = catalog.lookup("solo").unwrap();
        assert!(scene.choices.is_empty());
        assert!(scene.route.is_none());
        assert!(scene.media.background.is_none());
    }

    #[test]
    fn test_lookup_of_missing_scene_fails() {
        let catalog = InMemoryCatalog::from_json_str(DOCUMENT).unwrap();

        assert_eq!(
            catalog.lookup("nope").unwrap_err(),
            EngineError::SceneNotFound("nope".to_owned())
        );
    }

    #[test]
    fn test_invalid_json_is_a_content_error() {
        let result = InMemoryCatalog::from_json_str("not json");

        assert!(matches!(result, Err(EngineError::Content(_))));
    }

    #[test]
    fn test_complete_catalog_has_no_dangling_references() {
        let catalog = InMemoryCatalog::from_json_str(DOCUMENT).unwrap();

        assert!(catalog.dangling_references().is_empty());
    }

    #[test]
    fn test_dangling_choice_and_route_targets_are_reported() {
        let catalog = InMemoryCatalog::from_json_str(
            r#"{
                "fork": {
                    "text": "pick",
                    "choices": [ { "label": "Leap", "target": "missing" } ],
                    "route": {
                        "variable": "x", "value": "1",
                        "target_if_true": "fork", "target_if_false": "gone"
                    }
                }
            }"#,
        )
        .unwrap();

        let issues = catalog.dangling_references();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().any(|i| i.contains("choice target missing")));
        assert!(issues.iter().any(|i| i.contains("route target gone")));
    }
}
