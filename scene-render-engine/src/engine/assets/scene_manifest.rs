use bevy::prelude::*;
use constants::coordinate_system::{DEFAULT_MODEL_SCALE, model_correction};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};

/// Complete scene manifest as a Bevy asset. Mirrors JSON structure exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SceneManifest {
    pub models: Vec<ModelDefinition>,
}

/// One external model and the correction applied to its root once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub name: String,
    /// Path relative to the asset root; the first glTF scene is used.
    pub path: String,
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub offset: [f32; 3],
    #[serde(default)]
    pub anchors: Vec<AnchorDefinition>,
}

/// Point of interest on a model whose screen position feeds an overlay element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorDefinition {
    /// CSS selector of the overlay element on the web.
    pub overlay: String,
    #[serde(default)]
    pub label: Option<String>,
    /// Offset from the model group origin, in world units.
    #[serde(default)]
    pub offset: [f32; 3],
}

fn default_scale() -> f32 {
    DEFAULT_MODEL_SCALE
}

impl SceneManifest {
    #[cfg(test)]
    pub fn model(&self, name: &str) -> Option<&ModelDefinition> {
        self.models.iter().find(|model| model.name == name)
    }

    pub fn model_names(&self) -> Vec<String> {
        self.models.iter().map(|model| model.name.clone()).collect()
    }

    /// Reject manifests the load gate could never complete or that would
    /// produce degenerate transforms.
    pub fn validate(&self) -> SceneResult<()> {
        if self.models.is_empty() {
            return Err(SceneError::manifest("manifest lists no models"));
        }

        for (index, model) in self.models.iter().enumerate() {
            if model.name.is_empty() {
                return Err(SceneError::manifest(format!("model #{index} has no name")));
            }
            if self.models[..index].iter().any(|other| other.name == model.name) {
                return Err(SceneError::manifest(format!(
                    "model '{}' is listed twice",
                    model.name
                )));
            }
            if !model.scale.is_finite() || model.scale <= 0.0 {
                return Err(SceneError::manifest(format!(
                    "model '{}' has invalid scale {}",
                    model.name, model.scale
                )));
            }
            if model.offset.iter().any(|value| !value.is_finite()) {
                return Err(SceneError::manifest(format!(
                    "model '{}' has a non-finite offset",
                    model.name
                )));
            }
        }

        Ok(())
    }
}

impl ModelDefinition {
    pub fn correction(&self) -> Transform {
        model_correction(self.scale, Vec3::from(self.offset))
    }
}

impl AnchorDefinition {
    /// Text shown by native overlay labels.
    pub fn display_label(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.overlay.trim_start_matches(['#', '.']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::timeline::AnimatedObject;

    const SHIPPED_MANIFEST: &str = include_str!("../../../assets/scene_manifest.json");

    fn model(name: &str) -> ModelDefinition {
        ModelDefinition {
            name: name.to_string(),
            path: format!("models/{name}.glb"),
            scale: DEFAULT_MODEL_SCALE,
            offset: [0.0; 3],
            anchors: Vec::new(),
        }
    }

    #[test]
    fn test_shipped_manifest_is_valid() {
        let manifest: SceneManifest = serde_json::from_str(SHIPPED_MANIFEST).unwrap();
        manifest.validate().unwrap();

        for object in AnimatedObject::ALL {
            assert!(
                manifest.model(object.model_name()).is_some(),
                "missing model for {object:?}"
            );
        }
    }

    #[test]
    fn test_rocket_scale_overrides_default() {
        let manifest: SceneManifest = serde_json::from_str(SHIPPED_MANIFEST).unwrap();
        let rocket = manifest.model("rocket").unwrap();
        let tree = manifest.model("tree").unwrap();

        assert!((rocket.correction().scale.x - 0.2).abs() < 1e-6);
        assert!((tree.correction().scale.x - DEFAULT_MODEL_SCALE).abs() < 1e-6);
        assert_eq!(rocket.correction().translation, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_missing_scale_uses_default() {
        let manifest: SceneManifest =
            serde_json::from_str(r#"{ "models": [ { "name": "tree", "path": "tree.gltf" } ] }"#)
                .unwrap();
        assert_eq!(manifest.models[0].scale, DEFAULT_MODEL_SCALE);
        assert!(manifest.models[0].anchors.is_empty());
    }

    #[test]
    fn test_correction_rotates_quarter_turn() {
        let forward = model("tree").correction().rotation * Vec3::X;
        assert!((forward - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_validate_rejects_bad_manifests() {
        let empty = SceneManifest { models: Vec::new() };
        assert!(matches!(empty.validate(), Err(SceneError::Manifest { .. })));

        let duplicate = SceneManifest {
            models: vec![model("tree"), model("tree")],
        };
        assert!(duplicate.validate().is_err());

        let mut zero_scale = model("rocket");
        zero_scale.scale = 0.0;
        let manifest = SceneManifest {
            models: vec![zero_scale],
        };
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_anchor_label_falls_back_to_selector() {
        let anchor = AnchorDefinition {
            overlay: "#rocket-label".to_string(),
            label: None,
            offset: [0.0; 3],
        };
        assert_eq!(anchor.display_label(), "rocket-label");
    }
}
