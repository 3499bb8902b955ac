use bevy::prelude::*;
use constants::path::RELATIVE_MANIFEST_PATH;

use super::load_gate::LoadGate;
use super::progress::{AssetLoadFailed, LoadingProgress};
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::assets::scene_models::SceneModels;
use crate::error::SceneError;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    manifest_loader.handle = Some(asset_server.load(RELATIVE_MANIFEST_PATH));
}

/// Wait for the manifest, then request every model it lists in one batch.
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut scene_models: ResMut<SceneModels>,
    mut commands: Commands,
    mut failures: EventWriter<AssetLoadFailed>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
) {
    if loading_progress.manifest_loaded || loading_progress.failed {
        return;
    }

    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    if let Some(bevy::asset::LoadState::Failed(error)) = asset_server.get_load_state(handle) {
        loading_progress.failed = true;
        failures.write(AssetLoadFailed {
            error: SceneError::asset_load(RELATIVE_MANIFEST_PATH, error),
        });
        return;
    }

    let Some(manifest) = manifests.get(handle) else {
        return;
    };

    if let Err(error) = manifest.validate() {
        loading_progress.failed = true;
        failures.write(AssetLoadFailed { error });
        return;
    }

    info!("✓ Scene manifest loaded ({} models)", manifest.models.len());
    loading_progress.manifest_loaded = true;
    loading_progress.gate = LoadGate::new(manifest.model_names());
    commands.insert_resource(manifest.clone());

    scene_models.handles = manifest
        .models
        .iter()
        .map(|model| {
            debug!("Requesting model '{}' from {}", model.name, model.path);
            let handle = asset_server.load(GltfAssetLabel::Scene(0).from_asset(model.path.clone()));
            (model.name.clone(), handle)
        })
        .collect();
}
