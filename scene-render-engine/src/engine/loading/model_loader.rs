use bevy::asset::RecursiveDependencyLoadState;
use bevy::prelude::*;

use super::load_gate::GateProgress;
use super::progress::{AssetLoadFailed, LoadingProgress};
use crate::engine::assets::scene_models::SceneModels;
use crate::engine::core::app_state::SceneState;
use crate::rpc::web_rpc::WebRpcInterface;

/// Poll every requested model and feed settled loads into the gate. A scene
/// only counts as loaded once its meshes, materials and textures are in.
pub fn check_model_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    scene_models: Res<SceneModels>,
    asset_server: Res<AssetServer>,
    mut failures: EventWriter<AssetLoadFailed>,
    mut next_state: ResMut<NextState<SceneState>>,
) {
    if !loading_progress.manifest_loaded || loading_progress.failed {
        return;
    }

    for (name, handle) in &scene_models.handles {
        let progress = match asset_server.get_recursive_dependency_load_state(handle) {
            Some(RecursiveDependencyLoadState::Loaded) => loading_progress.gate.mark_loaded(name),
            Some(RecursiveDependencyLoadState::Failed(error)) => {
                Err(loading_progress.gate.mark_failed(name, error))
            }
            _ => continue,
        };

        match progress {
            Ok(GateProgress::Completed) => {
                info!("✓ All models loaded");
                next_state.set(SceneState::Running);
            }
            Ok(GateProgress::Waiting { .. } | GateProgress::AlreadyCompleted) => {}
            Err(error) => {
                loading_progress.failed = true;
                failures.write(AssetLoadFailed { error });
                return;
            }
        }
    }
}

/// Surface a failed load instead of leaving the page in its loading state.
pub fn handle_load_failures(
    mut events: EventReader<AssetLoadFailed>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut next_state: ResMut<NextState<SceneState>>,
) {
    for event in events.read() {
        error!("{}", event.error);
        rpc_interface.send_notification(
            "asset_load_failed",
            serde_json::json!({
                "message": event.error.to_string()
            }),
        );
        next_state.set(SceneState::Failed);
    }
}

/// Send per-model loading states to the frontend whenever they change.
pub fn report_loading_progress(
    loading_progress: Res<LoadingProgress>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut last_sent: Local<Vec<(String, i32)>>,
) {
    if !loading_progress.manifest_loaded {
        return;
    }

    let states = loading_progress.gate.progress_states();
    if *last_sent == states {
        return;
    }

    let models: Vec<serde_json::Value> = states
        .iter()
        .map(|(name, loaded)| serde_json::json!({ "name": name, "loaded": loaded }))
        .collect();

    rpc_interface.send_notification(
        "loading_progress",
        serde_json::json!({
            "loaded": loading_progress.gate.loaded(),
            "total": loading_progress.gate.total(),
            "models": models
        }),
    );
    *last_sent = states;
}
