use bevy::prelude::*;

use super::progress::LoadingProgress;
use crate::engine::core::app_state::LoadingText;
use crate::engine::timeline::driver::MotionPreference;
use crate::rpc::web_rpc::WebRpcInterface;

/// Runs once, on entering `Running`: show the page content and tell the
/// frontend the scene is interactive.
pub fn reveal_scene(
    mut commands: Commands,
    loading_progress: Res<LoadingProgress>,
    motion: Res<MotionPreference>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    loading_text: Query<Entity, With<LoadingText>>,
) {
    #[cfg(target_arch = "wasm32")]
    crate::engine::overlay::dom_overlay::remove_loading_class();

    for entity in &loading_text {
        commands.entity(entity).despawn();
    }

    if motion.reduced {
        info!("Reduced motion preferred, scroll timeline stays disarmed");
    }

    rpc_interface.send_notification(
        "scene_ready",
        serde_json::json!({
            "models": loading_progress.gate.total(),
            "timeline_armed": !motion.reduced
        }),
    );
}

pub fn show_load_failure(
    loading_progress: Res<LoadingProgress>,
    mut loading_text: Query<&mut Text, With<LoadingText>>,
) {
    let message = loading_progress
        .gate
        .failure()
        .map(|error| error.to_string())
        .unwrap_or_else(|| "Failed to load scene".to_string());

    for mut text in &mut loading_text {
        text.0 = message.clone();
    }
}
