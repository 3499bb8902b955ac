use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::rpc::web_rpc::WebRpcInterface;

pub fn fps_notification_system(
    mut rpc_interface: ResMut<WebRpcInterface>,
    diagnostics: Res<DiagnosticsStore>,
    mut last_send_time: Local<f32>,
    time: Res<Time>,
) {
    let current_time = time.elapsed_secs();

    // Send FPS every 0.5 seconds
    if current_time - *last_send_time >= 0.5 {
        if let Some(value) = smoothed_fps(&diagnostics) {
            rpc_interface.send_notification(
                "fps_update",
                serde_json::json!({
                    "fps": value as f32
                }),
            );
            *last_send_time = current_time;
        }
    }
}

pub fn smoothed_fps(diagnostics: &DiagnosticsStore) -> Option<f64> {
    diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn hud_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    timeline: Res<crate::engine::timeline::driver::SceneTimeline>,
    preset: Res<super::view_mode::ViewLayoutPreset>,
    mut query: Query<&mut Text, With<crate::engine::core::app_state::HudText>>,
) {
    let fps = smoothed_fps(&diagnostics).unwrap_or(0.0);
    let progress = timeline.scrub.current();

    for mut text in &mut query {
        text.0 = format!(
            "FPS: {fps:.1}\nScroll: {:.0}%  Section: {}\nView: {} [V]",
            progress * 100.0,
            timeline.current_section(),
            preset.name()
        );
    }
}
