use bevy::prelude::*;
use bevy::window::PresentMode;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some(constants::dom::CANVAS_SELECTOR.into()),
            fit_canvas_to_parent: true,
            // Page scrolling drives the timeline, so browser defaults must stay intact.
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Dual view scroll scene".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
