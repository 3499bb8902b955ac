use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::LogPlugin;
use bevy::pbr::wireframe::{WireframeConfig, WireframePlugin};
use bevy::prelude::*;
use bevy::render::camera::CameraUpdateSystem;
use bevy::transform::TransformSystem;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::path::LOG_FILTER;
use constants::render_settings::WIREFRAME_COLOUR;

// Crate engine modules
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::assets::scene_models::SceneModels;
use crate::engine::camera::scene_view::{CameraTarget, orient_view_cameras, spawn_view_cameras};
use crate::engine::core::app_state::{SceneFrameSet, SceneState};
use crate::engine::core::window_config::create_window_config;
use crate::engine::overlay::tracked_points::project_tracked_points;
use crate::engine::render::viewport_layout::{
    ViewRects, ViewportSize, apply_view_layout, observe_window_size,
};
use crate::engine::scene::ground::{spawn_ground, spawn_wire_grid};
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::models::{enable_model_shadows, spawn_loaded_models, sync_wire_clones};
use crate::engine::scene::wireframe::{WireMaterials, convert_wire_scene};
use crate::engine::systems::diagnostics::fps_notification_system;
use crate::engine::systems::view_mode::ViewLayoutPreset;
use crate::engine::timeline::driver::{
    MotionPreference, SceneTimeline, advance_scrub, apply_timeline_pose, motion_allowed,
};
// Loading and reveal
use crate::engine::loading::manifest_loader::{ManifestLoader, load_manifest_system, start_loading};
use crate::engine::loading::model_loader::{
    check_model_loading, handle_load_failures, report_loading_progress,
};
use crate::engine::loading::progress::{AssetLoadFailed, LoadingProgress};
use crate::engine::loading::reveal::{reveal_scene, show_load_failure};
// Web RPC
use crate::rpc::web_rpc::WebRpcPlugin;

#[cfg(target_arch = "wasm32")]
use crate::engine::overlay::dom_overlay::DomOverlaySink;
#[cfg(target_arch = "wasm32")]
use crate::engine::overlay::tracked_points::write_overlay_offsets;
#[cfg(target_arch = "wasm32")]
use crate::engine::timeline::scroll_source::{
    drain_scroll_queue, remove_scroll_listener, setup_scroll_listener,
};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::{HudText, LoadingText};
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::overlay::native_overlay::{position_overlay_labels, spawn_overlay_labels};
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::diagnostics::hud_text_update_system;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::exit::exit_on_escape;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::view_mode::cycle_view_layout;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::timeline::scroll_source::wheel_scroll_input;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<SceneState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(WireframePlugin::default())
        .insert_resource(WireframeConfig {
            global: false,
            default_color: WIREFRAME_COLOUR,
        });

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<SceneModels>()
        .init_resource::<SceneTimeline>()
        .init_resource::<ViewLayoutPreset>()
        .init_resource::<CameraTarget>()
        .init_resource::<ViewportSize>()
        .init_resource::<ViewRects>()
        .insert_resource(MotionPreference::detect())
        .add_event::<AssetLoadFailed>()
        .add_observer(enable_model_shadows)
        .add_observer(convert_wire_scene);

    app.configure_sets(
        Update,
        (
            SceneFrameSet::Input,
            SceneFrameSet::Timeline,
            SceneFrameSet::Views,
        )
            .chain(),
    );

    // Loading phase: manifest first, then the model gate
    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                load_manifest_system,
                check_model_loading,
                report_loading_progress,
            )
                .chain()
                .run_if(in_state(SceneState::Loading)),
        )
        .add_systems(Update, handle_load_failures)
        .add_systems(
            OnEnter(SceneState::Running),
            (spawn_loaded_models, reveal_scene).chain(),
        )
        .add_systems(OnEnter(SceneState::Failed), show_load_failure);

    // Per-frame scene update. The timeline only runs once armed.
    app.add_systems(
        Update,
        (
            (advance_scrub, apply_timeline_pose)
                .chain()
                .run_if(motion_allowed),
            sync_wire_clones,
        )
            .chain()
            .in_set(SceneFrameSet::Timeline)
            .run_if(in_state(SceneState::Running)),
    )
    .add_systems(
        Update,
        (observe_window_size, apply_view_layout, orient_view_cameras)
            .chain()
            .in_set(SceneFrameSet::Views),
    )
    .add_systems(
        Update,
        fps_notification_system.run_if(in_state(SceneState::Running)),
    );

    // Overlays read final transforms and camera matrices.
    app.add_systems(
        PostUpdate,
        project_tracked_points
            .after(TransformSystem::TransformPropagate)
            .after(CameraUpdateSystem)
            .run_if(in_state(SceneState::Running)),
    );

    #[cfg(target_arch = "wasm32")]
    {
        app.init_resource::<DomOverlaySink>()
            .add_systems(Startup, setup_scroll_listener)
            .add_systems(PreUpdate, drain_scroll_queue)
            .add_systems(
                PostUpdate,
                write_overlay_offsets::<DomOverlaySink>
                    .after(project_tracked_points)
                    .run_if(in_state(SceneState::Running)),
            )
            .add_systems(Last, remove_scroll_listener);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(
            Update,
            (wheel_scroll_input, cycle_view_layout).in_set(SceneFrameSet::Input),
        )
        .add_systems(
            Update,
            hud_text_update_system.run_if(in_state(SceneState::Running)),
        )
        .add_systems(Update, exit_on_escape)
        .add_systems(
            PostUpdate,
            (spawn_overlay_labels, position_overlay_labels)
                .chain()
                .after(project_tracked_points)
                .run_if(in_state(SceneState::Running)),
        );
    }

    app
}

// Startup system that only handles basic initialisation
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    spawn_lighting(&mut commands);
    spawn_ground(&mut commands, &mut meshes, &mut materials);
    spawn_wire_grid(&mut commands, &mut meshes, &mut materials);
    spawn_view_cameras(&mut commands, &mut meshes, &mut materials);
    commands.insert_resource(WireMaterials::new(&mut materials));

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

/// UI camera drawn over both views, plus the loading text and HUD.
#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    use bevy::ui::IsDefaultUiCamera;
    use constants::views::VIEW_COUNT;

    commands.spawn((
        Camera2d,
        Camera {
            order: VIEW_COUNT as isize,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
    ));

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("Loading..."),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::BLACK),
                LoadingText,
            ));

            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                HudText,
            ));
        });
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: LOG_FILTER.into(),
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
