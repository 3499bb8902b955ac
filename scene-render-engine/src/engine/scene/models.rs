use bevy::pbr::{NotShadowCaster, NotShadowReceiver};
use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use bevy::scene::SceneInstanceReady;
use constants::timeline::AnimatedObject;
use constants::views::{LIT_VIEW_INDEX, WIRE_VIEW_INDEX};

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::assets::scene_models::{
    LitModelScene, ModelGroup, SceneModels, WireClone, WireModelScene,
};
use crate::engine::overlay::tracked_points::TrackedPoint;

/// Spawn every loaded model once the load gate has fired: a group in the lit
/// layer carrying the corrected scene and its anchors, plus a wire copy that
/// follows the group.
pub fn spawn_loaded_models(
    mut commands: Commands,
    manifest: Res<SceneManifest>,
    mut scene_models: ResMut<SceneModels>,
) {
    for model in &manifest.models {
        let Some(handle) = scene_models.handle(&model.name).cloned() else {
            warn!("No scene handle for model '{}'", model.name);
            continue;
        };

        let resting = AnimatedObject::from_model_name(&model.name)
            .map_or(Vec3::ZERO, AnimatedObject::resting_position);
        let correction = model.correction();

        let group = commands
            .spawn((
                Name::new(model.name.clone()),
                ModelGroup {
                    name: model.name.clone(),
                },
                Transform::from_translation(resting),
                Visibility::default(),
                RenderLayers::layer(LIT_VIEW_INDEX),
            ))
            .with_children(|parent| {
                parent.spawn((SceneRoot(handle.clone()), correction, LitModelScene));

                for anchor in &model.anchors {
                    parent.spawn((
                        TrackedPoint {
                            overlay: anchor.overlay.clone(),
                            label: anchor.display_label(),
                        },
                        Transform::from_translation(Vec3::from(anchor.offset)),
                    ));
                }
            })
            .id();

        let wire_clone = commands
            .spawn((
                Name::new(format!("{} (wire)", model.name)),
                WireClone { source: group },
                Transform::from_translation(resting),
                Visibility::default(),
                RenderLayers::layer(WIRE_VIEW_INDEX),
            ))
            .with_children(|parent| {
                parent.spawn((
                    SceneRoot(handle),
                    correction,
                    WireModelScene,
                    RenderLayers::layer(WIRE_VIEW_INDEX),
                ));
            })
            .id();

        scene_models.groups.insert(model.name.clone(), group);
        scene_models.wire_clones.insert(model.name.clone(), wire_clone);
    }

    info!("✓ Spawned {} models", scene_models.groups.len());
}

/// Every mesh of a lit model casts and receives shadows.
pub fn enable_model_shadows(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    lit_scenes: Query<(), With<LitModelScene>>,
    children: Query<&Children>,
    meshes: Query<(), With<Mesh3d>>,
) {
    let root = trigger.target();
    if !lit_scenes.contains(root) {
        return;
    }

    for entity in children.iter_descendants(root) {
        if meshes.contains(entity) {
            commands
                .entity(entity)
                .remove::<(NotShadowCaster, NotShadowReceiver)>();
        }
    }
}

/// Copy each group's transform onto its wire copy. Copies whose group is
/// gone are despawned with it.
pub fn sync_wire_clones(
    mut commands: Commands,
    groups: Query<&Transform, (With<ModelGroup>, Without<WireClone>)>,
    mut clones: Query<(Entity, &WireClone, &mut Transform)>,
) {
    for (entity, clone, mut transform) in &mut clones {
        match groups.get(clone.source) {
            Ok(source) => {
                transform.set_if_neq(*source);
            }
            Err(_) => {
                commands.entity(entity).despawn();
            }
        }
    }
}
