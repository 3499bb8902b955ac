use bevy::pbr::NotShadowCaster;
use bevy::pbr::wireframe::{Wireframe, WireframeColor};
use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use bevy::scene::SceneInstanceReady;
use constants::render_settings::{WIRE_FILL_COLOUR, WIREFRAME_COLOUR};
use constants::views::WIRE_VIEW_INDEX;

use crate::engine::assets::scene_models::WireModelScene;

/// Shared materials for wire layer meshes.
#[derive(Resource, Debug, Clone)]
pub struct WireMaterials {
    /// Unlit fill a shade darker than the wire view background.
    pub fill: Handle<StandardMaterial>,
}

impl WireMaterials {
    pub fn new(materials: &mut Assets<StandardMaterial>) -> Self {
        Self {
            fill: materials.add(StandardMaterial {
                base_color: WIRE_FILL_COLOUR,
                unlit: true,
                ..default()
            }),
        }
    }
}

/// Move a freshly instanced wire scene onto the wire layer and draw its
/// meshes as white edges over an unlit fill. Render layers do not propagate,
/// so every descendant is tagged.
pub fn convert_wire_scene(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    wire_scenes: Query<(), With<WireModelScene>>,
    children: Query<&Children>,
    meshes: Query<(), With<Mesh3d>>,
    wire_materials: Res<WireMaterials>,
) {
    let root = trigger.target();
    if !wire_scenes.contains(root) {
        return;
    }

    let mut converted = 0;
    for entity in children.iter_descendants(root) {
        let mut entity_commands = commands.entity(entity);
        entity_commands.insert(RenderLayers::layer(WIRE_VIEW_INDEX));

        if meshes.contains(entity) {
            entity_commands.insert((
                MeshMaterial3d(wire_materials.fill.clone()),
                Wireframe,
                WireframeColor {
                    color: WIREFRAME_COLOUR,
                },
                NotShadowCaster,
            ));
            converted += 1;
        }
    }

    debug!("Converted {converted} meshes to wireframe");
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::render_settings::WIRE_BACKGROUND_COLOUR;

    #[test]
    fn test_wire_fill_stands_out_from_backdrop() {
        let mut materials = Assets::<StandardMaterial>::default();
        let wire_materials = WireMaterials::new(&mut materials);

        let fill = materials.get(&wire_materials.fill).unwrap();
        assert!(fill.unlit);
        assert_ne!(fill.base_color, WIRE_BACKGROUND_COLOUR);
    }
}
