use bevy::asset::RenderAssetUsages;
use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::{NoFrustumCulling, RenderLayers};
use constants::render_settings::{
    GROUND_COLOUR, GROUND_SIZE, WIRE_GRID_CELLS, WIRE_GRID_SIZE, WIREFRAME_COLOUR,
};
use constants::views::{LIT_VIEW_INDEX, WIRE_VIEW_INDEX};

#[derive(Component)]
pub struct Ground;

#[derive(Component)]
pub struct GroundGrid;

/// Ground plane of the lit layer. Receives shadows but casts none.
pub fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Name::new("Ground"),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: GROUND_COLOUR,
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::IDENTITY,
        NotShadowCaster,
        RenderLayers::layer(LIT_VIEW_INDEX),
        Ground,
    ));
}

/// Line endpoints of a square grid centred on the origin in the XZ plane,
/// two vertices per line.
pub fn grid_line_vertices(size: f32, cells: u32) -> Vec<[f32; 3]> {
    if cells == 0 || !size.is_finite() || size <= 0.0 {
        return Vec::new();
    }

    let half = size / 2.0;
    let spacing = size / cells as f32;
    let mut vertices = Vec::with_capacity((cells as usize + 1) * 4);

    for i in 0..=cells {
        let offset = -half + i as f32 * spacing;
        // Line along Z at fixed X
        vertices.push([offset, 0.0, -half]);
        vertices.push([offset, 0.0, half]);
        // Line along X at fixed Z
        vertices.push([-half, 0.0, offset]);
        vertices.push([half, 0.0, offset]);
    }

    vertices
}

/// Reference grid for the wire layer, so wireframe models keep spatial context.
pub fn spawn_wire_grid(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let vertices = grid_line_vertices(WIRE_GRID_SIZE, WIRE_GRID_CELLS);
    let indices: Vec<u32> = (0..vertices.len() as u32).collect();

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(bevy::render::mesh::Indices::U32(indices));

    commands.spawn((
        Name::new("Wire grid"),
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: WIREFRAME_COLOUR,
            unlit: true,
            ..default()
        })),
        Transform::IDENTITY,
        NoFrustumCulling,
        NotShadowCaster,
        RenderLayers::layer(WIRE_VIEW_INDEX),
        GroundGrid,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_has_two_lines_per_division() {
        let vertices = grid_line_vertices(20.0, 20);
        assert_eq!(vertices.len(), 21 * 4);
        assert_eq!(vertices.len() % 2, 0);
    }

    #[test]
    fn test_grid_stays_on_ground_within_bounds() {
        for [x, y, z] in grid_line_vertices(20.0, 20) {
            assert_eq!(y, 0.0);
            assert!(x.abs() <= 10.0 + 1e-4);
            assert!(z.abs() <= 10.0 + 1e-4);
        }
    }

    #[test]
    fn test_grid_includes_outer_edges() {
        let vertices = grid_line_vertices(4.0, 2);
        assert!(vertices.contains(&[-2.0, 0.0, -2.0]));
        assert!(vertices.contains(&[2.0, 0.0, 2.0]));
        assert!(vertices.contains(&[0.0, 0.0, -2.0]));
    }

    #[test]
    fn test_degenerate_grid_is_empty() {
        assert!(grid_line_vertices(20.0, 0).is_empty());
        assert!(grid_line_vertices(0.0, 10).is_empty());
    }
}
