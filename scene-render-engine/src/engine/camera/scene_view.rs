use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::pbr::{DistanceFog, FogFalloff, NotShadowCaster};
use bevy::prelude::*;
use bevy::render::camera::Exposure;
use bevy::render::view::RenderLayers;
use constants::render_settings::{
    BACKGROUND_COLOUR, CAMERA_EXPOSURE_EV100, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR,
    CAMERA_POSITION, CAMERA_TARGET, FOG_END, FOG_START, WIRE_BACKDROP_DISTANCE,
    WIRE_BACKGROUND_COLOUR,
};
use constants::views::{LIT_VIEW_INDEX, WIRE_VIEW_INDEX};

/// One of the two views. `index` selects both the layout slot and the render
/// layer the camera draws.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SceneView {
    pub index: usize,
    pub background: Color,
}

impl SceneView {
    pub fn layer(&self) -> RenderLayers {
        RenderLayers::layer(self.index)
    }
}

/// Point every view camera looks at.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget(pub Vec3);

impl Default for CameraTarget {
    fn default() -> Self {
        Self(CAMERA_TARGET)
    }
}

/// Flat backdrop giving the wire view its own background without clearing
/// the whole surface.
#[derive(Component)]
pub struct ViewBackdrop;

fn view_projection() -> Projection {
    Projection::Perspective(PerspectiveProjection {
        fov: CAMERA_FOV_DEGREES.to_radians(),
        near: CAMERA_NEAR,
        far: CAMERA_FAR,
        ..default()
    })
}

fn view_transform() -> Transform {
    Transform::from_translation(CAMERA_POSITION).looking_at(CAMERA_TARGET, Vec3::Y)
}

pub fn spawn_view_cameras(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let lit = SceneView {
        index: LIT_VIEW_INDEX,
        background: BACKGROUND_COLOUR,
    };
    commands.spawn((
        Name::new("Lit view"),
        Camera3d::default(),
        Camera {
            order: LIT_VIEW_INDEX as isize,
            clear_color: ClearColorConfig::Custom(lit.background),
            ..default()
        },
        view_projection(),
        view_transform(),
        Tonemapping::Reinhard,
        Exposure {
            ev100: CAMERA_EXPOSURE_EV100,
        },
        DistanceFog {
            color: BACKGROUND_COLOUR,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end: FOG_END,
            },
            ..default()
        },
        lit.layer(),
        lit,
    ));

    let wire = SceneView {
        index: WIRE_VIEW_INDEX,
        background: WIRE_BACKGROUND_COLOUR,
    };
    let backdrop_size = WIRE_BACKDROP_DISTANCE * 20.0;
    commands
        .spawn((
            Name::new("Wire view"),
            Camera3d::default(),
            Camera {
                order: WIRE_VIEW_INDEX as isize,
                clear_color: ClearColorConfig::None,
                ..default()
            },
            view_projection(),
            view_transform(),
            Tonemapping::None,
            wire.layer(),
            wire,
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Rectangle::new(backdrop_size, backdrop_size))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: wire.background,
                    unlit: true,
                    ..default()
                })),
                Transform::from_xyz(0.0, 0.0, -WIRE_BACKDROP_DISTANCE),
                NotShadowCaster,
                wire.layer(),
                ViewBackdrop,
            ));
        });
}

pub fn orient_view_cameras(
    target: Res<CameraTarget>,
    mut cameras: Query<&mut Transform, With<SceneView>>,
) {
    for mut transform in &mut cameras {
        let oriented = transform.looking_at(target.0, Vec3::Y);
        if oriented.rotation != transform.rotation {
            transform.rotation = oriented.rotation;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_cameras_follow_target() {
        let mut world = World::new();
        world.insert_resource(CameraTarget(Vec3::new(3.0, 1.0, 0.0)));
        let camera = world
            .spawn((
                view_transform(),
                SceneView {
                    index: LIT_VIEW_INDEX,
                    background: BACKGROUND_COLOUR,
                },
            ))
            .id();

        world.run_system_once(orient_view_cameras).unwrap();

        let transform = world.get::<Transform>(camera).unwrap();
        let expected = (Vec3::new(3.0, 1.0, 0.0) - CAMERA_POSITION).normalize();
        assert!(transform.forward().as_vec3().abs_diff_eq(expected, 1e-5));
        assert_eq!(transform.translation, CAMERA_POSITION);
    }

    #[test]
    fn test_view_layers_are_disjoint() {
        let lit = SceneView {
            index: LIT_VIEW_INDEX,
            background: BACKGROUND_COLOUR,
        };
        let wire = SceneView {
            index: WIRE_VIEW_INDEX,
            background: WIRE_BACKGROUND_COLOUR,
        };
        assert!(!lit.layer().intersects(&wire.layer()));
    }
}
