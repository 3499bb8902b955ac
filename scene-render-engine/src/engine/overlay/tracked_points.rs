use bevy::prelude::*;
#[cfg(any(target_arch = "wasm32", test))]
use constants::dom::{OVERLAY_X_PROPERTY, OVERLAY_Y_PROPERTY};
use constants::views::LIT_VIEW_INDEX;

use super::projector::{clip_from_world, overlay_offset};
use crate::engine::camera::scene_view::SceneView;

/// Anchor whose screen position drives an overlay element. Spawned as a
/// child of a model group and despawned with it.
#[derive(Component, Debug, Clone)]
#[require(OverlayOffset, Transform, Visibility)]
pub struct TrackedPoint {
    /// CSS selector of the overlay element.
    pub overlay: String,
    pub label: String,
}

/// Latest offset from the view centre, in percent; y grows downwards.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct OverlayOffset(pub Vec2);

/// Project every tracked point through the lit view camera. Runs after
/// transform propagation so models moved this frame are already placed.
pub fn project_tracked_points(
    cameras: Query<(&SceneView, &Camera, &GlobalTransform)>,
    mut points: Query<(&GlobalTransform, &mut OverlayOffset), With<TrackedPoint>>,
) {
    let Some((_, camera, camera_transform)) = cameras
        .iter()
        .find(|(view, _, _)| view.index == LIT_VIEW_INDEX)
    else {
        return;
    };

    let clip_from_world = clip_from_world(camera.clip_from_view(), camera_transform);
    for (transform, mut offset) in &mut points {
        offset.set_if_neq(OverlayOffset(overlay_offset(
            transform.translation(),
            &clip_from_world,
        )));
    }
}

/// Page surface receiving overlay custom properties.
#[cfg(any(target_arch = "wasm32", test))]
pub trait OverlaySink: Resource {
    fn set_property(&mut self, overlay: &str, property: &str, value: &str);
}

/// Custom property values for one offset, unitless with three decimals.
#[cfg(any(target_arch = "wasm32", test))]
pub fn overlay_style(offset: OverlayOffset) -> [(&'static str, String); 2] {
    [
        (OVERLAY_X_PROPERTY, format!("{:.3}", offset.0.x)),
        (OVERLAY_Y_PROPERTY, format!("{:.3}", offset.0.y)),
    ]
}

/// Write every offset each frame, so an overlay element mounted after the
/// points settle still picks up its position.
#[cfg(any(target_arch = "wasm32", test))]
pub fn write_overlay_offsets<S: OverlaySink>(
    points: Query<(&TrackedPoint, &OverlayOffset)>,
    mut sink: ResMut<S>,
) {
    for (point, offset) in &points {
        for (property, value) in overlay_style(*offset) {
            sink.set_property(&point.overlay, property, &value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use constants::render_settings::{BACKGROUND_COLOUR, CAMERA_TARGET};

    #[derive(Resource, Default)]
    struct RecordedStyles(Vec<(String, String, String)>);

    impl OverlaySink for RecordedStyles {
        fn set_property(&mut self, overlay: &str, property: &str, value: &str) {
            self.0
                .push((overlay.to_string(), property.to_string(), value.to_string()));
        }
    }

    #[test]
    fn test_overlay_style_is_unitless() {
        assert_eq!(
            overlay_style(OverlayOffset(Vec2::new(-50.0, 12.34567))),
            [
                ("--x", "-50.000".to_string()),
                ("--y", "12.346".to_string())
            ]
        );
    }

    #[test]
    fn test_settled_offsets_are_written_every_frame() {
        let mut world = World::new();
        world.init_resource::<RecordedStyles>();
        world.spawn((
            TrackedPoint {
                overlay: "#rocket-label".to_string(),
                label: "Falcon".to_string(),
            },
            OverlayOffset(Vec2::new(5.0, -2.5)),
        ));

        world
            .run_system_once(write_overlay_offsets::<RecordedStyles>)
            .unwrap();
        world
            .run_system_once(write_overlay_offsets::<RecordedStyles>)
            .unwrap();

        let written = &world.resource::<RecordedStyles>().0;
        assert_eq!(written.len(), 4);
        assert_eq!(written[0..2], written[2..4]);
        assert_eq!(
            written[3],
            (
                "#rocket-label".to_string(),
                "--y".to_string(),
                "-2.500".to_string()
            )
        );
    }

    #[test]
    fn test_points_without_lit_camera_keep_their_offset() {
        let mut world = World::new();
        let point = world
            .spawn((
                TrackedPoint {
                    overlay: "#rocket-label".to_string(),
                    label: "Falcon".to_string(),
                },
                GlobalTransform::from_translation(CAMERA_TARGET),
                OverlayOffset(Vec2::new(12.0, -3.0)),
            ))
            .id();

        world.run_system_once(project_tracked_points).unwrap();
        assert_eq!(
            world.get::<OverlayOffset>(point),
            Some(&OverlayOffset(Vec2::new(12.0, -3.0)))
        );
    }

    #[test]
    fn test_wire_camera_is_not_used_for_overlays() {
        let mut world = World::new();
        world.spawn((
            SceneView {
                index: LIT_VIEW_INDEX + 1,
                background: BACKGROUND_COLOUR,
            },
            Camera::default(),
            GlobalTransform::IDENTITY,
        ));
        let point = world
            .spawn((
                TrackedPoint {
                    overlay: "#tree-label".to_string(),
                    label: "Lime tree".to_string(),
                },
                GlobalTransform::from_translation(Vec3::new(0.2, 0.4, -1.0)),
            ))
            .id();

        world.run_system_once(project_tracked_points).unwrap();
        assert_eq!(
            world.get::<OverlayOffset>(point),
            Some(&OverlayOffset::default())
        );
    }
}
