use bevy::prelude::*;
use constants::views::LIT_VIEW_INDEX;

use super::tracked_points::{OverlayOffset, TrackedPoint};
use crate::engine::render::viewport_layout::{ViewRects, ViewportSize};

/// UI label following a tracked point.
#[derive(Component, Debug, Clone, Copy)]
pub struct OverlayLabel {
    pub point: Entity,
}

pub fn spawn_overlay_labels(
    mut commands: Commands,
    points: Query<(Entity, &TrackedPoint), Added<TrackedPoint>>,
) {
    for (entity, point) in &points {
        commands.spawn((
            Text::new(point.label.clone()),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::BLACK),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            OverlayLabel { point: entity },
        ));
    }
}

/// Place labels over the lit view using their point's offset. Labels whose
/// point is gone are removed; labels for a collapsed view are hidden.
pub fn position_overlay_labels(
    mut commands: Commands,
    rects: Res<ViewRects>,
    size: Res<ViewportSize>,
    offsets: Query<&OverlayOffset, With<TrackedPoint>>,
    mut labels: Query<(Entity, &OverlayLabel, &mut Node, &mut Visibility)>,
) {
    let rect = rects.0[LIT_VIEW_INDEX];
    let visible = !rect.is_empty() && size.height > 0;
    let (top_percent, height_fraction) = if visible {
        let top = rect.top_left_origin(size.height).y as f32 / size.height as f32;
        (top * 100.0, rect.height as f32 / size.height as f32)
    } else {
        (0.0, 0.0)
    };

    for (entity, label, mut node, mut visibility) in &mut labels {
        let Ok(offset) = offsets.get(label.point) else {
            commands.entity(entity).despawn();
            continue;
        };

        visibility.set_if_neq(if visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
        if !visible {
            continue;
        }

        let left = Val::Percent(50.0 + offset.0.x);
        let top = Val::Percent(top_percent + (50.0 + offset.0.y) * height_fraction);
        if node.left != left || node.top != top {
            node.left = left;
            node.top = top;
        }
    }
}
