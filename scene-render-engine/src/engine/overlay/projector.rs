use bevy::prelude::*;
use constants::dom::OVERLAY_OFFSET_BOUND;

use crate::error::{SceneError, SceneResult};

/// Combined world to clip transform for a camera.
pub fn clip_from_world(clip_from_view: Mat4, camera_transform: &GlobalTransform) -> Mat4 {
    clip_from_view * camera_transform.compute_matrix().inverse()
}

/// Project a world point to normalised device coordinates, x right and y up,
/// with the visible range in [-1, 1]. Points on or behind the camera plane
/// have no meaningful projection.
pub fn project(point: Vec3, clip_from_world: &Mat4) -> SceneResult<Vec2> {
    let clip = *clip_from_world * point.extend(1.0);
    if clip.w.is_nan() || clip.w <= f32::EPSILON {
        return Err(SceneError::ProjectionDegenerate { clip_w: clip.w });
    }

    let ndc = Vec2::new(clip.x, clip.y) / clip.w;
    if !ndc.is_finite() {
        return Err(SceneError::ProjectionDegenerate { clip_w: clip.w });
    }
    Ok(ndc)
}

/// Overlay offset of a world point, in percent of the view from its centre.
/// `y` grows downwards. Unprojectable points are pushed to the boundary on
/// the side they lie, so overlays never receive NaN.
pub fn overlay_offset(point: Vec3, clip_from_world: &Mat4) -> Vec2 {
    let ndc = match project(point, clip_from_world) {
        Ok(ndc) => ndc,
        Err(_) => {
            let clip = *clip_from_world * point.extend(1.0);
            Vec2::new(towards_edge(clip.x), towards_edge(clip.y))
        }
    };

    Vec2::new(
        saturate(ndc.x * OVERLAY_OFFSET_BOUND),
        saturate(-ndc.y * OVERLAY_OFFSET_BOUND),
    )
}

fn towards_edge(value: f32) -> f32 {
    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value.signum() * f32::INFINITY
    }
}

fn saturate(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-OVERLAY_OFFSET_BOUND, OVERLAY_OFFSET_BOUND)
    }
}
