use bevy::prelude::*;

/// Imported models face +X; a quarter turn about Y puts their front towards the camera.
pub const MODEL_ROTATION_Y: f32 = std::f32::consts::FRAC_PI_2;

/// Uniform scale applied to a model when its manifest entry gives none.
pub const DEFAULT_MODEL_SCALE: f32 = 0.01;

/// Correction applied to the root of an imported model so it matches the
/// scene's units and orientation.
pub fn model_correction(scale: f32, offset: Vec3) -> Transform {
    Transform::from_translation(offset)
        .with_scale(Vec3::splat(scale))
        .with_rotation(Quat::from_rotation_y(MODEL_ROTATION_Y))
}
