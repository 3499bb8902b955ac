use bevy::prelude::*;

pub const BACKGROUND_COLOUR: Color = Color::WHITE;
pub const LIGHT_COLOUR: Color = Color::WHITE;
pub const SKY_COLOUR: Color = Color::srgb(0.667, 0.667, 1.0);
pub const GROUND_COLOUR: Color = Color::srgb(0.533, 1.0, 0.533);
/// CSS `steelblue`.
pub const WIRE_BACKGROUND_COLOUR: Color = Color::srgb(0.275, 0.51, 0.706);
pub const WIREFRAME_COLOUR: Color = Color::WHITE;
/// Darker than the wire background so meshes still read without edge rendering.
pub const WIRE_FILL_COLOUR: Color = Color::srgb(0.16, 0.31, 0.45);

pub const FOG_START: f32 = 15.0;
pub const FOG_END: f32 = 20.0;

pub const CAMERA_FOV_DEGREES: f32 = 40.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 1.0, 5.0);
pub const CAMERA_TARGET: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Roughly five times brighter than bevy's default exposure.
pub const CAMERA_EXPOSURE_EV100: f32 = 7.4;

pub const DIRECTIONAL_LIGHT_POSITION: Vec3 = Vec3::new(2.0, 5.0, 3.0);
pub const DIRECTIONAL_LIGHT_ILLUMINANCE: f32 = 4_000.0;
pub const SHADOW_MAP_SIZE: usize = 1024;
pub const SHADOW_MAX_DISTANCE: f32 = 10.0;
pub const SHADOW_NORMAL_BIAS: f32 = 0.6;
pub const AMBIENT_BRIGHTNESS: f32 = 400.0;
/// Upward fill tinted by the ground, half the strength of the ambient sky.
pub const GROUND_BOUNCE_ILLUMINANCE: f32 = 200.0;

pub const GROUND_SIZE: f32 = 100.0;
pub const WIRE_GRID_SIZE: f32 = 20.0;
pub const WIRE_GRID_CELLS: u32 = 20;
/// Distance of the wire view backdrop from its camera; must stay inside `CAMERA_FAR`.
pub const WIRE_BACKDROP_DISTANCE: f32 = 90.0;

/// Device pixel ratio is capped to bound fill cost on dense displays.
pub const MAX_PIXEL_RATIO: f32 = 2.0;
