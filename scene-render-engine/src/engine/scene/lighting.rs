use bevy::pbr::{CascadeShadowConfigBuilder, DirectionalLightShadowMap};
use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, DIRECTIONAL_LIGHT_ILLUMINANCE, DIRECTIONAL_LIGHT_POSITION,
    GROUND_BOUNCE_ILLUMINANCE, GROUND_COLOUR, LIGHT_COLOUR, SHADOW_MAP_SIZE, SHADOW_MAX_DISTANCE,
    SHADOW_NORMAL_BIAS, SKY_COLOUR,
};
use constants::views::LIT_VIEW_INDEX;

pub fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            color: LIGHT_COLOUR,
            illuminance: DIRECTIONAL_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            shadow_normal_bias: SHADOW_NORMAL_BIAS,
            ..default()
        },
        Transform::from_translation(DIRECTIONAL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        CascadeShadowConfigBuilder {
            first_cascade_far_bound: SHADOW_MAX_DISTANCE * 0.4,
            maximum_distance: SHADOW_MAX_DISTANCE,
            ..default()
        }
        .build(),
        RenderLayers::layer(LIT_VIEW_INDEX),
    ));

    commands.insert_resource(DirectionalLightShadowMap {
        size: SHADOW_MAP_SIZE,
    });

    // Hemisphere light: sky tinted ambient plus a shadowless ground bounce
    // lighting undersides from below.
    commands.insert_resource(AmbientLight {
        color: SKY_COLOUR,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });
    commands.spawn((
        Name::new("Ground bounce"),
        DirectionalLight {
            color: GROUND_COLOUR,
            illuminance: GROUND_BOUNCE_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::default().looking_to(Vec3::Y, Vec3::Z),
        RenderLayers::layer(LIT_VIEW_INDEX),
    ));
}
