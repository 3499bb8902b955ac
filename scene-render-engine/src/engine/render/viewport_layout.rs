use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::window::PrimaryWindow;
use constants::render_settings::MAX_PIXEL_RATIO;
use constants::views::{VIEW_COUNT, ViewLayout};

use crate::engine::camera::scene_view::SceneView;
use crate::engine::systems::view_mode::ViewLayoutPreset;
use crate::error::{SceneError, SceneResult};

/// Pixel rectangle of one view, origin at the bottom-left of the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ViewRect {
    #[cfg(test)]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Position with a top-left origin, as render viewports expect.
    pub fn top_left_origin(&self, window_height: u32) -> UVec2 {
        UVec2::new(
            self.x,
            window_height.saturating_sub(self.y.saturating_add(self.height)),
        )
    }

    pub fn aspect(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    #[cfg(test)]
    pub fn overlaps(&self, other: &ViewRect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Drawable size in device pixels.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn from_logical(width: f32, height: f32, pixel_ratio: f32) -> Self {
        let ratio = capped_pixel_ratio(pixel_ratio);
        let to_pixels = |logical: f32| {
            if logical.is_finite() && logical > 0.0 {
                (logical * ratio).round() as u32
            } else {
                0
            }
        };
        Self::new(to_pixels(width), to_pixels(height))
    }

    pub fn clamped_to(self, width: u32, height: u32) -> Self {
        Self::new(self.width.min(width), self.height.min(height))
    }

    pub fn validate(&self) -> SceneResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::ResizeObservation {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

pub fn capped_pixel_ratio(ratio: f32) -> f32 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Full-width band of the window covering `layout`'s fraction of the height.
/// Edges are rounded independently so stacked layouts share boundaries.
pub fn view_rect(layout: ViewLayout, size: ViewportSize) -> ViewRect {
    let fraction = |value: f32| {
        if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        }
    };
    let to_row = |value: f32| ((value * size.height as f32).round() as u32).min(size.height);

    let bottom = to_row(fraction(layout.bottom));
    let top = to_row(fraction(layout.bottom + layout.height)).max(bottom);

    ViewRect {
        x: 0,
        y: bottom,
        width: size.width,
        height: top - bottom,
    }
}

/// Rectangles used for the current frame, indexed like the views.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewRects(pub [ViewRect; VIEW_COUNT]);

/// Track the primary window's drawable size, capping the pixel ratio.
pub fn observe_window_size(
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut size: ResMut<ViewportSize>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };

    let base_ratio = window.resolution.base_scale_factor();
    let ratio = capped_pixel_ratio(base_ratio);
    let override_ratio = (ratio < base_ratio).then_some(ratio);
    if window.resolution.scale_factor_override() != override_ratio {
        debug!("Capping pixel ratio {base_ratio} to {ratio}");
        window.resolution.set_scale_factor_override(override_ratio);
    }

    let observed = ViewportSize::from_logical(window.width(), window.height(), ratio)
        .clamped_to(window.physical_width(), window.physical_height());
    size.set_if_neq(observed);
}

/// Assign each camera its sub-rectangle as viewport and scissor. A view with
/// no height keeps its rectangle but its camera is switched off for the frame.
pub fn apply_view_layout(
    size: Res<ViewportSize>,
    preset: Res<ViewLayoutPreset>,
    mut rects: ResMut<ViewRects>,
    mut cameras: Query<(&SceneView, &mut Camera, &mut Projection)>,
    mut zero_size_logged: Local<bool>,
) {
    if let Err(error) = size.validate() {
        if !*zero_size_logged {
            warn!("{error}, skipping rendering");
            *zero_size_logged = true;
        }
        for (_, mut camera, _) in &mut cameras {
            camera.is_active = false;
        }
        return;
    }
    *zero_size_logged = false;

    let layouts = preset.layouts();
    let mut next_rects = ViewRects::default();
    for (index, layout) in layouts.iter().enumerate() {
        next_rects.0[index] = view_rect(*layout, *size);
    }
    rects.set_if_neq(next_rects);

    // Clearing covers the whole surface, so only the first visible view clears.
    let clearing_view = next_rects.0.iter().position(|rect| !rect.is_empty());

    for (view, mut camera, mut projection) in &mut cameras {
        let Some(rect) = next_rects.0.get(view.index) else {
            error!("View index {} has no layout slot", view.index);
            continue;
        };

        if rect.is_empty() {
            if camera.is_active {
                camera.is_active = false;
            }
            continue;
        }

        let position = rect.top_left_origin(size.height);
        let physical_size = UVec2::new(rect.width, rect.height);
        let viewport_matches = camera.viewport.as_ref().is_some_and(|viewport| {
            viewport.physical_position == position && viewport.physical_size == physical_size
        });
        if !viewport_matches {
            camera.viewport = Some(Viewport {
                physical_position: position,
                physical_size,
                ..default()
            });
        }
        if !camera.is_active {
            camera.is_active = true;
        }

        let clear_color = if clearing_view == Some(view.index) {
            ClearColorConfig::Custom(view.background)
        } else {
            ClearColorConfig::None
        };
        if !same_clear_color(&camera.clear_color, &clear_color) {
            camera.clear_color = clear_color;
        }

        let aspect = rect.aspect();
        if let Projection::Perspective(perspective) = &*projection {
            if perspective.aspect_ratio != aspect {
                if let Projection::Perspective(perspective) = &mut *projection {
                    perspective.aspect_ratio = aspect;
                }
            }
        }
    }
}

fn same_clear_color(current: &ClearColorConfig, next: &ClearColorConfig) -> bool {
    match (current, next) {
        (ClearColorConfig::Custom(current), ClearColorConfig::Custom(next)) => current == next,
        (ClearColorConfig::Default, ClearColorConfig::Default)
        | (ClearColorConfig::None, ClearColorConfig::None) => true,
        _ => false,
    }
}
