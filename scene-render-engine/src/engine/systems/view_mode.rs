use bevy::prelude::*;
use constants::views::{AUTHORED_LAYOUT, SPLIT_LAYOUT, VIEW_COUNT, ViewLayout, WIRE_ONLY_LAYOUT};

/// How the window is shared between the lit and wire views.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewLayoutPreset {
    /// Lit view fills the window and the wire view is collapsed.
    #[default]
    Authored,
    Split,
    WireOnly,
}

impl ViewLayoutPreset {
    pub const ALL: [ViewLayoutPreset; 3] = [
        ViewLayoutPreset::Authored,
        ViewLayoutPreset::Split,
        ViewLayoutPreset::WireOnly,
    ];

    pub fn layouts(self) -> [ViewLayout; VIEW_COUNT] {
        match self {
            ViewLayoutPreset::Authored => AUTHORED_LAYOUT,
            ViewLayoutPreset::Split => SPLIT_LAYOUT,
            ViewLayoutPreset::WireOnly => WIRE_ONLY_LAYOUT,
        }
    }

    pub fn next(self) -> Self {
        match self {
            ViewLayoutPreset::Authored => ViewLayoutPreset::Split,
            ViewLayoutPreset::Split => ViewLayoutPreset::WireOnly,
            ViewLayoutPreset::WireOnly => ViewLayoutPreset::Authored,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewLayoutPreset::Authored => "authored",
            ViewLayoutPreset::Split => "split",
            ViewLayoutPreset::WireOnly => "wire_only",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }
}

/// Cycle view layouts with `V`. On the web the frontend switches layouts over RPC.
#[cfg(not(target_arch = "wasm32"))]
pub fn cycle_view_layout(
    mut preset: ResMut<ViewLayoutPreset>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    if keyboard.just_pressed(KeyCode::KeyV) {
        *preset = preset.next();
        info!("View layout: {}", preset.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_every_preset() {
        let mut preset = ViewLayoutPreset::default();
        let mut seen = Vec::new();
        for _ in 0..ViewLayoutPreset::ALL.len() {
            seen.push(preset);
            preset = preset.next();
        }
        assert_eq!(preset, ViewLayoutPreset::default());
        assert_eq!(seen, ViewLayoutPreset::ALL.to_vec());
    }

    #[test]
    fn test_names_round_trip() {
        for preset in ViewLayoutPreset::ALL {
            assert_eq!(ViewLayoutPreset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(ViewLayoutPreset::from_name("sideways"), None);
    }

    #[test]
    fn test_layout_fractions_stay_in_unit_range() {
        for preset in ViewLayoutPreset::ALL {
            for layout in preset.layouts() {
                assert!((0.0..=1.0).contains(&layout.height));
                assert!(layout.bottom + layout.height <= 1.0);
            }
        }
    }
}
