use bevy::prelude::*;

/// Scene lifecycle. `Running` is entered exactly once, when the load gate fires.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum SceneState {
    #[default]
    Loading,
    Running,
    Failed,
}

/// Per-frame ordering inside `Update`: timeline writes transforms before
/// the view cameras are oriented and laid out.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneFrameSet {
    Input,
    Timeline,
    Views,
}

#[derive(Component)]
pub struct LoadingText;

#[derive(Component)]
pub struct HudText;
