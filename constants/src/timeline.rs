use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimatedObject {
    Rocket,
    Tree,
}

impl AnimatedObject {
    pub const ALL: [AnimatedObject; 2] = [AnimatedObject::Rocket, AnimatedObject::Tree];

    /// Name of the manifest model this object drives.
    pub fn model_name(self) -> &'static str {
        match self {
            AnimatedObject::Rocket => "rocket",
            AnimatedObject::Tree => "tree",
        }
    }

    pub fn from_model_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|object| object.model_name() == name)
    }

    /// Position the object rests at once loading finishes.
    pub fn resting_position(self) -> Vec3 {
        match self {
            AnimatedObject::Rocket => ROCKET_RESTING_POSITION,
            AnimatedObject::Tree => TREE_RESTING_POSITION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power2InOut,
    Power4In,
}

/// One property tween. Starts at `section` (in timeline units) and runs for
/// `DEFAULT_TWEEN_DURATION` towards `value`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub section: u32,
    pub object: AnimatedObject,
    pub axis: Axis,
    pub value: f32,
    pub ease: Option<Ease>,
}

const fn tween(section: u32, object: AnimatedObject, axis: Axis, value: f32) -> TweenSpec {
    TweenSpec {
        section,
        object,
        axis,
        value,
        ease: None,
    }
}

const fn tween_eased(
    section: u32,
    object: AnimatedObject,
    axis: Axis,
    value: f32,
    ease: Ease,
) -> TweenSpec {
    TweenSpec {
        section,
        object,
        axis,
        value,
        ease: Some(ease),
    }
}

pub const ROCKET_RESTING_POSITION: Vec3 = Vec3::new(5.0, 0.0, 0.0);
pub const TREE_RESTING_POSITION: Vec3 = Vec3::new(-5.0, 0.0, 0.0);

pub const DEFAULT_TWEEN_DURATION: f32 = 1.0;
pub const DEFAULT_EASE: Ease = Ease::Power2InOut;

/// Seconds the scrubbed playhead takes to settle on the scroll position.
pub const SCRUB_SMOOTHING_SECONDS: f32 = 0.1;

/// Native mouse wheel steps, as a fraction of the full scroll range.
pub const WHEEL_LINE_PROGRESS: f32 = 0.02;
pub const WHEEL_PIXEL_PROGRESS: f32 = 0.0005;

pub const TIMELINE: &[TweenSpec] = &[
    tween(0, AnimatedObject::Rocket, Axis::X, 1.0),
    tween(0, AnimatedObject::Tree, Axis::X, -1.0),
    tween(1, AnimatedObject::Rocket, Axis::Z, 2.0),
    tween_eased(1, AnimatedObject::Tree, Axis::X, -5.0, Ease::Power4In),
    tween(2, AnimatedObject::Rocket, Axis::Z, -1.0),
    tween(2, AnimatedObject::Rocket, Axis::Y, 4.0),
    tween_eased(2, AnimatedObject::Tree, Axis::X, -5.0, Ease::Power4In),
];
