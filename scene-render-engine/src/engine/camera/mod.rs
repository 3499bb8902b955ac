//! View cameras for the lit and wire layers.
//!
//! Both cameras share a position and look at a common, mutable target; each
//! renders one render layer into its own sub-rectangle of the window.

/// Camera spawning, the shared look-at target and per-frame orientation.
pub mod scene_view;
