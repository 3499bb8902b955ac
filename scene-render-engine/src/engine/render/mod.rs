//! Window sizing and the per-view sub-rectangles each camera renders into.

/// Viewport size tracking, view rectangles and camera viewport updates.
pub mod viewport_layout;
