//! Static scene content and the loaded models.
//!
//! The lit layer holds the ground, the light and the shadowed models; the
//! wire layer holds a reference grid and wireframe copies of the models.

/// Lit ground plane and the wire layer reference grid.
pub mod ground;

/// Directional and ambient lighting for the lit layer.
pub mod lighting;

/// Model groups, their wire copies and tracked anchors.
pub mod models;

/// Conversion of wire layer scene instances to wireframe rendering.
pub mod wireframe;
