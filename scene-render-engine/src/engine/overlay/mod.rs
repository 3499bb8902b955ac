//! Screen-space overlays anchored to points in the lit scene.
//!
//! Each `TrackedPoint` is projected through the lit view camera once per
//! frame, after transforms and camera matrices are final. The resulting
//! offsets are written to DOM elements on the web and to `bevy_ui` labels
//! natively.

#[cfg(target_arch = "wasm32")]
pub mod dom_overlay;

#[cfg(not(target_arch = "wasm32"))]
pub mod native_overlay;

/// World to normalised screen projection and overlay offset mapping.
pub mod projector;

/// Tracked anchor components and the per-frame projection system.
pub mod tracked_points;
