//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Registers the load gate, the per-frame view and timeline systems, and
/// the platform specific scroll and overlay bridges.
pub mod app_setup;

/// Scene lifecycle states and the per-frame system ordering.
pub mod app_state;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
