//! Authored constants for the dual-view scroll scene.
//!
//! Colours, camera and light settings, view layouts and the scroll timeline
//! table live here so the engine crate only carries behaviour.

pub mod coordinate_system;
pub mod dom;
pub mod path;
pub mod render_settings;
pub mod timeline;
pub mod views;
