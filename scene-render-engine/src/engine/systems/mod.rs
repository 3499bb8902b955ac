//! Runtime systems for view switching, diagnostics and exit handling.

/// Frame rate notifications and the native HUD.
pub mod diagnostics;

/// View layout presets and keyboard switching between them.
pub mod view_mode;

#[cfg(not(target_arch = "wasm32"))]
pub mod exit;
