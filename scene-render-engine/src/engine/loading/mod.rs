//! Asset loading and the gate that reveals the scene.
//!
//! The manifest is loaded first; its models are then requested together and
//! tracked by a `LoadGate` that fires exactly once when all of them settle.

/// Order-independent completion tracking for a fixed set of named assets.
pub mod load_gate;

/// Scene manifest loading and model request dispatch.
pub mod manifest_loader;

/// Model load state polling, failure reporting and the transition to `Running`.
pub mod model_loader;

/// Loading progress resource shared by the loader systems.
pub mod progress;

/// Reveal of the scene once the gate fires.
pub mod reveal;
