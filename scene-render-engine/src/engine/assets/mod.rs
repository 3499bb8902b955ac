//! Scene manifest and loaded model bookkeeping.

/// Scene manifest listing the models to load, their corrections and anchors.
pub mod scene_manifest;

/// Handles and spawned entities for every manifest model.
pub mod scene_models;
