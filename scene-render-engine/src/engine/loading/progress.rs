use bevy::prelude::*;

use super::load_gate::LoadGate;
use crate::error::SceneError;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub failed: bool,
    pub gate: LoadGate,
}

/// Raised whenever a load cannot complete; handled once per failure.
#[derive(Event, Debug, Clone)]
pub struct AssetLoadFailed {
    pub error: SceneError,
}
