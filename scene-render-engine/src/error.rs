//! Error types for scene loading, layout and projection.

/// Failures the scene can surface. Reduced motion and missing overlay
/// elements are ordinary branches and never appear here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    #[error("Failed to load asset '{asset}': {reason}")]
    AssetLoad { asset: String, reason: String },

    #[error("Asset '{0}' is not tracked by the load gate")]
    UnknownAsset(String),

    #[error("Scene manifest error: {message}")]
    Manifest { message: String },

    #[error("Viewport has zero size ({width}x{height})")]
    ResizeObservation { width: u32, height: u32 },

    #[error("Degenerate projection (clip w = {clip_w})")]
    ProjectionDegenerate { clip_w: f32 },
}

pub type SceneResult<T> = Result<T, SceneError>;

impl SceneError {
    pub fn asset_load(asset: impl Into<String>, reason: impl ToString) -> Self {
        Self::AssetLoad {
            asset: asset.into(),
            reason: reason.to_string(),
        }
    }

    pub fn manifest(message: impl Into<String>) -> Self {
        Self::Manifest {
            message: message.into(),
        }
    }
}
