//! Error types
//!
//! Initialization failures are fatal and abort startup before the frame loop.
//! Asset failures are absorbed by the entity that asked for the asset.
//! Nothing on the per-frame path can fail.

use std::path::PathBuf;

/// Startup failed; the game never enters the frame loop.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings {path}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for [`crate::Settings`].
    #[error("invalid settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    /// The requested pipe population is out of range.
    #[error("pipe_count must be between 1 and {max}, got {got}")]
    Population { got: usize, max: usize },
}

/// A sprite could not be loaded. Non-fatal.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read asset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not decode as a PNG image.
    #[error("failed to decode asset {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
