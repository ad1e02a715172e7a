//! Run settings
//!
//! Loaded from the JSON file named by the first command-line argument, or
//! `flapper.json` in the working directory. A missing file means defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_PIPE_COUNT, PIPE_COUNT};
use crate::error::InitError;

/// Default settings file name
pub const DEFAULT_SETTINGS_PATH: &str = "flapper.json";

/// Run settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of pipes in the registry (the bird is always added on top)
    pub pipe_count: usize,
    /// RNG seed; seeded from the wall clock when absent
    pub seed: Option<u64>,
    /// Quit after this many frames (runs until quit otherwise)
    pub max_frames: Option<u64>,

    // === Headless host ===
    /// Autopilot flaps once every N frames (0 = never)
    pub flap_every: u32,
    /// Frame pacing in milliseconds (stands in for vsync)
    pub frame_ms: u64,
    /// Directory sprites are loaded from
    pub assets_dir: String,
    /// Print an ASCII frame every N presents (0 = off)
    pub ascii_every: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pipe_count: PIPE_COUNT,
            seed: None,
            max_frames: None,

            flap_every: 22,
            frame_ms: 16,
            assets_dir: "assets".to_string(),
            ascii_every: 0,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, InitError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults if it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InitError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(InitError::SettingsRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Reject populations the registry cannot hold
    pub fn validate(&self) -> Result<(), InitError> {
        if self.pipe_count == 0 || self.pipe_count > MAX_PIPE_COUNT {
            return Err(InitError::Population {
                got: self.pipe_count,
                max: MAX_PIPE_COUNT,
            });
        }
        Ok(())
    }
}
