//! Game settings
//!
//! Loaded once at startup from an optional JSON file. Anything missing or
//! malformed falls back to defaults with a logged warning; the game never
//! aborts over configuration.

use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Startup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in simulation pixels
    pub field_width: f32,
    /// Playfield height in simulation pixels
    pub field_height: f32,
    /// Render the background starfield
    pub starfield: bool,
    /// Fixed RNG seed; None picks one from the clock
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            starfield: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Config file path: `STARFALL_CONFIG` env var, else `starfall.json`
    fn config_path() -> std::path::PathBuf {
        std::env::var("STARFALL_CONFIG")
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|_| std::path::PathBuf::from("starfall.json"))
    }

    /// Load settings from the config file, falling back to defaults
    pub fn load() -> Self {
        let path = Self::config_path();
        match std::fs::read_to_string(&path) {
            Ok(json) => Self::from_json(&json),
            Err(_) => {
                log::info!("no config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Parse settings from a JSON string, sanitizing bad values
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(err) => {
                log::warn!("config parse failed ({err}), using defaults");
                Self::default()
            }
        }
    }

    /// Reject non-finite or non-positive field dimensions
    fn sanitized(mut self) -> Self {
        if !self.field_width.is_finite() || self.field_width <= 0.0 {
            log::warn!(
                "invalid field_width {}, using {}",
                self.field_width,
                FIELD_WIDTH
            );
            self.field_width = FIELD_WIDTH;
        }
        if !self.field_height.is_finite() || self.field_height <= 0.0 {
            log::warn!(
                "invalid field_height {}, using {}",
                self.field_height,
                FIELD_HEIGHT
            );
            self.field_height = FIELD_HEIGHT;
        }
        self
    }
}
