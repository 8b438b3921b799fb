//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local use.

use std::env;
use std::path::PathBuf;

use crate::db::keys;

/// Map zoom level used when centring on the user or a workout.
pub const DEFAULT_ZOOM_LEVEL: u8 = 14;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file backing the key-value store
    pub storage_path: PathBuf,
    /// Key under which the workout blob is stored
    pub storage_key: String,
    /// Zoom level for map views
    pub map_zoom_level: u8,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("workout_map.json"),
            storage_key: keys::WORKOUTS.to_string(),
            map_zoom_level: DEFAULT_ZOOM_LEVEL,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let map_zoom_level = match env::var("MAP_ZOOM_LEVEL") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("MAP_ZOOM_LEVEL", raw))?,
            Err(_) => DEFAULT_ZOOM_LEVEL,
        };

        Ok(Self {
            storage_path: env::var("WORKOUT_MAP_STORAGE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("workout_map.json")),
            storage_key: env::var("WORKOUT_MAP_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| keys::WORKOUTS.to_string()),
            map_zoom_level,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
