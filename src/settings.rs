//! Game settings and preferences
//!
//! Read from a JSON file at startup. Every field has a default, so a partial
//! file (or no file) is fine.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_POLL_MS;

/// Environment variable naming the settings file
pub const SETTINGS_ENV: &str = "TRI_JUMP_SETTINGS";
/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "tri-jump.json";

/// Host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Input wait per frame (ms). Physics is tuned per frame, so changing
    /// this changes game speed.
    pub poll_timeout_ms: u64,

    // === Credit banner ===
    /// Draw the scrolling credit once the score reaches 10
    pub show_credit: bool,
    pub credit_text: String,

    // === Flow ===
    /// Jump after game over starts a new game
    pub restart_on_jump: bool,

    // === Logging ===
    /// Default log filter when RUST_LOG is unset (e.g. "info", "debug")
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            poll_timeout_ms: FRAME_POLL_MS,

            show_credit: true,
            credit_text: "by @Tiramisu2_0".to_string(),

            restart_on_jump: true,

            log_level: None,
        }
    }
}

/// Failure to load a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(PathBuf, io::Error),
    Parse(PathBuf, serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(path, e) => write!(f, "cannot read {}: {}", path.display(), e),
            SettingsError::Parse(path, e) => {
                write!(f, "invalid settings in {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(_, e) => Some(e),
            SettingsError::Parse(_, e) => Some(e),
        }
    }
}

impl Settings {
    /// Frame length / input wait
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }

    /// Credit text to draw, if the banner is enabled
    pub fn credit(&self) -> Option<&str> {
        self.show_credit.then_some(self.credit_text.as_str())
    }

    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)
            .map_err(|e| SettingsError::Io(path.to_path_buf(), e))?;
        Self::from_json(&json).map_err(|e| SettingsError::Parse(path.to_path_buf(), e))
    }

    /// Settings file location: `$TRI_JUMP_SETTINGS`, else `tri-jump.json`
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Log the outcome of loading `path` and fall back to defaults on error
    pub fn or_default(path: &Path, loaded: Result<Self, SettingsError>) -> Self {
        match loaded {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(_, e)) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}
