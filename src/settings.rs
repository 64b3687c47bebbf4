use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS};
use crate::grid::GridSize;

const APP_DIR_NAME: &str = "torus-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Smallest playable board edge in cells.
pub const MIN_GRID_EDGE: u16 = 2;

/// Smallest supported interval between movement ticks in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 1;

/// Errors raised while loading or saving the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persisted user preferences, merged with CLI flags at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_width: u16,
    pub grid_height: u16,
    pub tick_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Returns the configured board dimensions.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize {
            width: self.grid_width,
            height: self.grid_height,
        }
    }

    /// Returns a copy with out-of-range values raised to their minimums.
    ///
    /// The settings file is user-edited, so a zero board edge or a zero tick
    /// interval can reach us from disk; both the load path and the CLI
    /// overrides run through this before the values drive the game.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.grid_width = self.grid_width.max(MIN_GRID_EDGE);
        self.grid_height = self.grid_height.max(MIN_GRID_EDGE);
        self.tick_interval_ms = self.tick_interval_ms.max(MIN_TICK_INTERVAL_MS);
        self
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from disk.
///
/// Returns defaults when the file does not yet exist (first run). Returns
/// `Err` when the file exists but cannot be read or parsed, so the caller
/// can surface a warning before entering raw terminal mode.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from_path(&settings_path())
}

/// Saves settings to disk, creating parent directories when needed.
pub fn save_settings(settings: &Settings) -> Result<(), SettingsError> {
    save_settings_to_path(&settings_path(), settings)
}

fn load_settings_from_path(path: &Path) -> Result<Settings, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };

    let settings: Settings = serde_json::from_str(&raw)?;
    Ok(settings.sanitized())
}

fn save_settings_to_path(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
