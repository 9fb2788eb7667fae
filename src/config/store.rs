//! Settings persistence
//!
//! One indented JSON document at a fixed per-user path. Loading never fails:
//! a missing, unreadable, or malformed file falls back to defaults so the
//! clock always starts. Saving returns a [`StorageError`] that callers log
//! and drop; the in-memory model stays authoritative for the session.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::model::ClockSettings;

/// A failed settings write. Never fatal; persistence is a convenience.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to create config directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write settings file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load/save endpoint for the settings document.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at the standard per-user location,
    /// `<config_dir>/clock-overlay/settings.json`.
    pub fn default_location() -> Self {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        Self { path }
    }

    /// Store at an explicit path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings document, falling back to defaults on any failure.
    /// All storage errors are absorbed here; the caller always gets a fully
    /// populated model.
    pub fn load(&self) -> ClockSettings {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No settings file, using defaults");
                return ClockSettings::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read settings file, using defaults");
                return ClockSettings::default();
            }
        };

        match serde_json::from_str::<ClockSettings>(&contents) {
            Ok(settings) => {
                info!(path = %self.path.display(), "Loaded settings");
                settings
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to parse settings file, using defaults");
                ClockSettings::default()
            }
        }
    }

    /// Write the settings document. Goes through a sibling temp file and a
    /// rename so a failed write never truncates the existing document.
    pub fn save(&self, settings: &ClockSettings) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = serde_json::to_string_pretty(settings)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents).map_err(|source| StorageError::Write {
            path: tmp_path.clone(),
            source,
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}
