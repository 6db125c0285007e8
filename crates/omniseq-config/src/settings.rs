//! The on-disk settings file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("no home directory available on this platform")]
    NoProjectDirs,
    #[error("reading settings: {0}")]
    Io(#[from] io::Error),
    #[error("parsing settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("encoding settings: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Persisted preferences. A missing `theme` key means "unset": the
/// environment decides, and nothing is written back on read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Settings {
    /// Default settings path: `<config dir>/omniseq/config.toml`.
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let dirs = ProjectDirs::from("", "", "omniseq").ok_or(SettingsError::NoProjectDirs)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load settings. A missing file is the empty settings, not an error.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(toml::from_str(&text)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
