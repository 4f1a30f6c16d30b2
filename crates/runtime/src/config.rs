//! Hotkey configuration, persisted as JSON.
//!
//! A single remappable binding, loaded once at startup and written back
//! when the host's settings UI changes it. Missing files yield the
//! default binding rather than an error.
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{ConfigError, Result};

/// A host input button, identified by the host's label for it (e.g. "G").
///
/// The runtime only ever compares labels for equality; interpreting them
/// is the host's concern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Button(pub String);

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }
}

impl std::fmt::Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Persisted mod settings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ModConfig {
    /// The hotkey that consumes/uses the hovered inventory item.
    pub hotkey: Button,
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            hotkey: Button::new(Self::DEFAULT_HOTKEY),
        }
    }
}

impl ModConfig {
    pub const DEFAULT_HOTKEY: &'static str = "G";
    pub const FILE_NAME: &'static str = "config.json";

    /// Platform config-dir location for the settings file.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "quickuse")
            .map(|dirs| dirs.config_dir().join(Self::FILE_NAME))
    }

    /// Loads the config, falling back to defaults when the file does not
    /// exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let bytes = fs::read(path).map_err(ConfigError::Io)?;
        let config = serde_json::from_slice(&bytes)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;

        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Writes the config via a temp file and atomic rename.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }

        let bytes = serde_json::to_vec_pretty(self)
            .map_err(|e| ConfigError::Serialization(e.to_string()))?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, bytes).map_err(ConfigError::Io)?;
        fs::rename(&temp_path, path).map_err(ConfigError::Io)?;

        tracing::debug!("saved config to {}", path.display());
        Ok(())
    }
}
