//! Persisted client settings.
//!
//! A small TOML file under the application root holds everything the client
//! needs to find its classification service. A missing file yields defaults;
//! a malformed file is reported so the caller can decide how to degrade.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::app_dirs;

/// Filename used to store the client settings.
pub const SETTINGS_FILE_NAME: &str = "config.toml";

/// Base URL used when no settings file exists.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Client settings persisted between launches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the classification service.
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl Settings {
    /// Parse and validate the configured server URL.
    pub fn server_url(&self) -> Result<Url, SettingsError> {
        Url::parse(&self.server_url).map_err(|source| SettingsError::InvalidServerUrl {
            url: self.server_url.clone(),
            source,
        })
    }
}

/// Errors that may occur while loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The application directory could not be resolved or created.
    #[error("Failed to prepare settings directory: {0}")]
    AppDir(app_dirs::AppDirError),
    /// Failed to read the settings file.
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The settings file is not valid TOML for this schema.
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to write the settings file.
    #[error("Failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to serialize settings to TOML.
    #[error("Failed to serialize settings: {0}")]
    Serialize(toml::ser::Error),
    /// The configured server URL is not a valid URL.
    #[error("Invalid server URL {url}: {source}")]
    InvalidServerUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Resolve the settings file path inside the application root.
pub fn settings_path() -> Result<PathBuf, SettingsError> {
    let dir = app_dirs::app_root_dir().map_err(SettingsError::AppDir)?;
    Ok(dir.join(SETTINGS_FILE_NAME))
}

/// Load settings from disk, returning defaults if no file exists.
pub fn load_or_default() -> Result<Settings, SettingsError> {
    load_from(&settings_path()?)
}

/// Load settings from a specific path, returning defaults if missing.
pub fn load_from(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist settings to disk, overwriting any previous contents.
pub fn save(settings: &Settings) -> Result<(), SettingsError> {
    save_to_path(settings, &settings_path()?)
}

/// Save settings to a specific path, creating parent directories as needed.
pub fn save_to_path(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let text = toml::to_string_pretty(settings).map_err(SettingsError::Serialize)?;
    std::fs::write(path, text).map_err(|source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    })
}
