//! Configuration module for mediashelf
//!
//! Manages the remote service location and local session storage.
//! Configuration is stored in the user's config directory and may be
//! overridden with `MEDIASHELF_*` environment variables.

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Service URL used when none is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Keys accepted by `config get` / `config set`
pub const KEYS: &[&str] = &["api_url", "share_base_url", "token_store", "timeout_secs", "quiet"];

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Base URL of the media service API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Base URL share links are built on (defaults to `api_url`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_base_url: Option<String>,

    /// Location of the persisted session token store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_store: Option<PathBuf>,

    /// Request timeout in seconds; transport default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            share_base_url: None,
            token_store: None,
            timeout_secs: None,
            quiet: false,
        }
    }
}

impl ShelfConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("mediashelf").join("config.toml"))
    }

    /// Load configuration from `path` with environment overrides
    ///
    /// A missing file yields defaults (plus overrides).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("MEDIASHELF").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be located or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration, running first-time setup if no config file exists
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        if Self::config_path()?.exists() {
            Self::load()
        } else {
            first_time_setup()
        }
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Base URL for share links
    #[must_use]
    pub fn share_base(&self) -> &str {
        self.share_base_url.as_deref().unwrap_or(&self.api_url)
    }

    /// Request timeout, if configured
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Location of the token store
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no path is configured and the system data
    /// directory cannot be determined.
    pub fn token_store_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.token_store {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;
        Ok(data_dir.join("mediashelf").join("session"))
    }

    /// Read a setting by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api_url" => Some(self.api_url.clone()),
            "share_base_url" => Some(self.share_base().to_string()),
            "token_store" => self.token_store.as_ref().map(|p| p.display().to_string()),
            "timeout_secs" => self.timeout_secs.map(|t| t.to_string()),
            "quiet" => Some(self.quiet.to_string()),
            _ => None,
        }
    }

    /// Change a setting by key; an empty value unsets optional settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for unknown keys or values that do not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "api_url" => {
                if value.is_empty() {
                    return Err(ConfigError::Message("api_url cannot be empty".to_string()));
                }
                self.api_url = value.to_string();
            }
            "share_base_url" => {
                self.share_base_url = (!value.is_empty()).then(|| value.to_string());
            }
            "token_store" => {
                self.token_store = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "timeout_secs" => {
                self.timeout_secs = if value.is_empty() {
                    None
                } else {
                    Some(value.parse().map_err(|e| {
                        ConfigError::Message(format!("Invalid timeout_secs '{value}': {e}"))
                    })?)
                };
            }
            "quiet" => {
                self.quiet = value
                    .parse()
                    .map_err(|e| ConfigError::Message(format!("Invalid quiet '{value}': {e}")))?;
            }
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown setting '{key}'. Valid settings: {}",
                    KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
