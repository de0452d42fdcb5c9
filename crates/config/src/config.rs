//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the idea-board application.

use serde::{Deserialize, Serialize};

use crate::api::ApiConfig;
use crate::branding::Branding;
use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "IDEA_BOARD_API_URL";

/// The main configuration struct for the idea-board application.
///
/// # Examples
///
/// ```
/// use idea_board_config::{ApiConfig, Branding, Config};
///
/// let config = Config::default();
/// assert_eq!(config.api.base_url, "http://localhost:8000");
///
/// let config = Config {
///     api: ApiConfig::with_base_url("https://ideas.example.com"),
///     branding: Branding::new("acme"),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the backend lives and how long requests may take.
    #[serde(default)]
    pub api: ApiConfig,

    /// Footer branding.
    #[serde(default)]
    pub branding: Branding,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations and the environment.
    ///
    /// If no configuration file is found, the defaults are used. The
    /// `IDEA_BOARD_API_URL` environment variable is applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be read
    /// or parsed, or if the resulting configuration is invalid.
    pub async fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment overrides are not applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configuration is invalid.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides from a variable lookup.
    ///
    /// Blank values are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use idea_board_config::{API_URL_ENV, Config};
    ///
    /// let mut config = Config::default();
    /// config.apply_overrides(|key| {
    ///     (key == API_URL_ENV).then(|| "http://10.0.0.7:8080".to_string())
    /// });
    /// assert_eq!(config.api.base_url, "http://10.0.0.7:8080");
    /// ```
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API settings or the branding are invalid.
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;
        self.branding.validate()?;
        Ok(())
    }
}
