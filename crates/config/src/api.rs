//! Backend API configuration.
//!
//! This module provides the [`ApiConfig`] type which locates the idea-board
//! REST service and bounds how long any single request may take.
//!
//! # Timeouts
//!
//! Every request is bounded by `timeout_secs` so that a stalled backend
//! cannot leave the board loading forever. A timed-out request is reported
//! like any other transport failure.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ConfigError, Result};

/// Default backend location.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default request timeout (10 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Minimum allowed request timeout (1 second).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum allowed request timeout (5 minutes).
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Configuration for reaching the backend.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use idea_board_config::ApiConfig;
///
/// let config = ApiConfig::default();
/// assert_eq!(config.base_url, "http://localhost:8000");
/// assert_eq!(config.timeout(), Duration::from_secs(10));
///
/// let config = ApiConfig::with_base_url("https://ideas.example.com");
/// assert_eq!(config.base_url().unwrap().host_str(), Some("ideas.example.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the `/api/...` paths are resolved against.
    ///
    /// A path prefix is preserved, so `http://host/board` resolves the list
    /// endpoint to `http://host/board/api/ideas`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Creates an API configuration for the given base URL with the default timeout.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parses the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not parse, is
    /// not `http` or `https`, or has no host.
    pub fn base_url(&self) -> Result<Url> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason,
        };

        let url = Url::parse(self.base_url.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host".to_string()));
        }
        Ok(url)
    }

    /// Validates the API configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the timeout is outside
    /// `MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS`.
    pub fn validate(&self) -> Result<()> {
        self.base_url()?;

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::InvalidTimeout {
                reason: format!(
                    "timeout {} is outside the allowed range of {}..={} seconds",
                    self.timeout_secs, MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }
}
