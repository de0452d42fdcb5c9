//! Logging configuration.
//!
//! The terminal belongs to the UI while the application runs, so log
//! records go to a file instead of stderr.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default log level filter.
pub const DEFAULT_LEVEL: &str = "info";

/// Log file name used when no file is configured.
const DEFAULT_FILE_NAME: &str = "idea-board.log";

/// Configuration for log output.
///
/// # Examples
///
/// ```
/// use idea_board_config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// assert!(config.enabled);
/// assert_eq!(config.level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether to write a log file at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Level filter, in `tracing-subscriber` `EnvFilter` syntax.
    ///
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log file path. Defaults to `<cache dir>/idea-board/idea-board.log`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_enabled() -> bool {
    true
}

fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Returns the log file path, falling back to the user cache directory.
    ///
    /// Returns `None` when no file is configured and no cache directory
    /// can be determined.
    #[must_use]
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.clone().or_else(|| {
            dirs::cache_dir().map(|dir| dir.join(crate::persistence::APP_DIR).join(DEFAULT_FILE_NAME))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_wins() {
        let config = LoggingConfig {
            file: Some(PathBuf::from("/tmp/board.log")),
            ..Default::default()
        };
        assert_eq!(config.file_path(), Some(PathBuf::from("/tmp/board.log")));
    }

    #[test]
    fn default_file_lives_in_cache_dir() {
        if let Some(cache) = dirs::cache_dir() {
            let path = LoggingConfig::default().file_path().unwrap();
            assert!(path.starts_with(cache));
            assert!(path.ends_with("idea-board/idea-board.log"));
        }
    }

    #[test]
    fn file_not_serialized_when_none() {
        let json = serde_json::to_string(&LoggingConfig::default()).unwrap();
        assert!(!json.contains("file"));
    }
}
