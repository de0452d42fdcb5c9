//! Configuration file reading and writing.
//!
//! Both JSON5 (`.json5`, comments and trailing commas allowed) and plain
//! JSON are accepted on read. Writes always produce pretty-printed JSON.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./idea-board.json5` or `./idea-board.json`
//! 2. User: `~/.config/idea-board/config.json5` or `~/.config/idea-board/config.json`

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Directory name used under the user config and cache directories.
pub const APP_DIR: &str = "idea-board";

/// Local configuration file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["idea-board.json5", "idea-board.json"];

/// User configuration file names, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file in the working directory or the user config directory.
///
/// # Examples
///
/// ```no_run
/// use idea_board_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let user_dir = dirs::config_dir().map(|d| d.join(APP_DIR));
    find_config_file_in(Path::new("."), user_dir.as_deref())
}

/// Finds the configuration file, looking in `local_dir` before `user_dir`.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = user_dir
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    local.chain(user).find(|path| path.is_file())
}

/// Returns the user configuration directory, typically `~/.config/idea-board/`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default user configuration file path.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join("config.json5"))
}

/// Reads and parses a configuration file (JSON5 or JSON).
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be parsed.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a configuration to a file as pretty-printed JSON.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written, or the
/// value cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_error)
}
