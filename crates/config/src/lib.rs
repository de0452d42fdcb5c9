//! Configuration management for the idea-board application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files, an environment override, and built-in defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`api`]: Backend location and request timeout
//! - [`branding`]: Footer branding injected at start time
//! - [`logging`]: Log level and log file location
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variable `IDEA_BOARD_API_URL` (overrides `api.base_url`)
//! 2. Local config (`./idea-board.json5` or `./idea-board.json`)
//! 3. User config (`~/.config/idea-board/config.json5` or `~/.config/idea-board/config.json`)
//! 4. Built-in defaults
//!
//! # Example File
//!
//! ```json5
//! {
//!   api: { base_url: "http://localhost:8000", timeout_secs: 10 },
//!   branding: { name: "cheetah" },
//!   logging: { level: "debug", file: "/tmp/idea-board.log" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use idea_board_config::Config;
//!
//! # async fn example() -> idea_board_config::Result<()> {
//! let config = Config::load().await?;
//! println!("Talking to {}", config.api.base_url()?);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod branding;
pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use api::ApiConfig;
pub use branding::Branding;
pub use config::{API_URL_ENV, Config};
pub use error::{ConfigError, Result};
pub use logging::LoggingConfig;
