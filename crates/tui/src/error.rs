//! Error types for terminal handling.

use std::io;

/// Errors raised while taking over or handing back the terminal.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Result type alias for terminal operations.
pub type Result<T> = std::result::Result<T, TerminalError>;
