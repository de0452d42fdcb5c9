//! Error types for idea-board API operations.
//!
//! The [`Display`](std::fmt::Display) text of each variant is what the board
//! shows to the user after an `Error: ` prefix, so HTTP status failures use
//! the exact `HTTP error! status: <code>` wording and transport failures
//! carry the underlying error text unchanged.

use std::error::Error as StdError;
use std::time::Duration;

/// Errors that can occur while talking to the idea-board backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The backend answered with a status outside `2xx`.
    #[error("HTTP error! status: {status}")]
    Status {
        /// The numeric HTTP status code.
        status: u16,
    },

    /// The request could not be sent or the response could not be read.
    #[error("{message}")]
    Transport {
        /// The underlying error text.
        message: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {} seconds", .after.as_secs())]
    Timeout {
        /// The timeout that elapsed.
        after: Duration,
    },

    /// The response body was not the expected JSON.
    #[error("{message}")]
    Decode {
        /// The underlying parse error text.
        message: String,
    },

    /// An endpoint URL could not be built from the base URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Creates a transport error with the given message.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code if this is a status error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// Classifies a `reqwest` error.
    ///
    /// `timeout` is the configured request timeout, reported when the
    /// error is a timeout.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout { after: timeout }
        } else if err.is_decode() {
            Self::Decode {
                message: error_chain(&err),
            }
        } else if let Some(status) = err.status() {
            Self::Status {
                status: status.as_u16(),
            }
        } else {
            Self::Transport {
                message: error_chain(&err),
            }
        }
    }
}

/// Joins an error and its sources into a single `a: b: c` message.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// A specialized Result type for API operations.
pub type Result<T> = std::result::Result<T, ClientError>;
