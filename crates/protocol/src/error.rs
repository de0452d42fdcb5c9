//! Error types for the idea-board-protocol crate.
//!
//! This module defines the validation errors that can occur when building
//! protocol values from user input.

use thiserror::Error;

use crate::idea::MAX_IDEA_LENGTH;

/// Errors that can occur during protocol operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// The idea content was empty after trimming whitespace.
    #[error("invalid idea: content cannot be empty")]
    EmptyContent,

    /// The idea content exceeds the maximum length.
    #[error("invalid idea: content is {length} characters, maximum is {MAX_IDEA_LENGTH}")]
    ContentTooLong {
        /// Length of the rejected content, in characters.
        length: usize,
    },
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
