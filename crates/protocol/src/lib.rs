//! Shared protocol types for the idea-board application.
//!
//! This crate defines the types exchanged with the idea-board REST service
//! and the messages passed around inside the terminal client.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`idea`]: Ideas as returned by `GET /api/ideas` and the `POST` body
//! - [`cloud`]: Hosting metadata returned by `GET /api/cloud-info`
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Preparing a submission from user input:
//!
//! ```
//! use idea_board_protocol::{NewIdea, ProtocolError};
//!
//! let idea = NewIdea::new("  Build a rocket  ").unwrap();
//! assert_eq!(idea.content, "Build a rocket");
//!
//! assert!(matches!(NewIdea::new("   "), Err(ProtocolError::EmptyContent)));
//! ```

pub mod cloud;
pub mod error;
pub mod idea;
pub mod message;

// Re-export primary types at crate root for convenience
pub use cloud::{CloudInfo, CloudProvider, UNKNOWN};
pub use error::{ProtocolError, Result};
pub use idea::{Idea, IdeaId, MAX_IDEA_LENGTH, NewIdea};
pub use message::Message;
