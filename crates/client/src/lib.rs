//! Idea-board API client.
//!
//! This crate talks to the idea-board REST service on behalf of the
//! terminal board.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`IdeaApi`]: The backend contract the board controller depends on
//! - [`HttpIdeaApi`]: The `reqwest` implementation of that contract
//! - [`ClientError`]: Error types whose messages are shown to the user
//!
//! # Endpoints
//!
//! | Method | Path | Body | Result |
//! |--------|------|------|--------|
//! | `GET` | `/api/ideas` | none | JSON array of ideas |
//! | `POST` | `/api/ideas` | `{"content": "..."}` | any `2xx`, body ignored |
//! | `GET` | `/api/cloud-info` | none | `{"cloud_provider": "...", "region": "..."}` |
//!
//! # Examples
//!
//! ```no_run
//! use std::time::Duration;
//! use idea_board_client::{HttpIdeaApi, IdeaApi};
//! use idea_board_protocol::NewIdea;
//!
//! # async fn example() -> idea_board_client::Result<()> {
//! let api = HttpIdeaApi::new("http://localhost:8000".parse().unwrap(), Duration::from_secs(10))?;
//!
//! api.submit_idea(&NewIdea::new("Solar-powered kettle").unwrap()).await?;
//! let ideas = api.list_ideas().await?;
//! println!("{} ideas on the board", ideas.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;

pub use api::IdeaApi;
pub use client::HttpIdeaApi;
pub use error::{ClientError, Result};
