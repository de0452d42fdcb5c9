//! Terminal UI for the idea board.
//!
//! This crate provides a Ratatui-based board that lists ideas from the
//! backend and lets the user submit new ones.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: The board controller and run loop
//! - [`state`]: Board state and the rules for applying request outcomes
//! - [`requests`]: Background request tasks and their outcomes
//! - [`event`]: Event polling and key mappings
//! - [`widgets`]: Pure rendering functions
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//!
//! # Example
//!
//! ```no_run
//! use std::{sync::Arc, time::Duration};
//! use idea_board_client::HttpIdeaApi;
//! use idea_board_config::Branding;
//! use idea_board_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let api = HttpIdeaApi::new("http://localhost:8000".parse()?, Duration::from_secs(10))?;
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(Arc::new(api), Branding::default());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod error;
pub mod event;
pub mod layout;
pub mod requests;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use error::TerminalError;
pub use requests::{ApiEvent, Requests};
pub use state::{BoardState, ListStatus};
