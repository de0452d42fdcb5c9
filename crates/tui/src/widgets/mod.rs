//! Widget components for the idea board.
//!
//! Each widget is a pure function that renders state into a [`Buffer`],
//! which keeps rendering easy to test and compose.
//!
//! # Modules
//!
//! - [`header`]: Title and cloud badge
//! - [`input`]: Draft input box with counter and submit hint
//! - [`idea_list`]: Ideas list with loading and empty states, and the error line
//! - [`footer`]: Branding line
//! - [`status_bar`]: Key hints
//! - [`help`]: Help overlay
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use idea_board_tui::{BoardState, widgets};
//!
//! let state = BoardState::new();
//! let area = Rect::new(0, 0, 80, 20);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_idea_list(&state, area, &mut buf);
//! ```
//!
//! [`Buffer`]: ratatui::buffer::Buffer

pub mod footer;
pub mod header;
pub mod help;
pub mod idea_list;
pub mod input;
pub mod status_bar;

pub use footer::render_footer;
pub use header::{cloud_badge, render_header};
pub use help::render_help_overlay;
pub use idea_list::{error_line_height, render_error_line, render_idea_list};
pub use input::render_input;
pub use status_bar::render_status_bar;
