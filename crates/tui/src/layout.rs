//! Centralized layout measurements for the TUI.
//!
//! Row heights of the board, top to bottom.

/// Height of the header bar (title and cloud badge) in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the input box in rows, borders included.
pub const INPUT_HEIGHT: u16 = 3;

/// Height of the error line in rows when the message fits on one row.
pub const ERROR_HEIGHT: u16 = 1;

/// Rows a long error message may wrap onto before it is cut.
pub const MAX_ERROR_HEIGHT: u16 = 4;

/// Height of the footer in rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Height of the key hint bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Minimum terminal height for useful rendering.
///
/// Below this height, we display a "terminal too small" message. The fixed
/// rows take 10, leaving a bordered list with one visible row.
pub const MIN_HEIGHT: u16 = 12;

/// Minimum terminal width for useful rendering.
pub const MIN_WIDTH: u16 = 40;
