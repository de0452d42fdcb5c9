//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to update the board.
///
/// # Examples
///
/// ```
/// use idea_board_protocol::Message;
///
/// let msg = Message::Input { ch: 'a' };
/// assert!(msg.is_draft_edit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Append a character to the draft.
    Input {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the draft.
    Backspace,
    /// Clear the whole draft.
    ClearDraft,
    /// Submit the current draft.
    Submit,
    /// Refetch the ideas list.
    Refresh,
    /// Scroll the ideas list up by one idea.
    ScrollUp,
    /// Scroll the ideas list down by one idea.
    ScrollDown,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Escape: dismiss the help overlay.
    Escape,
    /// Quit the application.
    Quit,
}

impl Message {
    /// Returns `true` if this message edits the draft.
    ///
    /// # Examples
    ///
    /// ```
    /// use idea_board_protocol::Message;
    ///
    /// assert!(Message::Backspace.is_draft_edit());
    /// assert!(!Message::Submit.is_draft_edit());
    /// ```
    #[must_use]
    pub fn is_draft_edit(&self) -> bool {
        matches!(
            self,
            Self::Input { .. } | Self::Backspace | Self::ClearDraft
        )
    }

    /// Returns `true` if this message issues a request to the backend.
    #[must_use]
    pub fn is_request(&self) -> bool {
        matches!(self, Self::Submit | Self::Refresh)
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use idea_board_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
