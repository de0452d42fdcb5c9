//! Board state management.
//!
//! This module holds everything the board shows: the ideas list and the
//! outcome of the latest list fetch, the draft being typed, the cloud badge
//! and the help overlay flag. Applying request outcomes here keeps the
//! controller free of state rules.

use idea_board_client::ClientError;
use idea_board_protocol::{CloudInfo, Idea, MAX_IDEA_LENGTH, NewIdea, ProtocolError};
use tracing::{debug, warn};

/// Outcome of the most recent list fetch.
///
/// A single enum, so a fetch can never be loading and failed at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListStatus {
    /// No fetch has been issued yet.
    #[default]
    Idle,
    /// A fetch is outstanding.
    Loading,
    /// The ideas reflect the most recent successful fetch.
    Ready,
    /// The most recent fetch or submission failed with this message.
    Failed(String),
}

/// The board state.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    /// Ideas from the most recent successful fetch, in backend order.
    pub ideas: Vec<Idea>,
    /// Outcome of the most recent fetch.
    pub status: ListStatus,
    /// The text being composed. Never trimmed in place.
    pub draft: String,
    /// Hosting metadata for the badge.
    pub cloud: CloudInfo,
    /// Index of the first idea shown in the list.
    pub scroll: usize,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl BoardState {
    /// Creates an empty board that has not fetched anything yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use idea_board_tui::{BoardState, ListStatus};
    ///
    /// let state = BoardState::new();
    /// assert_eq!(state.status, ListStatus::Idle);
    /// assert!(state.ideas.is_empty());
    /// assert!(!state.cloud.is_known());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while the list is loading or before the first fetch.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.status, ListStatus::Idle | ListStatus::Loading)
    }

    /// Returns the error message to display, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ListStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enters the loading state ahead of a list fetch.
    ///
    /// Ideas already on the board are kept.
    pub fn begin_fetch(&mut self) {
        self.status = ListStatus::Loading;
    }

    /// Applies the outcome of a list fetch.
    ///
    /// On success the ideas are replaced wholesale; on failure they are left
    /// untouched and the error message is recorded.
    pub fn apply_fetch(&mut self, result: Result<Vec<Idea>, ClientError>) {
        match result {
            Ok(ideas) => {
                debug!(count = ideas.len(), "ideas list replaced");
                self.ideas = ideas;
                self.status = ListStatus::Ready;
                self.clamp_scroll();
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch ideas");
                self.status = ListStatus::Failed(err.to_string());
            }
        }
    }

    /// Builds the submission for the current draft.
    ///
    /// Returns `None` when the trimmed draft is empty (or over the length
    /// cap), in which case nothing should be sent and nothing changes.
    #[must_use]
    pub fn prepare_submission(&self) -> Option<NewIdea> {
        match NewIdea::new(&self.draft) {
            Ok(idea) => Some(idea),
            Err(ProtocolError::EmptyContent) => None,
            Err(err) => {
                warn!(error = %err, "refusing to submit draft");
                None
            }
        }
    }

    /// Applies the outcome of a submission.
    ///
    /// Returns `true` when the list must be refetched. On failure the draft
    /// is kept so the user can resubmit.
    #[must_use]
    pub fn apply_submission(&mut self, result: Result<(), ClientError>) -> bool {
        match result {
            Ok(()) => {
                self.draft.clear();
                true
            }
            Err(err) => {
                warn!(error = %err, "failed to submit idea");
                self.status = ListStatus::Failed(err.to_string());
                false
            }
        }
    }

    /// Applies the outcome of the cloud-info lookup.
    ///
    /// Failures keep the current (default) info and are never shown.
    pub fn apply_cloud_info(&mut self, result: Result<CloudInfo, ClientError>) {
        match result {
            Ok(info) => self.cloud = info,
            Err(err) => debug!(error = %err, "cloud info unavailable"),
        }
    }

    /// Appends a character to the draft.
    ///
    /// Control characters and input past [`MAX_IDEA_LENGTH`] characters
    /// are ignored. Returns `true` if the character was added.
    pub fn input_char(&mut self, ch: char) -> bool {
        if ch.is_control() || self.draft_len() >= MAX_IDEA_LENGTH {
            return false;
        }
        self.draft.push(ch);
        true
    }

    /// Removes the last character of the draft.
    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    /// Clears the draft.
    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Returns the draft length in characters.
    #[must_use]
    pub fn draft_len(&self) -> usize {
        self.draft.chars().count()
    }

    /// Scrolls the list up by one idea.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scrolls the list down by one idea, stopping at the last one.
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
        self.clamp_scroll();
    }

    /// Keeps the scroll offset within the ideas list.
    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.ideas.len().saturating_sub(1));
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::replace(&mut self.help_visible, false)
    }
}
