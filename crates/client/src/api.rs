//! The backend contract used by the board.
//!
//! [`IdeaApi`] is the seam between the board controller and the network:
//! the terminal client uses [`HttpIdeaApi`](crate::HttpIdeaApi), tests plug
//! in scripted implementations.

use async_trait::async_trait;
use idea_board_protocol::{CloudInfo, Idea, NewIdea};

use crate::error::Result;

/// Operations the idea-board backend offers.
#[async_trait]
pub trait IdeaApi: Send + Sync {
    /// Lists all ideas, in the order the backend returns them (`GET /api/ideas`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-`2xx` status, or a body
    /// that is not a JSON array of ideas.
    async fn list_ideas(&self) -> Result<Vec<Idea>>;

    /// Submits a new idea (`POST /api/ideas`).
    ///
    /// Only the status is checked; the response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-`2xx` status.
    async fn submit_idea(&self, idea: &NewIdea) -> Result<()>;

    /// Looks up where the backend is hosted (`GET /api/cloud-info`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-`2xx` status, or a
    /// malformed body.
    async fn cloud_info(&self) -> Result<CloudInfo>;
}
