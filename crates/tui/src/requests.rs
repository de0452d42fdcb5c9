//! Background requests to the idea-board backend.
//!
//! Every request runs as its own task in a [`JoinSet`] and reports its
//! outcome over a channel as an [`ApiEvent`]. The controller drains the
//! channel between frames. Dropping [`Requests`] aborts whatever is still
//! running, and results that arrive after that are discarded.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use idea_board_client::{IdeaApi, Result};
use idea_board_protocol::{CloudInfo, Idea, NewIdea};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinSet;
use tracing::{debug, error};

/// The outcome of a finished request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    /// `GET /api/ideas` completed.
    IdeasFetched(Result<Vec<Idea>>),
    /// `POST /api/ideas` completed.
    IdeaSubmitted(Result<()>),
    /// `GET /api/cloud-info` completed.
    CloudInfoFetched(Result<CloudInfo>),
}

/// Issues requests and collects their outcomes.
pub struct Requests {
    api: Arc<dyn IdeaApi>,
    tx: UnboundedSender<ApiEvent>,
    rx: UnboundedReceiver<ApiEvent>,
    tasks: JoinSet<()>,
}

impl fmt::Debug for Requests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requests")
            .field("in_flight", &self.tasks.len())
            .finish_non_exhaustive()
    }
}

impl Requests {
    /// Creates a request runner backed by `api`.
    #[must_use]
    pub fn new(api: Arc<dyn IdeaApi>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            api,
            tx,
            rx,
            tasks: JoinSet::new(),
        }
    }

    /// Returns the number of requests whose task has not been reaped yet.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Starts a list fetch.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn fetch_ideas(&mut self) {
        let api = Arc::clone(&self.api);
        self.spawn(async move { ApiEvent::IdeasFetched(api.list_ideas().await) });
    }

    /// Starts a submission.
    pub fn submit(&mut self, idea: NewIdea) {
        let api = Arc::clone(&self.api);
        self.spawn(async move { ApiEvent::IdeaSubmitted(api.submit_idea(&idea).await) });
    }

    /// Starts the cloud-info lookup.
    pub fn fetch_cloud_info(&mut self) {
        let api = Arc::clone(&self.api);
        self.spawn(async move { ApiEvent::CloudInfoFetched(api.cloud_info().await) });
    }

    fn spawn<F>(&mut self, request: F)
    where
        F: Future<Output = ApiEvent> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.tasks.spawn(async move {
            let event = request.await;
            if tx.send(event).is_err() {
                debug!("board closed, dropping late response");
            }
        });
    }

    /// Returns the next outcome that is already available, without waiting.
    pub fn try_next(&mut self) -> Option<ApiEvent> {
        while let Some(joined) = self.tasks.try_join_next() {
            log_join_failure(joined);
        }
        self.rx.try_recv().ok()
    }

    /// Waits for the next outcome.
    ///
    /// Returns `None` once no request is running and every outcome has been
    /// handed out.
    pub async fn next(&mut self) -> Option<ApiEvent> {
        loop {
            if let Ok(event) = self.rx.try_recv() {
                return Some(event);
            }
            if self.tasks.is_empty() {
                return None;
            }
            tokio::select! {
                Some(event) = self.rx.recv() => return Some(event),
                Some(joined) = self.tasks.join_next() => log_join_failure(joined),
                else => return None,
            }
        }
    }
}

fn log_join_failure(joined: std::result::Result<(), tokio::task::JoinError>) {
    if let Err(err) = joined {
        if err.is_panic() {
            error!(error = %err, "request task panicked");
        }
    }
}
