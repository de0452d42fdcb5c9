//! Test utilities for the TUI crate.
//!
//! This module provides common helpers used across test modules: buffer
//! rendering for assertions and a scripted [`IdeaApi`] that stands in for
//! the backend.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use idea_board_client::{ClientError, IdeaApi, Result};
use idea_board_protocol::{CloudInfo, Idea, NewIdea};
use ratatui::buffer::Buffer;
use tokio::sync::Notify;

/// Converts a ratatui [`Buffer`] to a string representation.
///
/// Each row of the buffer becomes a line in the output string. Trailing
/// whitespace is trimmed from each line to produce cleaner output suitable
/// for snapshot testing.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line for cleaner snapshots
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// A backend call recorded by [`ScriptedApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    List,
    Submit(String),
    CloudInfo,
}

/// An [`IdeaApi`] that answers from queued responses.
///
/// List fetches with nothing queued return an empty list, submissions
/// succeed, and the cloud-info lookup fails with a 404 unless told
/// otherwise. A gated api holds every list fetch until the gate is
/// notified.
#[derive(Debug, Default)]
pub(crate) struct ScriptedApi {
    calls: Mutex<Vec<Call>>,
    lists: Mutex<VecDeque<Result<Vec<Idea>>>>,
    submits: Mutex<VecDeque<Result<()>>>,
    cloud: Mutex<Option<Result<CloudInfo>>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues the outcome of the next unanswered list fetch.
    pub(crate) fn with_list(self, result: Result<Vec<Idea>>) -> Self {
        self.lists.lock().unwrap().push_back(result);
        self
    }

    /// Queues the outcome of the next unanswered submission.
    pub(crate) fn with_submit(self, result: Result<()>) -> Self {
        self.submits.lock().unwrap().push_back(result);
        self
    }

    pub(crate) fn with_cloud(self, result: Result<CloudInfo>) -> Self {
        *self.cloud.lock().unwrap() = Some(result);
        self
    }

    pub(crate) fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, call: &Call) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| std::mem::discriminant(*c) == std::mem::discriminant(call))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl IdeaApi for ScriptedApi {
    async fn list_ideas(&self) -> Result<Vec<Idea>> {
        self.record(Call::List);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.lists.lock().unwrap().pop_front().unwrap_or(Ok(vec![]))
    }

    async fn submit_idea(&self, idea: &NewIdea) -> Result<()> {
        self.record(Call::Submit(idea.content.clone()));
        self.submits.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn cloud_info(&self) -> Result<CloudInfo> {
        self.record(Call::CloudInfo);
        self.cloud
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Err(ClientError::Status { status: 404 }))
    }
}
