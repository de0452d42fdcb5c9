//! HTTP implementation of the backend contract.
//!
//! This module provides [`HttpIdeaApi`], which talks to the idea-board REST
//! service with `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use idea_board_protocol::{CloudInfo, Idea, NewIdea};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::api::IdeaApi;
use crate::error::{ClientError, Result};

/// Path of the ideas collection, relative to the base URL.
pub const IDEAS_PATH: &str = "api/ideas";

/// Path of the cloud-info lookup, relative to the base URL.
pub const CLOUD_INFO_PATH: &str = "api/cloud-info";

/// Idea-board API client over HTTP.
///
/// Every request is bounded by the timeout given at construction.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use idea_board_client::{HttpIdeaApi, IdeaApi};
///
/// # async fn example() -> idea_board_client::Result<()> {
/// let base = "http://localhost:8000".parse().unwrap();
/// let api = HttpIdeaApi::new(base, Duration::from_secs(10))?;
///
/// for idea in api.list_ideas().await? {
///     println!("{}: {}", idea.id, idea.content);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpIdeaApi {
    /// The underlying reqwest client.
    http: reqwest::Client,
    /// Base URL, always ending with `/` so relative joins keep its path.
    base: Url,
    /// Per-request timeout.
    timeout: Duration,
}

impl HttpIdeaApi {
    /// Creates a new client for the backend at `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(mut base: Url, timeout: Duration) -> Result<Self> {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::from_reqwest(e, timeout))?;
        debug!(base = %base, timeout_secs = timeout.as_secs(), "created idea-board HTTP client");

        Ok(Self {
            http,
            base,
            timeout,
        })
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolves an API path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the URL cannot be built.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }

    /// Fails with [`ClientError::Status`] unless the response is `2xx`.
    fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            warn!(status = status.as_u16(), url = %response.url(), "backend returned an error status");
            Err(status_error(status))
        }
    }

    /// Issues a GET request and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.timeout))?;
        Self::check_status(response)?
            .json()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.timeout))
    }
}

fn status_error(status: StatusCode) -> ClientError {
    ClientError::Status {
        status: status.as_u16(),
    }
}

#[async_trait]
impl IdeaApi for HttpIdeaApi {
    #[instrument(skip(self))]
    async fn list_ideas(&self) -> Result<Vec<Idea>> {
        debug!("fetching ideas");
        let ideas: Vec<Idea> = self.get_json(IDEAS_PATH).await?;
        debug!(count = ideas.len(), "fetched ideas");
        Ok(ideas)
    }

    #[instrument(skip(self, idea), fields(length = idea.content.chars().count()))]
    async fn submit_idea(&self, idea: &NewIdea) -> Result<()> {
        let url = self.endpoint(IDEAS_PATH)?;
        debug!("submitting idea");
        let response = self
            .http
            .post(url)
            .json(idea)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, self.timeout))?;
        Self::check_status(response)?;
        debug!("idea accepted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn cloud_info(&self) -> Result<CloudInfo> {
        let info: CloudInfo = self.get_json(CLOUD_INFO_PATH).await?;
        debug!(provider = %info.cloud_provider, region = %info.region, "fetched cloud info");
        Ok(info)
    }
}
