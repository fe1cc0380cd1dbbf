use crate::models::{AdvocatesResponse, SeedResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors from a list request, displayed as the user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Transport failure; the message is passed through unchanged
    #[error("{0}")]
    Network(String),

    #[error("HTTP error! status: {0}")]
    Http(u16),

    #[error("{0}")]
    Decode(String),

    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("Failed to fetch advocates")]
    Unknown,
}

impl FetchError {
    /// Wrap an arbitrary failure message, falling back to the generic one
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            FetchError::Unknown
        } else {
            FetchError::Network(message)
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Http(status.as_u16())
        } else {
            FetchError::from_message(err.to_string())
        }
    }
}

/// Source of advocate list results
///
/// `path` is the request path including the query string, e.g.
/// `/api/advocates?city=Austin`.
#[async_trait]
pub trait AdvocateFetcher: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<AdvocatesResponse, FetchError>;
}

/// reqwest client for the advocates HTTP API
pub struct HttpAdvocateClient {
    base_url: String,
    client: Client,
}

impl HttpAdvocateClient {
    /// Create a client for the API at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Seed the directory through `POST /api/seed`
    pub async fn seed(&self) -> Result<SeedResponse, FetchError> {
        let url = self.url("/api/seed");

        tracing::debug!("Seeding advocates via {}", url);

        let response = self.client.post(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Seed request failed: {} - {}", status, body);
            return Err(FetchError::Http(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl AdvocateFetcher for HttpAdvocateClient {
    async fn fetch(&self, path: &str) -> Result<AdvocatesResponse, FetchError> {
        let url = self.url(path);

        tracing::debug!("Fetching advocates from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Http(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}
