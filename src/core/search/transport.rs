//! Search Transport
//!
//! Low-level HTTP communication with the library backend's `/books_search`
//! endpoint. The orchestrator only sees the [`BookSearchTransport`] trait so
//! it can be tested against a mock.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::config::BackendConfig;

use super::error::{Result, SearchError};
use super::models::{SearchQuery, SearchResultPage};

/// One-operation boundary to the remote search service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookSearchTransport: Send + Sync {
    /// Fetch one page of results. Fails on network errors, non-2xx status
    /// codes, and malformed response bodies.
    async fn search(&self, query: SearchQuery) -> Result<SearchResultPage>;
}

/// HTTP transport for the book search endpoint
#[derive(Debug)]
pub struct HttpBookSearchTransport {
    endpoint: Url,
    http_client: reqwest::Client,
}

impl HttpBookSearchTransport {
    /// Build a transport for the configured backend root API.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let root = config.resolved_root_url();
        let endpoint = Url::parse(&format!("{}/books_search", root.trim_end_matches('/')))
            .map_err(|e| SearchError::Config(format!("invalid backend root URL '{root}': {e}")))?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            endpoint,
            http_client,
        })
    }

    /// Endpoint this transport posts search requests to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl BookSearchTransport for HttpBookSearchTransport {
    async fn search(&self, query: SearchQuery) -> Result<SearchResultPage> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Body is diagnostics only, never surfaced to callers
            if let Ok(body) = response.text().await {
                if !body.is_empty() {
                    log::debug!("search backend response: {body}");
                }
            }
            return Err(SearchError::BackendStatus(status));
        }

        Ok(response.json::<SearchResultPage>().await?)
    }
}
