use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::{FetchError, fetch_json, resolve_endpoint};

/// Trait for fetching raw content payloads to enable testing
#[async_trait]
pub trait ContentFetcherOps: Send + Sync {
    /// Fetch the JSON payload of an endpoint.
    ///
    /// `endpoint` is either a path relative to the configured base URL or an
    /// absolute URL.
    async fn fetch_json(&self, endpoint: &str) -> Result<Value, FetchError>;
}

/// Fetches over HTTP with surf.
#[derive(Debug, Clone)]
pub struct DefaultContentFetcher {
    client: surf::Client,
    base_url: String,
    timeout: Duration,
}

impl DefaultContentFetcher {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: surf::Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl ContentFetcherOps for DefaultContentFetcher {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value, FetchError> {
        let url = resolve_endpoint(&self.base_url, endpoint)?;
        fetch_json(&self.client, &url, self.timeout).await
    }
}
