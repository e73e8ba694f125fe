use std::time::Duration;

use serde_json::Value;
use surf::Url;
use thiserror::Error;
use tracing::debug;

pub mod mock;
pub mod ops;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("Invalid JSON in response: {0}")]
    InvalidJson(String),
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
}

/// Joins an endpoint onto the base URL of the CMS.
///
/// Absolute `http://` and `https://` endpoints are returned as they are,
/// anything else is treated as a path below `base_url`.
pub fn resolve_endpoint(base_url: &str, endpoint: &str) -> Result<Url, FetchError> {
    let url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    };
    Url::parse(&url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))
}

/// Issue one GET request and decode the body as JSON.
///
/// # Arguments
///
/// * `client` - The HTTP client to send the request with.
/// * `url` - Absolute URL to fetch.
/// * `timeout` - Upper bound for the whole request, body included.
///
/// # Errors
///
/// Returns a `FetchError` when the request cannot be sent, the server answers
/// with a non-success status, the body is not JSON or the timeout elapses.
pub async fn fetch_json(
    client: &surf::Client,
    url: &Url,
    timeout: Duration,
) -> Result<Value, FetchError> {
    debug!(url = %url, "Fetching JSON");
    async_std::future::timeout(timeout, async {
        let mut response = client
            .get(url.as_str())
            .await
            .map_err(|e| FetchError::RequestFailed(format!("Failed to send request: {}", e)))?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(u16::from(response.status())));
        }

        response
            .body_json::<Value>()
            .await
            .map_err(|e| FetchError::InvalidJson(e.to_string()))
    })
    .await
    .map_err(|_| FetchError::Timeout(timeout))?
}
