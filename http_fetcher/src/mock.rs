use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::{FetchError, ops::ContentFetcherOps};

/// Internal state for MockContentFetcher.
#[derive(Default)]
struct MockState {
    /// Canned payloads (endpoint -> payload)
    responses: HashMap<String, Value>,
    /// Endpoints that should fail, with the error to return
    failures: HashMap<String, FetchError>,
    /// Artificial latency per endpoint
    delays: HashMap<String, Duration>,
    /// Every endpoint requested, in order
    requests: Vec<String>,
}

/// Mock implementation of ContentFetcherOps for testing
///
/// This mock allows you to:
/// - Serve canned payloads per endpoint
/// - Simulate transport failures
/// - Delay individual responses to provoke out-of-order completion
/// - Verify which endpoints were requested
///
/// Endpoints without a canned payload or failure answer with a 404 status.
#[derive(Clone, Default)]
pub struct MockContentFetcher {
    state: Arc<Mutex<MockState>>,
}

impl MockContentFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `payload` for `endpoint`
    pub fn add_response(&self, endpoint: impl Into<String>, payload: Value) {
        let mut state = self.state.lock().unwrap();
        state.responses.insert(endpoint.into(), payload);
    }

    /// Make requests to `endpoint` fail with `error`
    pub fn fail_for(&self, endpoint: impl Into<String>, error: FetchError) {
        let mut state = self.state.lock().unwrap();
        state.failures.insert(endpoint.into(), error);
    }

    /// Delay the answer for `endpoint`
    pub fn delay_for(&self, endpoint: impl Into<String>, delay: Duration) {
        let mut state = self.state.lock().unwrap();
        state.delays.insert(endpoint.into(), delay);
    }

    /// All endpoints requested so far
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

#[async_trait]
impl ContentFetcherOps for MockContentFetcher {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value, FetchError> {
        let (delay, result) = {
            let mut state = self.state.lock().unwrap();
            state.requests.push(endpoint.to_string());
            let result = match state.failures.get(endpoint) {
                Some(error) => Err(error.clone()),
                None => state
                    .responses
                    .get(endpoint)
                    .cloned()
                    .ok_or(FetchError::HttpStatus(404)),
            };
            (state.delays.get(endpoint).copied(), result)
        };

        if let Some(delay) = delay {
            async_std::task::sleep(delay).await;
        }
        result
    }
}
