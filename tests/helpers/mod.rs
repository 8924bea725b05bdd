// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for thorutil integration tests
//!
//! Provides a scripted mock transport so failover behavior can be tested
//! without real network calls.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use thorutil::{Transport, TransportError};
use url::Url;

/// Mock Transport with scripted per-URL responses
///
/// Each full URL (base joined with endpoint path) maps to either a JSON
/// value or a failure. Every request is recorded in order, so tests can
/// assert which candidates were tried and in what sequence.
///
/// # Example
///
/// ```rust,ignore
/// let transport = MockTransport::new()
///     .with_failure("https://a.example/v2/thorchain/mimir")
///     .with_response("https://b.example/v2/thorchain/mimir", json!({}));
///
/// let client = MidgardClient::with_base_urls(transport, urls);
/// ```
pub struct MockTransport {
    responses: HashMap<String, Result<Value, ()>>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Create a new MockTransport with no scripted responses
    ///
    /// Unscripted URLs fail, which makes every candidate a failure by
    /// default.
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script a successful JSON response for a URL
    pub fn with_response(mut self, url: &str, value: Value) -> Self {
        self.responses.insert(url.to_string(), Ok(value));
        self
    }

    /// Script a transport failure for a URL
    pub fn with_failure(mut self, url: &str) -> Self {
        self.responses.insert(url.to_string(), Err(()));
        self
    }

    /// All URLs requested so far, in call order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of times the given URL was requested
    pub fn request_count(&self, url: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.as_str() == url)
            .count()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.responses.get(url.as_str()) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(())) => Err(TransportError::Status {
                url: url.to_string(),
                status: 503,
            }),
            None => Err(TransportError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

/// Parse a list of base URL strings, panicking on invalid input
#[allow(dead_code)]
pub fn base_urls(urls: &[&str]) -> Vec<Url> {
    urls.iter().map(|u| Url::parse(u).unwrap()).collect()
}
