// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport seam
//!
//! The inbound aggregator talks to Midgard through the [`Transport`] trait
//! rather than a concrete client, so tests can script responses and callers
//! can bring their own configured client. Timeout policy deliberately lives
//! here, in the underlying client, not in the aggregator.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::errors::TransportError;

/// A minimal JSON-over-HTTP GET capability
///
/// Implementations must be usable behind a shared reference from multiple
/// tasks; the aggregator issues its two endpoint lookups concurrently.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch a URL and return its body as parsed JSON
    async fn get_json(&self, url: &Url) -> Result<Value, TransportError>;
}

/// [`Transport`] implementation over a [`reqwest::Client`]
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use thorutil::HttpTransport;
///
/// // bring a client with whatever timeout policy the application wants
/// let client = reqwest::Client::builder()
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// let transport = HttpTransport::new(client);
/// # let _ = transport;
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Wrap an existing client
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| TransportError::request_failed(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::invalid_json(url.as_str(), e))
    }
}
