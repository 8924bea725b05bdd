// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the HTTP transport seam.

/// Errors that can occur while fetching JSON over HTTP.
///
/// These are per-candidate failures: the inbound aggregator logs them and
/// moves on to the next candidate URL, so they only surface to callers
/// through custom [`Transport`](crate::Transport) implementations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the response body not read.
    #[error("request to {url} failed")]
    RequestFailed {
        /// The URL that was requested
        url: String,
        /// The underlying client error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server answered with a non-success status code.
    #[error("request to {url} returned status {status}")]
    Status {
        /// The URL that was requested
        url: String,
        /// The HTTP status code
        status: u16,
    },

    /// The response body was not the expected JSON.
    #[error("response from {url} was not valid JSON")]
    InvalidJson {
        /// The URL that was requested
        url: String,
        /// The underlying decode error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl TransportError {
    /// Helper to create a `RequestFailed` error from any error type.
    pub fn request_failed(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TransportError::RequestFailed {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create an `InvalidJson` error from any error type.
    pub fn invalid_json(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TransportError::InvalidJson {
            url: url.into(),
            source: Box::new(source),
        }
    }
}
