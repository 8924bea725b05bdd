// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the inbound status aggregator.

/// Errors that can occur while aggregating inbound network status.
///
/// Individual candidate failures are logged and absorbed by the failover
/// loop; this error is only produced once an endpoint's whole candidate
/// list is exhausted. It is never caught internally; retry and backoff
/// policy belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InboundError {
    /// Every candidate URL for an endpoint failed.
    ///
    /// There is no cross-endpoint fallback: a mimir exhaustion is reported
    /// even when the inbound-addresses endpoint succeeded, and vice versa.
    #[error("Midgard not responding: all candidate URLs for {endpoint} failed")]
    ServiceUnavailable {
        /// The endpoint whose candidates were exhausted
        endpoint: String,
    },
}

impl InboundError {
    /// Helper to create a `ServiceUnavailable` error for an endpoint.
    pub fn service_unavailable(endpoint: impl Into<String>) -> Self {
        InboundError::ServiceUnavailable {
            endpoint: endpoint.into(),
        }
    }
}
