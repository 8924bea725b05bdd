// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the thorutil library.
//!
//! This module provides strongly-typed errors for the fallible public APIs
//! in thorutil. It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling
//!   (`ParseChainError`, `ParseAssetError`, `TransportError`, `InboundError`)
//! - **Unified error type** (`ThorutilError`) for convenience when you don't
//!   need to distinguish between error sources
//!
//! Note that the amount factories and the chain display lookup are
//! deliberately infallible: invalid numeric input degrades to zero and
//! unknown chain codes degrade to a sentinel label. Only parsing and the
//! network lookups produce errors.

mod inbound;
mod parse;
mod transport;

pub use inbound::InboundError;
pub use parse::{ParseAssetError, ParseChainError};
pub use transport::TransportError;

/// Unified error type for all thorutil operations.
///
/// This enum wraps all module-specific error types, providing a convenient
/// way to handle errors when you don't need to distinguish between different
/// error sources.
///
/// All module-specific error types automatically convert to `ThorutilError`
/// via `From` implementations, so you can use `?` to propagate errors
/// naturally.
#[derive(Debug, thiserror::Error)]
pub enum ThorutilError {
    /// Error from parsing a chain code.
    #[error("Chain parse error: {0}")]
    Chain(#[from] ParseChainError),

    /// Error from parsing asset notation.
    #[error("Asset parse error: {0}")]
    Asset(#[from] ParseAssetError),

    /// Error from the HTTP transport.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error from the inbound status aggregator.
    #[error("Inbound status error: {0}")]
    Inbound(#[from] InboundError),
}
