// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for chain code and asset notation parsing.
//!
//! These back the `FromStr` implementations. The `Option`-returning parse
//! functions (`Chain::from_code`, `asset_from_string`) stay error-free for
//! callers that only care about presence.

/// A string was not one of the supported chain codes.
///
/// Matching is exact and case-sensitive, so `"btc"` fails even though
/// `"BTC"` is supported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chain code: {code}")]
pub struct ParseChainError {
    /// The code that failed to match
    pub code: String,
}

/// A string was not valid asset notation.
///
/// Asset notation is `CHAIN.SYMBOL` (native) or `CHAIN/SYMBOL` (synthetic);
/// this fires when the delimiter is missing, the symbol segment is empty,
/// or the chain segment is unknown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid asset notation: {input}")]
pub struct ParseAssetError {
    /// The string that failed to parse
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_input() {
        let err = ParseChainError {
            code: "btc".to_string(),
        };
        assert_eq!(err.to_string(), "unknown chain code: btc");

        let err = ParseAssetError {
            input: "BTC".to_string(),
        };
        assert_eq!(err.to_string(), "invalid asset notation: BTC");
    }
}
