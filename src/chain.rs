// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Supported chains
//!
//! The set of chains is closed: adding a chain is a code change here, not
//! configuration. Chain codes are matched exactly (case-sensitive), with no
//! normalization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseChainError;

/// Label returned by [`chain_to_string`] for codes outside the supported set.
pub const UNKNOWN_CHAIN: &str = "unknown chain";

/// Chains supported by the THORChain network
///
/// Each variant serializes to its on-chain code (e.g. `Chain::Bitcoin` is
/// `"BTC"`), which is also what [`Display`](fmt::Display) renders and what
/// [`Chain::from_code`] expects.
///
/// # Examples
///
/// ```
/// use thorutil::Chain;
///
/// assert_eq!(Chain::Bitcoin.as_str(), "BTC");
/// assert_eq!(Chain::from_code("GAIA"), Some(Chain::Cosmos));
/// assert_eq!(Chain::from_code("btc"), None); // exact match only
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    /// Binance Chain (`BNB`)
    #[serde(rename = "BNB")]
    Binance,
    /// Bitcoin (`BTC`)
    #[serde(rename = "BTC")]
    Bitcoin,
    /// Ethereum (`ETH`)
    #[serde(rename = "ETH")]
    Ethereum,
    /// THORChain itself (`THOR`)
    #[serde(rename = "THOR")]
    Thorchain,
    /// Cosmos Hub (`GAIA`)
    #[serde(rename = "GAIA")]
    Cosmos,
    /// Polkadot (`POLKA`)
    #[serde(rename = "POLKA")]
    Polkadot,
    /// Bitcoin Cash (`BCH`)
    #[serde(rename = "BCH")]
    BitcoinCash,
    /// Litecoin (`LTC`)
    #[serde(rename = "LTC")]
    Litecoin,
    /// Terra (`TERRA`)
    #[serde(rename = "TERRA")]
    Terra,
    /// Dogecoin (`DOGE`)
    #[serde(rename = "DOGE")]
    Doge,
}

impl Chain {
    /// All supported chains, in declaration order.
    pub const ALL: [Chain; 10] = [
        Chain::Binance,
        Chain::Bitcoin,
        Chain::Ethereum,
        Chain::Thorchain,
        Chain::Cosmos,
        Chain::Polkadot,
        Chain::BitcoinCash,
        Chain::Litecoin,
        Chain::Terra,
        Chain::Doge,
    ];

    /// Get the chain code as used in asset notation and on the wire
    pub const fn as_str(&self) -> &'static str {
        match self {
            Chain::Binance => "BNB",
            Chain::Bitcoin => "BTC",
            Chain::Ethereum => "ETH",
            Chain::Thorchain => "THOR",
            Chain::Cosmos => "GAIA",
            Chain::Polkadot => "POLKA",
            Chain::BitcoinCash => "BCH",
            Chain::Litecoin => "LTC",
            Chain::Terra => "TERRA",
            Chain::Doge => "DOGE",
        }
    }

    /// Human-readable chain name
    pub const fn display_name(&self) -> &'static str {
        match self {
            Chain::Binance => "Binance Chain",
            Chain::Bitcoin => "Bitcoin",
            Chain::Ethereum => "Ethereum",
            Chain::Thorchain => "Thorchain",
            Chain::Cosmos => "Cosmos",
            Chain::Polkadot => "Polkadot",
            Chain::BitcoinCash => "Bitcoin Cash",
            Chain::Litecoin => "Litecoin",
            Chain::Terra => "Terra",
            Chain::Doge => "Dogecoin",
        }
    }

    /// Look up a chain by its exact code
    ///
    /// Matching is case-sensitive; `"btc"` is not a chain code.
    pub fn from_code(code: &str) -> Option<Chain> {
        Chain::ALL.iter().copied().find(|c| c.as_str() == code)
    }
}

/// Check whether a string is a supported chain code
///
/// # Examples
///
/// ```
/// use thorutil::is_chain;
///
/// assert!(is_chain("THOR"));
/// assert!(!is_chain("NOPE"));
/// ```
pub fn is_chain(code: &str) -> bool {
    Chain::from_code(code).is_some()
}

/// Human-readable name for a chain code
///
/// Returns [`UNKNOWN_CHAIN`] for anything outside the supported set instead
/// of failing. This runs in presentation paths, so unknown input degrades to
/// a sentinel label rather than an error.
///
/// # Examples
///
/// ```
/// use thorutil::chain_to_string;
///
/// assert_eq!(chain_to_string("BCH"), "Bitcoin Cash");
/// assert_eq!(chain_to_string("NOPE"), "unknown chain");
/// ```
pub fn chain_to_string(code: &str) -> &'static str {
    match Chain::from_code(code) {
        Some(chain) => chain.display_name(),
        None => UNKNOWN_CHAIN,
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chain::from_code(s).ok_or_else(|| ParseChainError {
            code: s.to_string(),
        })
    }
}
