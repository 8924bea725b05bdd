// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset identifiers and their string notation
//!
//! Assets are notated as `CHAIN.SYMBOL` for native assets and
//! `CHAIN/SYMBOL` for synthetic ones, where the symbol may carry a
//! `-SUFFIX` contract discriminator (e.g.
//! `ETH.RUNE-0x3155ba85d5f96b2d030a4966af206230e46849cb`). The ticker is
//! the symbol's part before the first `-`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::chain::Chain;
use crate::errors::ParseAssetError;

/// Ticker of THORChain's native asset
pub const RUNE_TICKER: &str = "RUNE";

/// Delimiter between chain and symbol for synthetic assets
pub const SYNTH_DELIMITER: char = '/';

/// Delimiter between chain and symbol for native assets
pub const NON_SYNTH_DELIMITER: char = '.';

/// Structured asset identifier
///
/// Equality is structural: two assets are equal iff `chain`, `symbol`,
/// `ticker` and `synth` all match.
///
/// # Examples
///
/// ```
/// use thorutil::{asset_from_string, Asset, Chain};
///
/// let parsed = asset_from_string("ETH.RUNE-0xabc").unwrap();
/// assert_eq!(parsed.chain, Chain::Ethereum);
/// assert_eq!(parsed.symbol, "RUNE-0xabc");
/// assert_eq!(parsed.ticker, "RUNE");
/// assert!(!parsed.synth);
/// assert_eq!(parsed.to_string(), "ETH.RUNE-0xabc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    /// Chain the asset lives on
    pub chain: Chain,
    /// Full on-chain symbol, possibly `TICKER-SUFFIX`
    pub symbol: String,
    /// Short display ticker (may be empty for symbol-only assets)
    pub ticker: String,
    /// Whether this is a synthetic (derivative) asset rather than a native one
    pub synth: bool,
}

impl Asset {
    /// Create an asset from its parts
    ///
    /// Ticker consistency with the symbol is not checked here or on
    /// serialization; the parser is the only place a ticker is derived.
    pub fn new(
        chain: Chain,
        symbol: impl Into<String>,
        ticker: impl Into<String>,
        synth: bool,
    ) -> Self {
        Self {
            chain,
            symbol: symbol.into(),
            ticker: ticker.into(),
            synth,
        }
    }

    /// BNB on Binance chain
    pub fn bnb() -> Self {
        Self::new(Chain::Binance, "BNB", "BNB", false)
    }

    /// BTC on Bitcoin main net
    pub fn btc() -> Self {
        Self::new(Chain::Bitcoin, "BTC", "BTC", false)
    }

    /// BCH on Bitcoin Cash main net
    pub fn bch() -> Self {
        Self::new(Chain::BitcoinCash, "BCH", "BCH", false)
    }

    /// LTC on Litecoin main net
    pub fn ltc() -> Self {
        Self::new(Chain::Litecoin, "LTC", "LTC", false)
    }

    /// DOGE on Dogecoin main net
    pub fn doge() -> Self {
        Self::new(Chain::Doge, "DOGE", "DOGE", false)
    }

    /// ETH on Ethereum main net
    pub fn eth() -> Self {
        Self::new(Chain::Ethereum, "ETH", "ETH", false)
    }

    /// Native RUNE on THORChain
    pub fn rune_native() -> Self {
        Self::new(Chain::Thorchain, RUNE_TICKER, RUNE_TICKER, false)
    }

    /// RUNE-B1A on Binance main net
    pub fn rune_b1a() -> Self {
        Self::new(Chain::Binance, "RUNE-B1A", RUNE_TICKER, false)
    }

    /// RUNE-67C on Binance test net
    pub fn rune_67c() -> Self {
        Self::new(Chain::Binance, "RUNE-67C", RUNE_TICKER, false)
    }

    /// ERC-20 RUNE on Ethereum main net
    pub fn rune_erc20() -> Self {
        Self::new(
            Chain::Ethereum,
            format!("{RUNE_TICKER}-0x3155ba85d5f96b2d030a4966af206230e46849cb"),
            RUNE_TICKER,
            false,
        )
    }

    /// ERC-20 RUNE on Ethereum test net
    pub fn rune_erc20_testnet() -> Self {
        Self::new(
            Chain::Ethereum,
            format!("{RUNE_TICKER}-0xd601c6A3a36721320573885A8d8420746dA3d7A0"),
            RUNE_TICKER,
            false,
        )
    }

    /// Whether chain, ticker and symbol are all present
    ///
    /// The chain is valid by construction here; only the string parts can
    /// be empty.
    pub fn is_valid(&self) -> bool {
        !self.ticker.is_empty() && !self.symbol.is_empty()
    }

    /// Whether this is a synthetic asset
    pub fn is_synth(&self) -> bool {
        self.synth
    }

    /// Delimiter used in this asset's string notation
    pub fn delimiter(&self) -> char {
        if self.synth {
            SYNTH_DELIMITER
        } else {
            NON_SYNTH_DELIMITER
        }
    }
}

/// Parse an asset from its string notation
///
/// A `/` anywhere in the string marks the asset synthetic and becomes the
/// active delimiter, even when a `.` appears earlier. The string is split
/// on the first occurrence of the active delimiter; everything after it is
/// the symbol, and the ticker is the symbol's part before the first `-`.
///
/// Returns `None` (never panics) when the delimiter is missing, the symbol
/// segment is empty, or the chain segment is not a supported chain code.
///
/// # Examples
///
/// ```
/// use thorutil::{asset_from_string, Chain};
///
/// let synth = asset_from_string("BTC/BTC").unwrap();
/// assert_eq!(synth.chain, Chain::Bitcoin);
/// assert!(synth.synth);
///
/// assert!(asset_from_string("BTC").is_none());
/// assert!(asset_from_string("BTC.").is_none());
/// assert!(asset_from_string("NOPE.FOO").is_none());
/// ```
pub fn asset_from_string(s: &str) -> Option<Asset> {
    let synth = s.contains(SYNTH_DELIMITER);
    let delimiter = if synth {
        SYNTH_DELIMITER
    } else {
        NON_SYNTH_DELIMITER
    };

    let (chain_code, symbol) = s.split_once(delimiter)?;
    if symbol.is_empty() {
        return None;
    }
    let chain = Chain::from_code(chain_code)?;

    let ticker = match symbol.split_once('-') {
        Some((ticker, _)) => ticker,
        None => symbol,
    };

    Some(Asset {
        chain,
        symbol: symbol.to_string(),
        ticker: ticker.to_string(),
        synth,
    })
}

impl fmt::Display for Asset {
    /// Render the canonical string notation
    ///
    /// Only `chain`, `symbol` and the synth flag participate; the ticker is
    /// not re-derived or validated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.chain, self.delimiter(), self.symbol)
    }
}

impl FromStr for Asset {
    type Err = ParseAssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        asset_from_string(s).ok_or_else(|| ParseAssetError {
            input: s.to_string(),
        })
    }
}
