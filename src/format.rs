// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Human-readable amount formatting
//!
//! Renders amounts as fixed-point strings, optionally decorated with a
//! currency symbol chosen by asset ticker. The symbol match is a strict
//! ordered chain of rules, not a table lookup: earlier rules shadow later
//! ones even on substring overlap (`TICKER` containing both `BTC` and
//! `USD` hits the BTC rule).

use std::fmt;

use crate::config::constants::display::SATOSHI_DISPLAY_THRESHOLD;
use crate::decimal::{format_fixed, trim_zeros};
use crate::types::{asset_to_base, Amount, Asset, AssetAmount, BaseAmount, RUNE_TICKER};

/// Currency symbols currently supported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencySymbol {
    /// ᚱ, native RUNE
    Rune,
    /// ₿, Bitcoin
    Btc,
    /// ⚡, satoshi, Bitcoin's indivisible unit
    Satoshi,
    /// Ξ, Ether
    Eth,
    /// $, US dollar and dollar-pegged assets
    Usd,
}

impl CurrencySymbol {
    /// The symbol as a string
    pub const fn as_str(&self) -> &'static str {
        match self {
            CurrencySymbol::Rune => "\u{16B1}",
            CurrencySymbol::Btc => "\u{20BF}",
            CurrencySymbol::Satoshi => "\u{26A1}",
            CurrencySymbol::Eth => "\u{039E}",
            CurrencySymbol::Usd => "$",
        }
    }
}

impl fmt::Display for CurrencySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation symbol for an asset, by exact ticker match
///
/// `USD`/`UST` substrings map to the dollar symbol; anything else falls
/// back to the ticker itself.
///
/// # Examples
///
/// ```
/// use thorutil::{currency_symbol_by_asset, Asset};
///
/// assert_eq!(currency_symbol_by_asset(&Asset::rune_native()), "\u{16B1}");
/// assert_eq!(currency_symbol_by_asset(&Asset::btc()), "\u{20BF}");
/// assert_eq!(currency_symbol_by_asset(&Asset::doge()), "DOGE");
/// ```
pub fn currency_symbol_by_asset(asset: &Asset) -> String {
    let ticker = asset.ticker.as_str();
    if ticker == RUNE_TICKER {
        CurrencySymbol::Rune.to_string()
    } else if ticker == "BTC" {
        CurrencySymbol::Btc.to_string()
    } else if ticker == "ETH" {
        CurrencySymbol::Eth.to_string()
    } else if ticker.contains("USD") || ticker.contains("UST") {
        CurrencySymbol::Usd.to_string()
    } else {
        ticker.to_string()
    }
}

/// Format an asset amount as a fixed-point string
///
/// Formats at `decimals` places (the amount's own scale when `None`).
/// When `trim` is set, trailing fractional zeros and superfluous leading
/// zeros are stripped as a final pass; trimming wins over an explicitly
/// requested decimal count.
///
/// # Examples
///
/// ```
/// use thorutil::{format_asset_amount, AssetAmount};
///
/// let amount = AssetAmount::new("1.5", 8);
/// assert_eq!(format_asset_amount(&amount, None, false), "1.50000000");
/// assert_eq!(format_asset_amount(&amount, Some(2), false), "1.50");
/// assert_eq!(format_asset_amount(&amount, Some(4), true), "1.5");
/// ```
pub fn format_asset_amount(amount: &AssetAmount, decimals: Option<u8>, trim: bool) -> String {
    let formatted = format_fixed(amount.amount(), decimals.unwrap_or(amount.decimals()));
    if trim {
        trim_zeros(&formatted)
    } else {
        formatted
    }
}

/// Format a base amount as an integer string
pub fn format_base_amount(amount: &BaseAmount) -> String {
    format_fixed(amount.amount(), 0)
}

/// Format an asset amount with its currency symbol
///
/// The symbol is selected by matching the asset's ticker, in priority
/// order:
///
/// 1. exact `RUNE`: `ᚱ` prefix
/// 2. ticker containing `BTC` (case-insensitive): when the base-unit
///    equivalent is at most 1,000,000 indivisible units the value renders
///    as `⚡` plus the integer base string, otherwise `₿` at asset scale
/// 3. ticker containing `ETH` (case-insensitive): `Ξ` prefix
/// 4. ticker containing `USD` (case-insensitive): `$` prefix
/// 5. fallback: amount followed by the raw ticker
///
/// Without an asset the generic `$` prefix is used.
///
/// # Examples
///
/// ```
/// use thorutil::{format_asset_amount_currency, Asset, AssetAmount};
///
/// let amount = AssetAmount::new("1.5", 8);
/// assert_eq!(
///     format_asset_amount_currency(&amount, Some(&Asset::rune_native()), Some(2), false),
///     "\u{16B1} 1.50"
/// );
/// assert_eq!(
///     format_asset_amount_currency(&amount, Some(&Asset::doge()), Some(2), false),
///     "1.50 DOGE"
/// );
/// assert_eq!(
///     format_asset_amount_currency(&amount, None, Some(2), false),
///     "$ 1.50"
/// );
/// ```
pub fn format_asset_amount_currency(
    amount: &AssetAmount,
    asset: Option<&Asset>,
    decimals: Option<u8>,
    trim: bool,
) -> String {
    let formatted = format_asset_amount(amount, decimals, trim);
    let ticker = asset.map(|a| a.ticker.as_str()).unwrap_or_default();

    if ticker.is_empty() {
        return format!("{} {formatted}", CurrencySymbol::Usd);
    }
    if ticker == RUNE_TICKER {
        return format!("{} {formatted}", CurrencySymbol::Rune);
    }

    let upper = ticker.to_uppercase();
    if upper.contains("BTC") {
        let base = asset_to_base(amount);
        // small values switch to the indivisible unit
        if base.lte(SATOSHI_DISPLAY_THRESHOLD) {
            return format!("{} {}", CurrencySymbol::Satoshi, format_base_amount(&base));
        }
        return format!("{} {formatted}", CurrencySymbol::Btc);
    }
    if upper.contains("ETH") {
        return format!("{} {formatted}", CurrencySymbol::Eth);
    }
    if upper.contains("USD") {
        return format!("{} {formatted}", CurrencySymbol::Usd);
    }

    format!("{formatted} {ticker}")
}

/// Format a base amount at asset scale
///
/// Convenience composition of [`base_to_asset`](crate::base_to_asset) and
/// [`format_asset_amount`].
pub fn format_base_as_asset_amount(
    amount: &BaseAmount,
    decimals: Option<u8>,
    trim: bool,
) -> String {
    format_asset_amount(&crate::types::base_to_asset(amount), decimals, trim)
}
