// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for amounts, asset notation and formatting
//!
//! These tests use proptest to validate invariants about denomination
//! conversion, asset notation round-trips and display formatting across a
//! wide range of inputs.

use proptest::prelude::*;
use thorutil::{
    asset_from_string, asset_to_base, base_to_asset, format_asset_amount, trim_zeros, Amount,
    Asset, AssetAmount, BaseAmount, Chain, ASSET_DECIMAL,
};

// Helper to generate arbitrary supported chains
fn arb_chain() -> impl Strategy<Value = Chain> {
    prop_oneof![
        Just(Chain::Thorchain),
        Just(Chain::Bitcoin),
        Just(Chain::BitcoinCash),
        Just(Chain::Ethereum),
        Just(Chain::Litecoin),
        Just(Chain::Binance),
        Just(Chain::Cosmos),
        Just(Chain::Doge),
        Just(Chain::Polkadot),
        Just(Chain::Terra),
    ]
}

// Helper to generate symbols without delimiter characters, with the ticker
// segment first
fn arb_symbol() -> impl Strategy<Value = String> {
    "[A-Z0-9]{1,10}(-[A-Za-z0-9]{1,20})?"
}

proptest! {
    /// Property: converting base to asset and back never loses value, for
    /// any integral base amount representable as i64
    #[test]
    fn prop_base_asset_round_trip_is_lossless(value in any::<i64>()) {
        let base = BaseAmount::from_value(value);
        let round_tripped = asset_to_base(&base_to_asset(&base));

        prop_assert_eq!(round_tripped.amount(), base.amount());
        prop_assert_eq!(round_tripped.decimals(), ASSET_DECIMAL);
    }

    /// Property: the base factory always yields an integral amount, whatever
    /// fractional input it is given
    #[test]
    fn prop_base_amounts_are_integral(value in -1e15f64..1e15f64) {
        let base = BaseAmount::from_value(value);
        let rendered = base.amount().to_string();

        prop_assert!(!rendered.contains('.'), "base amount must be integral: {}", rendered);
    }

    /// Property: asset notation survives a serialize/parse round trip for
    /// any supported chain and well-formed symbol
    #[test]
    fn prop_asset_notation_round_trips(chain in arb_chain(), symbol in arb_symbol(), synth in any::<bool>()) {
        let ticker = symbol.split('-').next().unwrap_or_default().to_string();
        let asset = Asset::new(chain, symbol, ticker, synth);

        let parsed = asset_from_string(&asset.to_string());
        prop_assert_eq!(parsed, Some(asset));
    }

    /// Property: formatting renders exactly the requested number of decimal
    /// places when trimming is off
    #[test]
    fn prop_format_has_fixed_scale(value in -1e12f64..1e12f64, decimals in 0u8..=8) {
        let amount = AssetAmount::from_value(value);
        let formatted = format_asset_amount(&amount, Some(decimals), false);

        let fraction_len = formatted.split('.').nth(1).map(str::len).unwrap_or(0);
        prop_assert_eq!(fraction_len, usize::from(decimals));
    }

    /// Property: trimming zeros never changes the numeric value
    #[test]
    fn prop_trim_zeros_preserves_value(value in -1e12f64..1e12f64, decimals in 0u8..=8) {
        let amount = AssetAmount::from_value(value);
        let plain = format_asset_amount(&amount, Some(decimals), false);
        let trimmed = trim_zeros(&plain);

        let plain_value: f64 = plain.parse().unwrap();
        let trimmed_value: f64 = trimmed.parse().unwrap();
        prop_assert_eq!(plain_value, trimmed_value);
    }

    /// Property: comparison operators agree with arithmetic, scale overrides
    /// aside
    #[test]
    fn prop_ordering_is_consistent(a in -1e12f64..1e12f64, b in -1e12f64..1e12f64) {
        let lhs = AssetAmount::from_value(a);
        let rhs = AssetAmount::from_value(b);

        prop_assert_eq!(lhs.lt(rhs.clone()), !lhs.gte(rhs.clone()));
        prop_assert_eq!(lhs.gt(rhs.clone()), !lhs.lte(rhs.clone()));
        if lhs.eq(rhs.clone()) {
            prop_assert!(lhs.lte(rhs.clone()) && lhs.gte(rhs));
        }
    }
}
