// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for on-chain monetary values.
//!
//! This module provides the core value types of the library:
//! - Asset and base denominated amounts with exact decimal arithmetic
//! - Structured asset identifiers and their string notation

pub mod amount;
pub mod asset;

pub use amount::{
    asset_to_base, base_to_asset, Amount, AssetAmount, AssetValue, BaseAmount, BaseValue,
    Denomination, ASSET_DECIMAL,
};
pub use asset::{asset_from_string, Asset, NON_SYNTH_DELIMITER, RUNE_TICKER, SYNTH_DELIMITER};
