// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known endpoints and display constants
//!
//! This module centralizes magic constants used throughout the thorutil
//! crate, improving discoverability and maintainability.

/// Midgard API endpoints
pub mod midgard {
    /// Path of the mimir governance-flags endpoint
    pub const MIMIR_PATH: &str = "/v2/thorchain/mimir";

    /// Path of the inbound-addresses endpoint
    pub const INBOUND_ADDRESSES_PATH: &str = "/v2/thorchain/inbound_addresses";

    /// Candidate base URLs for main net, tried strictly in order
    pub const MAINNET_BASE_URLS: [&str; 2] = [
        "https://midgard.ninerealms.com",
        "https://midgard.thorswap.net",
    ];

    /// Candidate base URLs for test net, tried strictly in order
    pub const TESTNET_BASE_URLS: [&str; 1] = ["https://testnet.midgard.thorchain.info"];
}

/// Display thresholds
pub mod display {
    /// Largest base-unit value rendered in the indivisible unit
    ///
    /// Bitcoin-ticker amounts at or below this many satoshi are formatted
    /// with the satoshi symbol instead of the asset-scale Bitcoin string.
    pub const SATOSHI_DISPLAY_THRESHOLD: u64 = 1_000_000;
}
