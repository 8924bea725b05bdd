// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset and base denominated amounts
//!
//! Every on-chain value exists in two denominations: the raw integer count
//! of the smallest indivisible unit (base, e.g. tor or satoshi) and the
//! human-scale fractional value at the asset's display precision (asset,
//! e.g. RUNE or BTC). [`BaseAmount`] and [`AssetAmount`] keep the two apart
//! at compile time while sharing the same arithmetic surface.
//!
//! Both types are immutable value objects over [`BigDecimal`]; arithmetic
//! returns new values. Factories never fail: invalid numeric input degrades
//! to zero, which callers in display paths rely on.

use bigdecimal::num_bigint::BigInt;
use bigdecimal::{BigDecimal, RoundingMode, Zero};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::{bn_or_zero, fixed, DecimalValue};

/// Default number of asset decimals
///
/// Historical default inherited from the first supported chain (Binance
/// chain assets use 8 decimals): `0.00000001 RUNE == 1 tor`.
pub const ASSET_DECIMAL: u8 = 8;

/// Denomination of an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Denomination {
    /// Integer values in a chain's smallest indivisible unit (no decimal)
    #[serde(rename = "BASE")]
    Base,
    /// Human-scale values at the asset's display precision (w/ decimal)
    #[serde(rename = "ASSET")]
    Asset,
}

/// Read-only surface shared by [`AssetAmount`] and [`BaseAmount`]
pub trait Amount {
    /// The underlying decimal magnitude
    fn amount(&self) -> &BigDecimal;
    /// Decimal places of the associated asset
    ///
    /// For base amounts this is metadata describing the associated asset's
    /// scale; the stored value itself always has zero fractional digits.
    fn decimals(&self) -> u8;
    /// Which denomination this amount carries
    fn denomination(&self) -> Denomination;
}

/// Human-scale amount of an asset (e.g. RUNE)
///
/// Stored rounded half-up at its decimal place count. Constructed via
/// [`AssetAmount::new`]; invalid input degrades to zero.
///
/// # Examples
///
/// ```
/// use thorutil::{Amount, AssetAmount, ASSET_DECIMAL};
///
/// let a = AssetAmount::new("1.5", ASSET_DECIMAL);
/// let b = a.plus(2, None);
/// assert!(b.eq("3.5"));
/// assert_eq!(b.decimals(), 8);
///
/// // malformed upstream data must not crash a display layer
/// let zero = AssetAmount::new("not-a-number", ASSET_DECIMAL);
/// assert!(zero.eq(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetAmount {
    amount: BigDecimal,
    decimals: u8,
}

/// Integer amount in a chain's smallest indivisible unit (e.g. tor)
///
/// The stored value always has zero fractional digits: every constructing
/// operation truncates toward zero, never rounding away from zero, so no
/// fractional base units can appear. `decimals` records the associated
/// asset's scale for conversion, not the value's own precision.
///
/// # Examples
///
/// ```
/// use thorutil::{BaseAmount, ASSET_DECIMAL};
///
/// let sats = BaseAmount::new("1000000.9", ASSET_DECIMAL);
/// assert!(sats.eq(1_000_000));
///
/// // division truncates toward zero, matching on-chain integer division
/// assert!(BaseAmount::new(7, 8).div(2, None).eq(3));
/// assert!(BaseAmount::new(-7, 8).div(2, None).eq(-3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseAmount {
    amount: BigDecimal,
    decimals: u8,
}

/// Right-hand operand for [`AssetAmount`] arithmetic and comparisons
///
/// Converts from loose numeric input (strings, integers, floats,
/// `BigDecimal`) and from asset amounts. Base amounts deliberately do not
/// convert: mixing denominations is a compile error.
#[derive(Debug, Clone)]
pub struct AssetValue(BigDecimal);

/// Right-hand operand for [`BaseAmount`] arithmetic and comparisons
#[derive(Debug, Clone)]
pub struct BaseValue(BigDecimal);

impl AssetValue {
    fn into_inner(self) -> BigDecimal {
        self.0
    }
}

impl BaseValue {
    fn into_inner(self) -> BigDecimal {
        self.0
    }
}

impl From<AssetAmount> for AssetValue {
    fn from(value: AssetAmount) -> Self {
        Self(value.amount)
    }
}

impl From<&AssetAmount> for AssetValue {
    fn from(value: &AssetAmount) -> Self {
        Self(value.amount.clone())
    }
}

impl From<BaseAmount> for BaseValue {
    fn from(value: BaseAmount) -> Self {
        Self(value.amount)
    }
}

impl From<&BaseAmount> for BaseValue {
    fn from(value: &BaseAmount) -> Self {
        Self(value.amount.clone())
    }
}

macro_rules! operand_from_loose {
    ($operand:ident: $($t:ty),*) => {
        $(
            impl From<$t> for $operand {
                fn from(value: $t) -> Self {
                    Self(DecimalValue::from(value).into_inner())
                }
            }
        )*
    };
}

operand_from_loose!(AssetValue: &str, String, f64, i32, i64, u32, u64, u128, BigDecimal, &BigDecimal, DecimalValue);
operand_from_loose!(BaseValue: &str, String, f64, i32, i64, u32, u64, u128, BigDecimal, &BigDecimal, DecimalValue);

/// `10^decimals` as an exact decimal
fn pow10(decimals: u8) -> BigDecimal {
    BigDecimal::new(BigInt::from(1), -i64::from(decimals))
}

impl AssetAmount {
    /// Create an asset amount, rounding half-up at `decimals` places
    ///
    /// Accepts loose input; anything that fails to parse becomes zero.
    /// This factory never fails.
    pub fn new(value: impl Into<DecimalValue>, decimals: u8) -> Self {
        Self {
            amount: fixed(value, decimals),
            decimals,
        }
    }

    /// Create an asset amount at the default [`ASSET_DECIMAL`] scale
    pub fn from_value(value: impl Into<DecimalValue>) -> Self {
        Self::new(value, ASSET_DECIMAL)
    }

    /// Zero at the given scale
    pub fn zero(decimals: u8) -> Self {
        Self::new(0, decimals)
    }

    /// Add a value or another asset amount
    ///
    /// The result is rounded at this amount's scale unless `decimals`
    /// overrides it.
    pub fn plus(&self, value: impl Into<AssetValue>, decimals: Option<u8>) -> Self {
        let rhs = value.into().into_inner();
        Self::new(&self.amount + rhs, decimals.unwrap_or(self.decimals))
    }

    /// Subtract a value or another asset amount
    pub fn minus(&self, value: impl Into<AssetValue>, decimals: Option<u8>) -> Self {
        let rhs = value.into().into_inner();
        Self::new(&self.amount - rhs, decimals.unwrap_or(self.decimals))
    }

    /// Multiply by a value or another asset amount
    pub fn times(&self, value: impl Into<AssetValue>, decimals: Option<u8>) -> Self {
        let rhs = value.into().into_inner();
        Self::new(&self.amount * rhs, decimals.unwrap_or(self.decimals))
    }

    /// Divide by a value or another asset amount
    ///
    /// The quotient is rounded half-up at the result scale. A zero divisor
    /// degrades to zero, consistent with the fail-soft factory policy.
    pub fn div(&self, value: impl Into<AssetValue>, decimals: Option<u8>) -> Self {
        let rhs = value.into().into_inner();
        let scale = decimals.unwrap_or(self.decimals);
        if rhs.is_zero() {
            return Self::zero(scale);
        }
        Self::new(&self.amount / rhs, scale)
    }

    /// `self < value` on decimal magnitude
    pub fn lt(&self, value: impl Into<AssetValue>) -> bool {
        self.amount < value.into().into_inner()
    }

    /// `self <= value` on decimal magnitude
    pub fn lte(&self, value: impl Into<AssetValue>) -> bool {
        self.amount <= value.into().into_inner()
    }

    /// `self > value` on decimal magnitude
    pub fn gt(&self, value: impl Into<AssetValue>) -> bool {
        self.amount > value.into().into_inner()
    }

    /// `self >= value` on decimal magnitude
    pub fn gte(&self, value: impl Into<AssetValue>) -> bool {
        self.amount >= value.into().into_inner()
    }

    /// `self == value` on decimal magnitude (scale is not compared)
    pub fn eq(&self, value: impl Into<AssetValue>) -> bool {
        self.amount == value.into().into_inner()
    }
}

impl BaseAmount {
    /// Create a base amount, truncating toward zero to an integer
    ///
    /// `decimals` records the associated asset's scale (default callers use
    /// [`ASSET_DECIMAL`]); the stored value itself is integral. Accepts
    /// loose input; anything that fails to parse becomes zero. This factory
    /// never fails.
    pub fn new(value: impl Into<DecimalValue>, decimals: u8) -> Self {
        Self {
            amount: bn_or_zero(value).with_scale_round(0, RoundingMode::Down),
            decimals,
        }
    }

    /// Create a base amount with the default [`ASSET_DECIMAL`] metadata
    pub fn from_value(value: impl Into<DecimalValue>) -> Self {
        Self::new(value, ASSET_DECIMAL)
    }

    /// Zero with the given scale metadata
    pub fn zero(decimals: u8) -> Self {
        Self::new(0, decimals)
    }

    /// Add a value or another base amount
    pub fn plus(&self, value: impl Into<BaseValue>, decimals: Option<u8>) -> Self {
        let rhs = value.into().into_inner();
        Self::new(&self.amount + rhs, decimals.unwrap_or(self.decimals))
    }

    /// Subtract a value or another base amount
    pub fn minus(&self, value: impl Into<BaseValue>, decimals: Option<u8>) -> Self {
        let rhs = value.into().into_inner();
        Self::new(&self.amount - rhs, decimals.unwrap_or(self.decimals))
    }

    /// Multiply by a value or another base amount
    pub fn times(&self, value: impl Into<BaseValue>, decimals: Option<u8>) -> Self {
        let rhs = value.into().into_inner();
        Self::new(&self.amount * rhs, decimals.unwrap_or(self.decimals))
    }

    /// Divide by a value or another base amount, truncating toward zero
    ///
    /// On-chain integer division must not silently introduce fractional
    /// base units, so the quotient is truncated, not rounded. A zero
    /// divisor degrades to zero.
    pub fn div(&self, value: impl Into<BaseValue>, decimals: Option<u8>) -> Self {
        let rhs = value.into().into_inner();
        let scale = decimals.unwrap_or(self.decimals);
        if rhs.is_zero() {
            return Self::zero(scale);
        }
        Self::new(&self.amount / rhs, scale)
    }

    /// `self < value` on decimal magnitude
    pub fn lt(&self, value: impl Into<BaseValue>) -> bool {
        self.amount < value.into().into_inner()
    }

    /// `self <= value` on decimal magnitude
    pub fn lte(&self, value: impl Into<BaseValue>) -> bool {
        self.amount <= value.into().into_inner()
    }

    /// `self > value` on decimal magnitude
    pub fn gt(&self, value: impl Into<BaseValue>) -> bool {
        self.amount > value.into().into_inner()
    }

    /// `self >= value` on decimal magnitude
    pub fn gte(&self, value: impl Into<BaseValue>) -> bool {
        self.amount >= value.into().into_inner()
    }

    /// `self == value` on decimal magnitude (scale metadata is not compared)
    pub fn eq(&self, value: impl Into<BaseValue>) -> bool {
        self.amount == value.into().into_inner()
    }
}

impl Amount for AssetAmount {
    fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn denomination(&self) -> Denomination {
        Denomination::Asset
    }
}

impl Amount for BaseAmount {
    fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn denomination(&self) -> Denomination {
        Denomination::Base
    }
}

impl fmt::Display for AssetAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount)
    }
}

impl fmt::Display for BaseAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.amount)
    }
}

/// Convert a base amount to its asset-scale value (e.g. tor -> RUNE)
///
/// Divides by `10^decimals` and rounds half-up at `decimals` places. For
/// integral base values this is exact, so
/// `asset_to_base(&base_to_asset(&b))` reproduces `b` losslessly.
///
/// # Examples
///
/// ```
/// use thorutil::{base_to_asset, BaseAmount};
///
/// let base = BaseAmount::new(12_345u64, 8);
/// let asset = base_to_asset(&base);
/// assert!(asset.eq("0.00012345"));
/// ```
pub fn base_to_asset(base: &BaseAmount) -> AssetAmount {
    let decimals = base.decimals;
    AssetAmount::new(&base.amount / pow10(decimals), decimals)
}

/// Convert an asset amount to its base units (e.g. RUNE -> tor)
///
/// Multiplies by `10^decimals` and truncates to an integer. The reverse of
/// [`base_to_asset`], lossy by construction when the asset value carries
/// more precision than `decimals` can hold.
///
/// # Examples
///
/// ```
/// use thorutil::{asset_to_base, AssetAmount};
///
/// let asset = AssetAmount::new("0.5", 8);
/// assert!(asset_to_base(&asset).eq(50_000_000u64));
/// ```
pub fn asset_to_base(asset: &AssetAmount) -> BaseAmount {
    let decimals = asset.decimals;
    BaseAmount::new(&asset.amount * pow10(decimals), decimals)
}
