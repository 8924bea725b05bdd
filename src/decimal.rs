// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Loose decimal input and fixed-point rendering
//!
//! Chain data arrives as strings, integers, and floats of varying quality.
//! The helpers here collapse all of that into exact [`BigDecimal`] values:
//! anything that does not parse becomes zero instead of an error, because
//! these run in presentation paths where a crash is worse than a
//! wrong-looking zero.

use bigdecimal::{BigDecimal, FromPrimitive, RoundingMode};
use std::str::FromStr;

/// A decimal value built from loose input
///
/// This is the argument type accepted by the amount factories and helpers.
/// It converts from strings, integers, floats, `BigDecimal` and `Option`s of
/// any of those; input that fails to parse (or an absent `Option`) collapses
/// to zero. The conversion itself never fails.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use thorutil::DecimalValue;
///
/// let v: DecimalValue = "1.25".into();
/// assert_eq!(v.into_inner(), "1.25".parse::<BigDecimal>().unwrap());
///
/// let bad: DecimalValue = "not a number".into();
/// assert_eq!(bad.into_inner(), BigDecimal::from(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecimalValue(BigDecimal);

impl DecimalValue {
    /// Unwrap into the underlying `BigDecimal`
    pub fn into_inner(self) -> BigDecimal {
        self.0
    }
}

impl From<BigDecimal> for DecimalValue {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl From<&BigDecimal> for DecimalValue {
    fn from(value: &BigDecimal) -> Self {
        Self(value.clone())
    }
}

impl From<&str> for DecimalValue {
    fn from(value: &str) -> Self {
        Self(bn(value).unwrap_or_default())
    }
}

impl From<String> for DecimalValue {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&String> for DecimalValue {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<f64> for DecimalValue {
    fn from(value: f64) -> Self {
        // NaN and infinities collapse to zero
        Self(BigDecimal::from_f64(value).unwrap_or_default())
    }
}

impl<T: Into<DecimalValue>> From<Option<T>> for DecimalValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

macro_rules! decimal_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DecimalValue {
                fn from(value: $t) -> Self {
                    Self(BigDecimal::from(value))
                }
            }
        )*
    };
}

decimal_value_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

/// Parse a decimal string
///
/// Returns `None` when the string is not a valid decimal number.
pub fn bn(value: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(value.trim()).ok()
}

/// Build a `BigDecimal` from loose input, degrading to zero
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use thorutil::bn_or_zero;
///
/// assert_eq!(bn_or_zero("100.5"), "100.5".parse::<BigDecimal>().unwrap());
/// assert_eq!(bn_or_zero("garbage"), BigDecimal::from(0));
/// assert_eq!(bn_or_zero(None::<&str>), BigDecimal::from(0));
/// ```
pub fn bn_or_zero(value: impl Into<DecimalValue>) -> BigDecimal {
    value.into().into_inner()
}

/// Build a `BigDecimal` rounded half-up to a fixed number of decimal places
///
/// Invalid input is treated as zero before rounding.
pub fn fixed(value: impl Into<DecimalValue>, decimals: u8) -> BigDecimal {
    bn_or_zero(value).with_scale_round(i64::from(decimals), RoundingMode::HalfUp)
}

/// Render a decimal as a fixed-point string with the given number of
/// fractional digits, rounding half-up
///
/// # Examples
///
/// ```
/// use thorutil::{bn_or_zero, format_fixed};
///
/// assert_eq!(format_fixed(&bn_or_zero("1.005"), 2), "1.01");
/// assert_eq!(format_fixed(&bn_or_zero("12"), 4), "12.0000");
/// assert_eq!(format_fixed(&bn_or_zero("12.9"), 0), "13");
/// ```
pub fn format_fixed(value: &BigDecimal, decimals: u8) -> String {
    value
        .with_scale_round(i64::from(decimals), RoundingMode::HalfUp)
        .to_string()
}

/// Placement of a currency symbol relative to the formatted value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// Symbol precedes the value (`$1.00`)
    Before,
    /// Symbol follows the value (`1.00$`)
    After,
}

/// Render a decimal as fixed-point with an attached currency symbol
///
/// # Examples
///
/// ```
/// use thorutil::{bn_or_zero, format_fixed_currency, SymbolPosition};
///
/// let value = bn_or_zero("1234.5");
/// assert_eq!(
///     format_fixed_currency(&value, 2, "$", SymbolPosition::Before),
///     "$1234.50"
/// );
/// assert_eq!(
///     format_fixed_currency(&value, 2, "€", SymbolPosition::After),
///     "1234.50€"
/// );
/// ```
pub fn format_fixed_currency(
    value: &BigDecimal,
    decimals: u8,
    symbol: &str,
    position: SymbolPosition,
) -> String {
    let formatted = format_fixed(value, decimals);
    match position {
        SymbolPosition::Before => format!("{symbol}{formatted}"),
        SymbolPosition::After => format!("{formatted}{symbol}"),
    }
}

/// Strip superfluous zeros from a formatted decimal string
///
/// Removes trailing fractional zeros (and a then-empty fractional part) and
/// leading integer zeros, keeping a single `0` before the decimal point.
///
/// # Examples
///
/// ```
/// use thorutil::trim_zeros;
///
/// assert_eq!(trim_zeros("1.50000"), "1.5");
/// assert_eq!(trim_zeros("0.00"), "0");
/// assert_eq!(trim_zeros("0012.30"), "12.3");
/// assert_eq!(trim_zeros("-0004.400"), "-4.4");
/// assert_eq!(trim_zeros("100"), "100");
/// ```
pub fn trim_zeros(value: &str) -> String {
    let trimmed = if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.')
    } else {
        value
    };

    let (sign, magnitude) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (int_part, frac_part) = match magnitude.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (magnitude, None),
    };
    let int_part = {
        let stripped = int_part.trim_start_matches('0');
        if stripped.is_empty() {
            "0"
        } else {
            stripped
        }
    };

    match frac_part {
        Some(frac) => format!("{sign}{int_part}.{frac}"),
        None => format!("{sign}{int_part}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bn_valid_and_invalid() {
        assert_eq!(bn("1.5"), Some(BigDecimal::from_str("1.5").unwrap()));
        assert_eq!(bn(" 42 "), Some(BigDecimal::from(42)));
        assert_eq!(bn("1e8"), Some(BigDecimal::from(100_000_000)));
        assert_eq!(bn("abc"), None);
        assert_eq!(bn(""), None);
    }

    #[test]
    fn test_bn_or_zero_degrades_to_zero() {
        assert_eq!(bn_or_zero("x"), BigDecimal::from(0));
        assert_eq!(bn_or_zero(f64::NAN), BigDecimal::from(0));
        assert_eq!(bn_or_zero(f64::INFINITY), BigDecimal::from(0));
        assert_eq!(bn_or_zero(None::<f64>), BigDecimal::from(0));
        assert_eq!(bn_or_zero(7u64), BigDecimal::from(7));
    }

    #[test]
    fn test_fixed_rounds_half_up() {
        assert_eq!(fixed("1.005", 2), BigDecimal::from_str("1.01").unwrap());
        assert_eq!(fixed("1.004", 2), BigDecimal::from_str("1.00").unwrap());
        assert_eq!(fixed("-1.005", 2), BigDecimal::from_str("-1.01").unwrap());
        assert_eq!(fixed("bad", 2), fixed(0, 2));
    }

    #[test]
    fn test_format_fixed_pads_and_rounds() {
        assert_eq!(format_fixed(&bn_or_zero("0"), 8), "0.00000000");
        assert_eq!(format_fixed(&bn_or_zero("1.23456789"), 4), "1.2346");
        assert_eq!(format_fixed(&bn_or_zero("-2.5"), 0), "-3");
    }

    #[test]
    fn test_format_fixed_currency_positions() {
        let v = bn_or_zero("10");
        assert_eq!(
            format_fixed_currency(&v, 2, "$", SymbolPosition::Before),
            "$10.00"
        );
        assert_eq!(
            format_fixed_currency(&v, 0, " RUNE", SymbolPosition::After),
            "10 RUNE"
        );
    }

    #[test]
    fn test_trim_zeros() {
        assert_eq!(trim_zeros("1.0010000"), "1.001");
        assert_eq!(trim_zeros("1.0000"), "1");
        assert_eq!(trim_zeros("10"), "10");
        assert_eq!(trim_zeros("010"), "10");
        assert_eq!(trim_zeros("0.50"), "0.5");
        assert_eq!(trim_zeros("000"), "0");
        assert_eq!(trim_zeros("-0.10"), "-0.1");
    }
}
