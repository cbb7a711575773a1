//! Common utility functions for calculations.
//!
//! This module provides shared functionality used by the future value
//! calculator and the growth schedule, including lenient number parsing and
//! monetary rounding.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

/// Leading numeric prefix: optional sign, then `Infinity` or a decimal
/// literal with an optional exponent.
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("numeric prefix pattern is valid")
});

/// Parses the longest numeric prefix of `text` as a floating-point number.
///
/// Leading whitespace is skipped and anything after the numeric prefix is
/// ignored, so `"12abc"` parses as `12`. Returns `NaN` when the text does not
/// start with a number.
///
/// # Examples
///
/// ```
/// use interest_core::calculations::common::parse_number;
///
/// assert_eq!(parse_number("  12.5%"), 12.5);
/// assert_eq!(parse_number("1e3"), 1000.0);
/// assert!(parse_number("abc").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    NUMERIC_PREFIX
        .find(text.trim_start())
        .and_then(|prefix| prefix.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Replaces `NaN` and zero with `0.0`, leaving every other value untouched.
pub fn or_zero(value: f64) -> f64 {
    if value.is_nan() || value == 0.0 { 0.0 } else { value }
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use interest_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // parse_number tests
    // =========================================================================

    #[test]
    fn parse_number_reads_plain_values() {
        assert_eq!(parse_number("1000"), 1000.0);
        assert_eq!(parse_number("5.25"), 5.25);
        assert_eq!(parse_number("-3"), -3.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("7."), 7.0);
    }

    #[test]
    fn parse_number_ignores_trailing_text() {
        assert_eq!(parse_number("12abc"), 12.0);
        assert_eq!(parse_number("1,000"), 1.0);
        assert_eq!(parse_number("4.5.6"), 4.5);
        assert_eq!(parse_number("2e"), 2.0);
    }

    #[test]
    fn parse_number_skips_leading_whitespace() {
        assert_eq!(parse_number("   42"), 42.0);
    }

    #[test]
    fn parse_number_reads_exponents() {
        assert_eq!(parse_number("1.5e2"), 150.0);
        assert_eq!(parse_number("2E-1"), 0.2);
    }

    #[test]
    fn parse_number_reads_infinity() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_number_returns_nan_without_numeric_prefix() {
        assert!(parse_number("").is_nan());
        assert!(parse_number("   ").is_nan());
        assert!(parse_number("abc12").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number(".").is_nan());
    }

    // =========================================================================
    // or_zero tests
    // =========================================================================

    #[test]
    fn or_zero_replaces_nan() {
        assert_eq!(or_zero(f64::NAN), 0.0);
    }

    #[test]
    fn or_zero_keeps_other_values() {
        assert_eq!(or_zero(12.5), 12.5);
        assert_eq!(or_zero(-1.0), -1.0);
        assert_eq!(or_zero(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn or_zero_normalizes_negative_zero() {
        assert!(or_zero(-0.0).is_sign_positive());
    }

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
    }

    #[test]
    fn round_half_up_handles_large_values() {
        assert_eq!(round_half_up(dec!(999999.999)), dec!(1000000.00));
    }
}
