//! Display formatting for amounts typed into and shown by the calculator.
//!
//! Formatting never fails: the integer part of the value is reduced to its
//! ASCII digits and grouped in threes with a comma, while the fractional part
//! is carried through untouched. The same function serves both the input
//! fields (while the user is typing) and the rendered result.

use std::borrow::Cow;

/// Decimal places used when a numeric result is rendered.
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

const THOUSANDS_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';

/// A value accepted by [`format_number`]: either text the user is typing or
/// a computed number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormatValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> From<&'a str> for FormatValue<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for FormatValue<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl From<f64> for FormatValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Formats a value with thousands separators.
///
/// Numbers are first rendered with exactly `decimal_places` fractional
/// digits. Text is used as typed. The result is then split on `.`: with
/// exactly one separator the output is `integer.fraction`, otherwise only the
/// text before the first separator is kept. Every non-digit (including a
/// sign) is removed from the integer part before grouping.
///
/// Non-finite numbers render as `NaN`, `Infinity` or `-Infinity`.
///
/// # Examples
///
/// ```
/// use interest_core::format::format_number;
///
/// assert_eq!(format_number(1234.5, 2), "1,234.50");
/// assert_eq!(format_number("12a3b", 2), "123");
/// assert_eq!(format_number("1234567.8", 2), "1,234,567.8");
/// ```
pub fn format_number<'a>(
    value: impl Into<FormatValue<'a>>,
    decimal_places: usize,
) -> String {
    let rendered: Cow<'a, str> = match value.into() {
        FormatValue::Text(text) => Cow::Borrowed(text),
        FormatValue::Number(number) if !number.is_finite() => {
            return non_finite_label(number).to_string();
        }
        FormatValue::Number(number) => Cow::Owned(format!("{number:.decimal_places$}")),
    };

    let parts: Vec<&str> = rendered.split(DECIMAL_SEPARATOR).collect();
    let integer = group_thousands(&digits_only(parts[0]));

    match parts.as_slice() {
        [_, fraction] => format!("{integer}{DECIMAL_SEPARATOR}{fraction}"),
        _ => integer,
    }
}

/// Formats a number as a dollar amount, e.g. `$1,234.50`.
pub fn format_currency(
    value: f64,
    decimal_places: usize,
) -> String {
    format!("${}", format_number(value, decimal_places))
}

/// Removes every thousands separator from `text`.
pub fn strip_separators(text: &str) -> String {
    text.replace(THOUSANDS_SEPARATOR, "")
}

fn digits_only(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Inserts a separator every three digits counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}

fn non_finite_label(number: f64) -> &'static str {
    if number.is_nan() {
        "NaN"
    } else if number.is_sign_positive() {
        "Infinity"
    } else {
        "-Infinity"
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // numeric input
    // =========================================================================

    #[test]
    fn format_number_pads_to_two_places() {
        assert_eq!(format_number(1234.5, DEFAULT_DECIMAL_PLACES), "1,234.50");
    }

    #[test]
    fn format_number_renders_zero() {
        assert_eq!(format_number(0.0, DEFAULT_DECIMAL_PLACES), "0.00");
    }

    #[test]
    fn format_number_rounds_to_requested_places() {
        assert_eq!(format_number(1628.894626777442, 2), "1,628.89");
        assert_eq!(format_number(2886.683880332326, 2), "2,886.68");
        assert_eq!(format_number(999.999, 2), "1,000.00");
    }

    #[test]
    fn format_number_without_fraction() {
        assert_eq!(format_number(1234567.4, 0), "1,234,567");
    }

    #[test]
    fn format_number_drops_sign() {
        assert_eq!(format_number(-1234.5, 2), "1,234.50");
    }

    #[test]
    fn format_number_labels_non_finite_values() {
        assert_eq!(format_number(f64::NAN, 2), "NaN");
        assert_eq!(format_number(f64::INFINITY, 2), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY, 2), "-Infinity");
    }

    // =========================================================================
    // text input
    // =========================================================================

    #[test]
    fn format_number_strips_non_digits_from_text() {
        assert_eq!(format_number("12a3b", 2), "123");
    }

    #[test]
    fn format_number_regroups_typed_text() {
        assert_eq!(format_number("1,0000", 2), "10,000");
        assert_eq!(format_number("100", 2), "100");
    }

    #[test]
    fn format_number_keeps_fraction_verbatim() {
        assert_eq!(format_number("1234.5", 2), "1,234.5");
        assert_eq!(format_number("1234.", 2), "1,234.");
        assert_eq!(format_number("1234.x9", 2), "1,234.x9");
    }

    #[test]
    fn format_number_keeps_only_first_part_with_two_separators() {
        assert_eq!(format_number("1.2.3", 2), "1");
    }

    #[test]
    fn format_number_leaves_empty_integer_part_empty() {
        assert_eq!(format_number("", 2), "");
        assert_eq!(format_number("abc", 2), "");
        assert_eq!(format_number(".5", 2), ".5");
    }

    // =========================================================================
    // properties
    // =========================================================================

    #[test]
    fn format_number_is_idempotent_on_its_output() {
        for value in [0.0, 1.0, 12.345, 1234.5, 98765.4321, 1_000_000.0, 123_456_789.01] {
            let once = format_number(value, DEFAULT_DECIMAL_PLACES);
            let twice = format_number(&once, DEFAULT_DECIMAL_PLACES);
            assert_eq!(twice, once, "not idempotent for {value}");
        }
    }

    #[test]
    fn stripping_separators_then_reformatting_round_trips() {
        for value in [0.0, 999.99, 1234.5, 1_000_000.0, 987_654_321.5] {
            let formatted = format_number(value, DEFAULT_DECIMAL_PLACES);
            let reformatted = format_number(&strip_separators(&formatted), DEFAULT_DECIMAL_PLACES);
            assert_eq!(reformatted, formatted);
        }
    }

    #[test]
    fn strip_separators_removes_all_commas() {
        assert_eq!(strip_separators("1,234,567.89"), "1234567.89");
        assert_eq!(strip_separators("12"), "12");
    }

    #[test]
    fn format_currency_prefixes_dollar_sign() {
        assert_eq!(format_currency(2886.683880332326, 2), "$2,886.68");
        assert_eq!(format_currency(f64::NAN, 2), "$NaN");
    }
}
