//! Future value of a compounding investment with a fixed annual addition.
//!
//! # Formula
//!
//! ```text
//! FV = P × (1 + r)^n + A × ((1 + r)^n − 1) / r
//! ```
//!
//! | Symbol | Description |
//! |--------|-------------|
//! | P      | Principal amount |
//! | A      | Annual addition, paid at the end of each year |
//! | r      | Annual interest rate as a fraction (5% → 0.05) |
//! | n      | Years to grow (may be fractional) |
//!
//! The second term divides by `r`, so a zero rate needs a policy; see
//! [`ZeroRatePolicy`].
//!
//! # Example
//!
//! ```
//! use interest_core::calculations::{FutureValueCalculator, ZeroRatePolicy};
//!
//! let calculator = FutureValueCalculator::new(ZeroRatePolicy::Limit);
//! let future_value = calculator.calculate("1,000", "100", "5", "10");
//!
//! assert!((future_value - 2886.68).abs() < 0.01);
//! ```

use serde::Deserialize;
use tracing::{debug, warn};

use crate::calculations::common::{or_zero, parse_number};
use crate::format::strip_separators;

/// How the calculator treats a rate of exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroRatePolicy {
    /// Use the limit of the formula as the rate approaches zero:
    /// `P + A × n`.
    #[default]
    Limit,

    /// Evaluate the formula as written. With a zero rate the addition term is
    /// `0 / 0`, so the result is `NaN`.
    Propagate,
}

/// The four form fields after numeric coercion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalculationInput {
    /// Initial deposit.
    pub principal: f64,

    /// Amount added at the end of every year.
    pub annual_addition: f64,

    /// Annual rate as a fraction (the typed percentage divided by 100).
    pub rate_fraction: f64,

    /// Years to grow.
    pub years: f64,
}

impl CalculationInput {
    /// Parses the raw text of the four form fields.
    ///
    /// Thousands separators are stripped from the principal and the annual
    /// addition. Any field that does not start with a number counts as zero;
    /// the rate is divided by 100 before that check.
    pub fn parse(
        principal: &str,
        annual_addition: &str,
        rate: &str,
        time: &str,
    ) -> Self {
        Self {
            principal: parse_field("principal", &strip_separators(principal)),
            annual_addition: parse_field("annual_addition", &strip_separators(annual_addition)),
            rate_fraction: or_zero(checked_parse("rate", rate) / 100.0),
            years: parse_field("time", time),
        }
    }
}

/// Calculator for the future value formula.
///
/// Holds the [`ZeroRatePolicy`]; evaluation itself is pure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FutureValueCalculator {
    zero_rate_policy: ZeroRatePolicy,
}

impl FutureValueCalculator {
    pub fn new(zero_rate_policy: ZeroRatePolicy) -> Self {
        Self { zero_rate_policy }
    }

    pub fn zero_rate_policy(&self) -> ZeroRatePolicy {
        self.zero_rate_policy
    }

    /// Parses the four form fields and evaluates the formula.
    ///
    /// Never fails. The result may be `NaN` or infinite, for example with
    /// [`ZeroRatePolicy::Propagate`] and a zero rate, or when the growth
    /// factor overflows.
    pub fn calculate(
        &self,
        principal: &str,
        annual_addition: &str,
        rate: &str,
        time: &str,
    ) -> f64 {
        let input = CalculationInput::parse(principal, annual_addition, rate, time);
        self.calculate_input(&input)
    }

    /// Evaluates the formula for already parsed input.
    pub fn calculate_input(
        &self,
        input: &CalculationInput,
    ) -> f64 {
        let future_value = if input.rate_fraction == 0.0
            && self.zero_rate_policy == ZeroRatePolicy::Limit
        {
            input.principal + input.annual_addition * input.years
        } else {
            self.principal_growth(input) + self.addition_growth(input)
        };

        debug!(
            principal = input.principal,
            annual_addition = input.annual_addition,
            rate_fraction = input.rate_fraction,
            years = input.years,
            policy = ?self.zero_rate_policy,
            future_value,
            "calculated future value"
        );

        future_value
    }

    /// Principal compounded over the whole period: `P × (1 + r)^n`.
    fn principal_growth(
        &self,
        input: &CalculationInput,
    ) -> f64 {
        if self.uses_stable_form(input) {
            input.principal * (input.years * input.rate_fraction.ln_1p()).exp()
        } else {
            input.principal * growth_factor(input)
        }
    }

    /// Accumulated annual additions: `A × ((1 + r)^n − 1) / r`.
    fn addition_growth(
        &self,
        input: &CalculationInput,
    ) -> f64 {
        if self.uses_stable_form(input) {
            let accumulated = (input.years * input.rate_fraction.ln_1p()).exp_m1();
            input.annual_addition * (accumulated / input.rate_fraction)
        } else {
            input.annual_addition * ((growth_factor(input) - 1.0) / input.rate_fraction)
        }
    }

    /// `(1 + r)^n − 1` cancels badly for rates near zero; under
    /// [`ZeroRatePolicy::Limit`] it is evaluated through `ln_1p`/`exp_m1`
    /// instead. `ln_1p` needs `r > -1`.
    fn uses_stable_form(
        &self,
        input: &CalculationInput,
    ) -> bool {
        self.zero_rate_policy == ZeroRatePolicy::Limit && input.rate_fraction > -1.0
    }
}

/// Evaluates the form fields with the default [`ZeroRatePolicy::Limit`].
///
/// # Examples
///
/// ```
/// use interest_core::calculate;
///
/// let future_value = calculate("1000", "0", "5", "10");
/// assert!((future_value - 1628.89).abs() < 0.01);
///
/// assert_eq!(calculate("", "", "", ""), 0.0);
/// ```
pub fn calculate(
    principal: &str,
    annual_addition: &str,
    rate: &str,
    time: &str,
) -> f64 {
    FutureValueCalculator::default().calculate(principal, annual_addition, rate, time)
}

fn growth_factor(input: &CalculationInput) -> f64 {
    (1.0 + input.rate_fraction).powf(input.years)
}

fn parse_field(
    field: &'static str,
    text: &str,
) -> f64 {
    or_zero(checked_parse(field, text))
}

/// Parses `text`, warning when a non-blank field has no numeric prefix.
fn checked_parse(
    field: &'static str,
    text: &str,
) -> f64 {
    let value = parse_number(text);
    if value.is_nan() && !text.trim().is_empty() {
        warn!(field, input = %text, "non-numeric input treated as zero");
    }
    value
}
