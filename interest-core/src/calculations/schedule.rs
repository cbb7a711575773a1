//! Year-by-year growth schedule.
//!
//! Complements the closed-form future value with a table of the balance at
//! the end of every whole year. Each year the balance earns interest and then
//! receives the annual addition, the same end-of-period timing the formula
//! assumes:
//!
//! ```text
//! balance(0) = P
//! balance(k) = balance(k − 1) × (1 + r) + A
//! ```
//!
//! Arithmetic is done in [`Decimal`]; every reported amount is rounded to
//! cents with [`round_half_up`]. Fractional years are truncated to whole
//! years.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use interest_core::calculations::{CalculationInput, GrowthSchedule};
//!
//! let input = CalculationInput::parse("1000", "100", "5", "10");
//! let schedule = GrowthSchedule::build(&input).unwrap();
//!
//! assert_eq!(schedule.rows().len(), 10);
//! assert_eq!(schedule.final_balance(), Some(dec!(2886.68)));
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::CalculationInput;
use crate::calculations::common::round_half_up;

/// Errors that can occur while building a growth schedule.
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    /// An input cannot be represented as a decimal amount.
    #[error("{field} is not a representable amount: {value}")]
    NotRepresentable { field: &'static str, value: f64 },

    /// The time horizon is negative.
    #[error("years to grow must not be negative, got {0}")]
    NegativeYears(f64),

    /// The time horizon exceeds [`GrowthSchedule::MAX_YEARS`].
    #[error("years to grow must be at most {max}, got {years}")]
    TooManyYears { years: f64, max: u32 },

    /// The balance grew beyond the decimal range.
    #[error("balance overflowed in year {year}")]
    Overflow { year: u32 },
}

/// One line of the schedule: the state at the end of `year`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    /// Year number, starting at 1.
    pub year: u32,

    /// Principal plus every addition made so far.
    pub contributions: Decimal,

    /// Interest earned so far (balance minus contributions).
    pub interest: Decimal,

    /// Balance at the end of the year, after the addition.
    pub balance: Decimal,
}

/// The full year-by-year schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrowthSchedule {
    rows: Vec<ScheduleRow>,
}

impl GrowthSchedule {
    /// Longest horizon a schedule is built for.
    pub const MAX_YEARS: u32 = 1_000;

    /// Builds the schedule for parsed calculator input.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] if:
    /// - an amount or the rate cannot be represented as a decimal
    /// - the number of years is negative or above [`Self::MAX_YEARS`]
    /// - the balance overflows
    pub fn build(input: &CalculationInput) -> Result<Self, ScheduleError> {
        let years = whole_years(input.years)?;
        let principal = to_decimal("principal", input.principal)?;
        let addition = to_decimal("annual_addition", input.annual_addition)?;
        let growth = Decimal::ONE + to_decimal("rate", input.rate_fraction)?;

        let mut rows = Vec::with_capacity(years as usize);
        let mut balance = principal;
        let mut contributions = principal;

        for year in 1..=years {
            balance = balance
                .checked_mul(growth)
                .and_then(|grown| grown.checked_add(addition))
                .ok_or_else(|| {
                    warn!(year, "balance overflowed while building growth schedule");
                    ScheduleError::Overflow { year }
                })?;
            contributions = contributions
                .checked_add(addition)
                .ok_or(ScheduleError::Overflow { year })?;

            rows.push(ScheduleRow {
                year,
                contributions: round_half_up(contributions),
                interest: round_half_up(balance - contributions),
                balance: round_half_up(balance),
            });
        }

        debug!(years, rows = rows.len(), "built growth schedule");
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Balance at the end of the last whole year, if there is one.
    pub fn final_balance(&self) -> Option<Decimal> {
        self.rows.last().map(|row| row.balance)
    }
}

fn whole_years(years: f64) -> Result<u32, ScheduleError> {
    if !years.is_finite() {
        return Err(ScheduleError::NotRepresentable {
            field: "time",
            value: years,
        });
    }
    if years < 0.0 {
        return Err(ScheduleError::NegativeYears(years));
    }
    if years >= f64::from(GrowthSchedule::MAX_YEARS + 1) {
        return Err(ScheduleError::TooManyYears {
            years,
            max: GrowthSchedule::MAX_YEARS,
        });
    }
    Ok(years.trunc() as u32)
}

fn to_decimal(
    field: &'static str,
    value: f64,
) -> Result<Decimal, ScheduleError> {
    Decimal::from_f64(value).ok_or(ScheduleError::NotRepresentable { field, value })
}
