//! Calculation modules for the compound interest calculator.
//!
//! This module provides the closed-form future value calculation and the
//! year-by-year growth schedule, plus the parsing and rounding helpers they
//! share.

pub mod common;
pub mod future_value;
pub mod schedule;

pub use future_value::{CalculationInput, FutureValueCalculator, ZeroRatePolicy, calculate};
pub use schedule::{GrowthSchedule, ScheduleError, ScheduleRow};
