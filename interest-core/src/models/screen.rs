//! State of the calculator screen.
//!
//! The screen starts [`ScreenState::Idle`] with no result. Every explicit
//! calculation moves it to [`ScreenState::Computed`]; there is no way back.

use tracing::debug;

use crate::calculations::{FutureValueCalculator, GrowthSchedule, ScheduleError};
use crate::format::{DEFAULT_DECIMAL_PLACES, format_currency, format_number};
use crate::models::{CalculationResult, FormField, FormState};

/// Prefix of the line that shows the calculated future value.
pub const RESULT_LABEL: &str = "Future Value:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Nothing calculated yet.
    Idle,
    /// A result (finite or not) is on display.
    Computed,
}

/// Form fields, the optional result and the calculator that produces it.
#[derive(Debug, Clone, Default)]
pub struct CalculatorScreen {
    form: FormState,
    result: CalculationResult,
    calculator: FutureValueCalculator,
}

impl CalculatorScreen {
    pub fn new(calculator: FutureValueCalculator) -> Self {
        Self {
            calculator,
            ..Default::default()
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn result(&self) -> CalculationResult {
        self.result
    }

    pub fn state(&self) -> ScreenState {
        match self.result {
            Some(_) => ScreenState::Computed,
            None => ScreenState::Idle,
        }
    }

    /// Stores the principal, regrouping its digits as typed.
    pub fn set_principal(
        &mut self,
        text: &str,
    ) {
        self.form.principal = format_number(text, DEFAULT_DECIMAL_PLACES);
    }

    /// Stores the annual addition, regrouping its digits as typed.
    pub fn set_annual_addition(
        &mut self,
        text: &str,
    ) {
        self.form.annual_addition = format_number(text, DEFAULT_DECIMAL_PLACES);
    }

    /// Stores the years to grow, regrouping its digits as typed.
    pub fn set_time(
        &mut self,
        text: &str,
    ) {
        self.form.time = format_number(text, DEFAULT_DECIMAL_PLACES);
    }

    /// Stores the rate exactly as typed.
    pub fn set_rate(
        &mut self,
        text: &str,
    ) {
        self.form.rate = text.to_string();
    }

    /// Routes an edit to the matching setter and returns the text the field
    /// should now show.
    pub fn edit(
        &mut self,
        field: FormField,
        text: &str,
    ) -> &str {
        match field {
            FormField::Principal => self.set_principal(text),
            FormField::AnnualAddition => self.set_annual_addition(text),
            FormField::Time => self.set_time(text),
            FormField::Rate => self.set_rate(text),
        }
        self.form.get(field)
    }

    /// Calculates the future value of the current fields and keeps it as the
    /// displayed result.
    pub fn calculate(&mut self) -> f64 {
        let future_value = self.calculator.calculate_input(&self.form.to_input());
        if self.result.is_none() {
            debug!("first calculation on screen");
        }
        debug!(form = %self.form, future_value, "screen calculated");
        self.result = Some(future_value);
        future_value
    }

    /// The result line, e.g. `Future Value: $2,886.68`; `None` until the
    /// first calculation.
    pub fn result_line(
        &self,
        decimal_places: usize,
    ) -> Option<String> {
        self.result
            .map(|value| format!("{RESULT_LABEL} {}", format_currency(value, decimal_places)))
    }

    /// Builds the yearly growth schedule for the current fields.
    pub fn schedule(&self) -> Result<GrowthSchedule, ScheduleError> {
        GrowthSchedule::build(&self.form.to_input())
    }
}
