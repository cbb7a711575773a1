use std::fmt;

use crate::calculations::CalculationInput;

/// Result of the most recent calculation.
///
/// `None` means nothing has been calculated yet, which is shown differently
/// from a calculated zero.
pub type CalculationResult = Option<f64>;

/// One of the four calculator fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Principal,
    AnnualAddition,
    Time,
    Rate,
}

impl FormField {
    /// Every field, in the order the screen shows them.
    pub const ALL: [FormField; 4] = [
        FormField::Principal,
        FormField::AnnualAddition,
        FormField::Time,
        FormField::Rate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Principal => "Principal amount",
            FormField::AnnualAddition => "Annual Addition",
            FormField::Time => "Years to grow",
            FormField::Rate => "Annual interest rate (%)",
        }
    }
}

/// Text of the four calculator fields, exactly as the user is editing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub principal: String,
    pub annual_addition: String,
    pub rate: String,
    pub time: String,
}

impl FormState {
    pub fn get(
        &self,
        field: FormField,
    ) -> &str {
        match field {
            FormField::Principal => &self.principal,
            FormField::AnnualAddition => &self.annual_addition,
            FormField::Time => &self.time,
            FormField::Rate => &self.rate,
        }
    }

    /// Parses the current field text into calculator input.
    pub fn to_input(&self) -> CalculationInput {
        CalculationInput::parse(&self.principal, &self.annual_addition, &self.rate, &self.time)
    }
}

impl fmt::Display for FormState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for field in FormField::ALL {
            let label = format!("{}:", field.label());
            writeln!(f, "{label:<26}{}", self.get(field))?;
        }
        Ok(())
    }
}
