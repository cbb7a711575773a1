mod form_state;
mod screen;

pub use form_state::{CalculationResult, FormField, FormState};
pub use screen::{CalculatorScreen, RESULT_LABEL, ScreenState};
