pub mod calculations;
pub mod format;
pub mod models;

pub use calculations::{
    CalculationInput, FutureValueCalculator, GrowthSchedule, ScheduleError, ScheduleRow,
    ZeroRatePolicy, calculate,
};
pub use format::{
    DEFAULT_DECIMAL_PLACES, FormatValue, format_currency, format_number, strip_separators,
};
pub use models::*;
