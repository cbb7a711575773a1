//! Plain-text rendering of the calculator screen.
//!
//! Used for headless output and for the schedule table in the window.

use interest_core::{CalculatorScreen, GrowthSchedule, format_number};
use rust_decimal::Decimal;
use tracing::warn;

const SCHEDULE_HEADER: [&str; 4] = ["Year", "Contributions", "Interest", "Balance"];

/// Renders the result line, followed by the growth schedule when
/// `with_schedule` is set. Returns an empty string before the first
/// calculation.
pub fn render_report(
    screen: &CalculatorScreen,
    decimal_places: usize,
    with_schedule: bool,
) -> String {
    let Some(result_line) = screen.result_line(decimal_places) else {
        return String::new();
    };

    let mut report = format!("{result_line}\n");
    if with_schedule {
        match screen.schedule() {
            Ok(schedule) => {
                report.push('\n');
                for line in schedule_lines(&schedule) {
                    report.push_str(&line);
                    report.push('\n');
                }
            }
            Err(error) => {
                warn!(%error, "growth schedule unavailable");
                report.push_str(&format!("Schedule unavailable: {error}\n"));
            }
        }
    }
    report
}

/// Formats the schedule as aligned text lines, header first.
pub fn schedule_lines(schedule: &GrowthSchedule) -> Vec<String> {
    let [year, contributions, interest, balance] = SCHEDULE_HEADER;
    let mut lines = Vec::with_capacity(schedule.rows().len() + 1);
    lines.push(format!(
        "{year:>4}  {contributions:>16}  {interest:>16}  {balance:>16}"
    ));
    lines.extend(schedule.rows().iter().map(|row| {
        format!(
            "{:>4}  {:>16}  {:>16}  {:>16}",
            row.year,
            fmt_amount(row.contributions),
            fmt_amount(row.interest),
            fmt_amount(row.balance),
        )
    }));
    lines
}

/// Format decimal as a signed currency string with separators.
fn fmt_amount(value: Decimal) -> String {
    let digits = format_number(&format!("{:.2}", value.abs()), 2);
    if value.is_sign_negative() && !value.is_zero() {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

#[cfg(test)]
mod tests {
    use interest_core::{FutureValueCalculator, ZeroRatePolicy};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn screen(
        principal: &str,
        addition: &str,
        rate: &str,
        time: &str,
    ) -> CalculatorScreen {
        let mut screen = CalculatorScreen::default();
        screen.set_principal(principal);
        screen.set_annual_addition(addition);
        screen.set_rate(rate);
        screen.set_time(time);
        screen
    }

    #[test]
    fn idle_screen_renders_nothing() {
        let screen = screen("1000", "100", "5", "10");

        assert_eq!(render_report(&screen, 2, true), "");
    }

    #[test]
    fn result_line_only() {
        let mut screen = screen("1000", "100", "5", "10");
        screen.calculate();

        assert_eq!(render_report(&screen, 2, false), "Future Value: $2,886.68\n");
    }

    #[test]
    fn result_line_respects_decimal_places() {
        let mut screen = screen("1000", "100", "5", "10");
        screen.calculate();

        assert_eq!(render_report(&screen, 0, false), "Future Value: $2,887\n");
    }

    #[test]
    fn report_with_schedule() {
        let mut screen = screen("1000", "100", "5", "2");
        screen.calculate();

        assert_eq!(
            render_report(&screen, 2, true),
            "Future Value: $1,307.50\n\
             \n\
             Year     Contributions          Interest           Balance\n\
             \x20  1         $1,100.00            $50.00         $1,150.00\n\
             \x20  2         $1,200.00           $107.50         $1,307.50\n"
        );
    }

    #[test]
    fn schedule_error_is_reported() {
        let mut screen = screen("1000", "0", "5", "10");
        screen.set_rate("Infinity");
        screen.calculate();

        let report = render_report(&screen, 2, true);

        assert!(report.starts_with("Future Value: $NaN\n"));
        assert!(report.contains("Schedule unavailable: rate is not a representable amount"));
    }

    #[test]
    fn propagated_nan_is_rendered() {
        let mut screen = CalculatorScreen::new(FutureValueCalculator::new(ZeroRatePolicy::Propagate));
        screen.calculate();

        assert_eq!(render_report(&screen, 2, false), "Future Value: $NaN\n");
    }

    #[test]
    fn fmt_amount_keeps_sign() {
        assert_eq!(fmt_amount(dec!(-1234.5)), "-$1,234.50");
        assert_eq!(fmt_amount(dec!(0)), "$0.00");
        assert_eq!(fmt_amount(dec!(1100)), "$1,100.00");
    }
}
