use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{debug, info};

use interest_core::{CalculatorScreen, FutureValueCalculator};
use interest_ui::{
    logging::{self, ConsoleStream},
    preferences::{DEFAULT_PREFERENCES_FILE, Preferences, PreferencesError},
    report,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Compound interest calculator.
///
/// Opens the calculator window, pre-filled with any amounts given on the
/// command line. With `--headless` the calculation runs immediately and the
/// result line is printed instead.
#[derive(Debug, Parser)]
struct Cli {
    /// Principal amount.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    principal: String,

    /// Amount added at the end of every year.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    addition: String,

    /// Years to grow.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    years: String,

    /// Annual interest rate in percent.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    rate: String,

    /// Print the result instead of opening a window.
    #[arg(long)]
    headless: bool,

    /// With --headless, also print the year-by-year growth schedule.
    #[arg(long, requires = "headless")]
    schedule: bool,

    /// Preferences file (TOML). Without this flag, `compound-interest.toml`
    /// in the working directory is read when it exists.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level or filter directive; overrides the preferences file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file; overrides the preferences file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the preferences file. A missing default file yields defaults;
    /// a file named on the command line must exist.
    fn load_preferences(&self) -> Result<Preferences, PreferencesError> {
        match &self.config {
            Some(path) => Preferences::load(path),
            None => Preferences::load_or_default(Path::new(DEFAULT_PREFERENCES_FILE)),
        }
    }

    /// Applies command-line overrides on top of the loaded preferences.
    fn apply_overrides(
        &self,
        preferences: &mut Preferences,
    ) {
        if let Some(level) = &self.log_level {
            preferences.log.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            preferences.log.file = Some(file.clone());
        }
    }

    /// Enters the command-line amounts the way keystrokes would.
    fn fill(
        &self,
        screen: &mut CalculatorScreen,
    ) {
        screen.set_principal(&self.principal);
        screen.set_annual_addition(&self.addition);
        screen.set_time(&self.years);
        screen.set_rate(&self.rate);
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut preferences = cli.load_preferences()?;
    cli.apply_overrides(&mut preferences);
    logging::init_logging(&preferences.log, ConsoleStream::for_headless(cli.headless))?;
    debug!(?preferences, "preferences loaded");

    let mut screen =
        CalculatorScreen::new(FutureValueCalculator::new(preferences.zero_rate_policy));
    cli.fill(&mut screen);

    if cli.headless {
        screen.calculate();
        print!(
            "{}",
            report::render_report(&screen, preferences.decimal_places, cli.schedule)
        );
        return Ok(());
    }

    info!("starting calculator window");
    interest_ui::run(screen, preferences);
    Ok(())
}
