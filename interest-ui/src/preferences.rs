//! User preferences read from a TOML file.
//!
//! Every key is optional; missing keys take their default values. A missing
//! file is not an error when loading through [`Preferences::load_or_default`].

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use interest_core::{DEFAULT_DECIMAL_PLACES, ZeroRatePolicy};
use serde::Deserialize;
use thiserror::Error;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_PREFERENCES_FILE: &str = "compound-interest.toml";

/// Errors that can occur while loading preferences.
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("cannot read preferences file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid preferences file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("decimal places must be at most {max}, got {value}")]
    DecimalPlaces { value: usize, max: usize },

    #[error("window size must be positive, got {width}x{height}")]
    WindowSize { width: f32, height: f32 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Fractional digits shown in the result line.
    pub decimal_places: usize,

    /// What a zero interest rate evaluates to.
    pub zero_rate_policy: ZeroRatePolicy,

    pub window: WindowPreferences,
    pub log: LogPreferences,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            zero_rate_policy: ZeroRatePolicy::default(),
            window: WindowPreferences::default(),
            log: LogPreferences::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowPreferences {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 640.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogPreferences {
    /// A bare level ("info", "debug", ...) or any `EnvFilter` directive.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,

    /// Log file to append to, if any.
    pub file: Option<PathBuf>,

    /// Whether log records are also written to the console (stdout, or
    /// stderr in headless mode).
    pub stdout: bool,
}

impl Default for LogPreferences {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            stdout: true,
        }
    }
}

impl Preferences {
    pub const MAX_DECIMAL_PLACES: usize = 10;

    /// Parses and validates preferences from TOML text.
    pub fn from_toml_str(
        text: &str,
        path: &Path,
    ) -> Result<Self, PreferencesError> {
        let preferences: Self = toml::from_str(text).map_err(|source| PreferencesError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        preferences.validate()?;
        Ok(preferences)
    }

    /// Loads preferences from `path`.
    pub fn load(path: &Path) -> Result<Self, PreferencesError> {
        let text = fs::read_to_string(path).map_err(|source| PreferencesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Loads preferences from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, PreferencesError> {
        match Self::load(path) {
            Err(PreferencesError::Read { source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Ok(Self::default())
            }
            other => other,
        }
    }

    fn validate(&self) -> Result<(), PreferencesError> {
        if self.decimal_places > Self::MAX_DECIMAL_PLACES {
            return Err(PreferencesError::DecimalPlaces {
                value: self.decimal_places,
                max: Self::MAX_DECIMAL_PLACES,
            });
        }
        let WindowPreferences { width, height } = self.window;
        if !(width > 0.0 && height > 0.0) {
            return Err(PreferencesError::WindowSize { width, height });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(text: &str) -> Result<Preferences, PreferencesError> {
        Preferences::from_toml_str(text, Path::new("test.toml"))
    }

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(parse("").unwrap(), Preferences::default());
    }

    #[test]
    fn full_file_is_read() {
        let preferences = parse(
            r#"
            decimal_places = 0
            zero_rate_policy = "propagate"

            [window]
            width = 600.0
            height = 800.0

            [log]
            level = "debug"
            file = "calc.log"
            stdout = false
            "#,
        )
        .unwrap();

        assert_eq!(
            preferences,
            Preferences {
                decimal_places: 0,
                zero_rate_policy: ZeroRatePolicy::Propagate,
                window: WindowPreferences {
                    width: 600.0,
                    height: 800.0,
                },
                log: LogPreferences {
                    level: "debug".to_string(),
                    file: Some(PathBuf::from("calc.log")),
                    stdout: false,
                },
            }
        );
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let preferences = parse("[log]\nlevel = \"warn\"\n").unwrap();

        assert_eq!(preferences.log.level, "warn");
        assert!(preferences.log.stdout);
        assert_eq!(preferences.window, WindowPreferences::default());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result = parse("zero_rate_policy = \"guess\"");

        assert!(matches!(result, Err(PreferencesError::Parse { .. })));
    }

    #[test]
    fn too_many_decimal_places_are_rejected() {
        let result = parse("decimal_places = 11");

        assert!(matches!(
            result,
            Err(PreferencesError::DecimalPlaces { value: 11, max: 10 })
        ));
    }

    #[test]
    fn zero_window_size_is_rejected() {
        let result = parse("[window]\nwidth = 0.0\n");

        assert!(matches!(result, Err(PreferencesError::WindowSize { .. })));
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let preferences = Preferences::load_or_default(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(preferences, Preferences::default());
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "decimal_places = 4").unwrap();

        let preferences = Preferences::load(file.path()).unwrap();

        assert_eq!(preferences.decimal_places, 4);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = Preferences::load(&dir.path().join("absent.toml"));

        assert!(matches!(result, Err(PreferencesError::Read { .. })));
    }
}
