//! Configuration module for `StudentHub`

use crate::core::calendar::CalendarWindow;
use crate::core::credits::CreditLimits;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

const DIR_VARIABLE: &str = "$STUDENT_HUB";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Course catalog TOML file
    #[serde(default)]
    pub catalog: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Credit-load thresholds
    #[serde(default)]
    pub limits: CreditLimits,
    /// Visible calendar window
    #[serde(default)]
    pub calendar: CalendarWindow,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override catalog path
    pub catalog: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, String> {
    value
        .parse::<T>()
        .map_err(|_| format!("Invalid numeric value for '{key}': '{value}'"))
}

impl Config {
    /// Get the `$STUDENT_HUB` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/studenthub`
    /// - macOS: `~/Library/Application Support/studenthub`
    /// - Windows: `%APPDATA%\studenthub`
    #[must_use]
    pub fn get_studenthub_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studenthub")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults`
    /// are filled. Numeric sections already fall back to their serde
    /// defaults when absent.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.catalog.is_empty() && !defaults.paths.catalog.is_empty() {
            self.paths.catalog.clone_from(&defaults.paths.catalog);
            changed = true;
        }
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values; the config file is
    /// left untouched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(catalog) = &overrides.catalog {
            self.paths.catalog.clone_from(catalog);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds
    ///
    /// The file is located in the directory returned by [`get_studenthub_dir`].
    ///
    /// [`get_studenthub_dir`]: Self::get_studenthub_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_studenthub_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$STUDENT_HUB` to the config directory path
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_studenthub_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$STUDENT_HUB` in path values. Missing fields use their serde
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.catalog = Self::expand_variables(&config.paths.catalog);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the compiled-in default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults if not found
    ///
    /// An existing file has missing fields merged from defaults and is saved
    /// back. On first run the config directory and file are created. Any
    /// read or parse failure falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the platform config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`, `file`, `verbose`
    /// - `catalog`, `reports_dir`
    /// - `max_total`, `max_major`, `max_minor`, `max_elective`
    /// - `start_hour`, `end_hour`, `hour_height_px`
    ///
    /// Returns `None` if the key is not recognized.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalog" => Some(self.paths.catalog.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "max_total" | "max-total" => Some(self.limits.total.to_string()),
            "max_major" | "max-major" => Some(self.limits.major.to_string()),
            "max_minor" | "max-minor" => Some(self.limits.minor.to_string()),
            "max_elective" | "max-elective" => Some(self.limits.elective.to_string()),
            "start_hour" | "start-hour" => Some(self.calendar.start_hour.to_string()),
            "end_hour" | "end-hour" => Some(self.calendar.end_hour.to_string()),
            "hour_height_px" | "hour-height-px" => Some(self.calendar.hour_height_px.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to
    /// persist changes. Calendar keys are checked against the window
    /// invariants and rejected without modifying the config.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized, the value cannot be
    /// parsed, or the resulting calendar window is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "catalog" => self.paths.catalog = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "max_total" | "max-total" => self.limits.total = parse_number(key, value)?,
            "max_major" | "max-major" => self.limits.major = parse_number(key, value)?,
            "max_minor" | "max-minor" => self.limits.minor = parse_number(key, value)?,
            "max_elective" | "max-elective" => self.limits.elective = parse_number(key, value)?,
            "start_hour" | "start-hour" | "end_hour" | "end-hour" | "hour_height_px"
            | "hour-height-px" => {
                let mut window = self.calendar;
                match key {
                    "start_hour" | "start-hour" => window.start_hour = parse_number(key, value)?,
                    "end_hour" | "end-hour" => window.end_hour = parse_number(key, value)?,
                    _ => window.hour_height_px = parse_number(key, value)?,
                }
                window.validate()?;
                self.calendar = window;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalog" => self.paths.catalog.clone_from(&defaults.paths.catalog),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "max_total" | "max-total" => self.limits.total = defaults.limits.total,
            "max_major" | "max-major" => self.limits.major = defaults.limits.major,
            "max_minor" | "max-minor" => self.limits.minor = defaults.limits.minor,
            "max_elective" | "max-elective" => self.limits.elective = defaults.limits.elective,
            "start_hour" | "start-hour" => self.calendar.start_hour = defaults.calendar.start_hour,
            "end_hour" | "end-hour" => self.calendar.end_hour = defaults.calendar.end_hour,
            "hour_height_px" | "hour-height-px" => {
                self.calendar.hour_height_px = defaults.calendar.hour_height_px;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalog = \"{}\"", self.paths.catalog)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[limits]")?;
        writeln!(f, "  total = {}", self.limits.total)?;
        writeln!(f, "  major = {}", self.limits.major)?;
        writeln!(f, "  minor = {}", self.limits.minor)?;
        writeln!(f, "  elective = {}", self.limits.elective)?;

        writeln!(f, "\n[calendar]")?;
        writeln!(f, "  start_hour = {}", self.calendar.start_hour)?;
        writeln!(f, "  end_hour = {}", self.calendar.end_hour)?;
        writeln!(f, "  hour_height_px = {}", self.calendar.hour_height_px)?;

        Ok(())
    }
}
