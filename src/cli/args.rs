//! CLI argument definitions for `StudentHub`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use student_hub::config::ConfigOverrides;
use student_hub::core::models::CourseFilter;
use student_hub::core::report::ReportFormat;
use student_hub::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to
/// `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog`, `max_total`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

/// Catalog search filters; all given filters must match
#[derive(Debug, Default, Args)]
pub struct CatalogFilterArgs {
    /// Substring of the course name or description
    #[arg(short, long, value_name = "TEXT")]
    pub keyword: Option<String>,

    /// Substring of the course code
    #[arg(long, value_name = "CODE")]
    pub code: Option<String>,

    /// Substring of the instructor name
    #[arg(long, value_name = "NAME")]
    pub instructor: Option<String>,

    /// Exact department
    #[arg(long, value_name = "DEPARTMENT")]
    pub department: Option<String>,

    /// Exact semester (e.g., "Fall 2025")
    #[arg(long, value_name = "SEMESTER")]
    pub semester: Option<String>,
}

impl CatalogFilterArgs {
    /// Convert into a catalog filter
    pub fn to_filter(&self) -> CourseFilter {
        CourseFilter {
            keyword: self.keyword.clone(),
            code: self.code.clone(),
            instructor: self.instructor.clone(),
            department: self.department.clone(),
            semester: self.semester.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Search the course catalog.
    ///
    /// Without filters, lists every course.
    Catalog {
        #[command(flatten)]
        filters: CatalogFilterArgs,
    },
    /// Evaluate a course selection.
    ///
    /// Lays out the weekly calendar, reports time conflicts and credit
    /// alerts, and says whether registration is allowed.
    Schedule {
        /// Course ids in selection order (duplicates are ignored)
        #[arg(value_name = "IDS", num_args = 1.., required = true)]
        course_ids: Vec<String>,

        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,

        /// Write a report in the given format (markdown, md, html, htm)
        #[arg(long, value_name = "FORMAT")]
        report: Option<ReportFormat>,

        /// Report output path (defaults to `<reports_dir>/schedule.<ext>`)
        #[arg(short, long, value_name = "FILE", requires = "report")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studenthub",
    about = "StudentHub course schedule planner",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog path
    #[arg(long = "config-catalog", value_name = "FILE")]
    pub config_catalog: Option<PathBuf>,

    /// Override config catalog path (short form)
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--catalog`) take precedence over long-form
    /// flags (e.g., `--config-catalog`) when both are provided. `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            catalog: path_string(self.catalog.as_ref().or(self.config_catalog.as_ref())),
            reports_dir: path_string(
                self.reports_dir
                    .as_ref()
                    .or(self.config_reports_dir.as_ref()),
            ),
        }
    }
}
