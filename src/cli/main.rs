//! Command-line interface entry point for `StudentHub`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use student_hub::config::Config;
use student_hub::info;
use student_hub::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Keep the stored config separate from the effective one so that
    // `config set` never persists a one-off CLI override
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins, then config logging.level, then warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &config, &mut stored, &defaults);
        }
        Command::Catalog { filters } => {
            commands::catalog::run(&filters, &config);
        }
        Command::Schedule {
            course_ids,
            json,
            report,
            output,
        } => {
            commands::schedule::run(&course_ids, json, report, output.as_deref(), &config);
        }
    }
}
