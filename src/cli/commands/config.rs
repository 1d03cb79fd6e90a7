//! Config command handler

use crate::args::ConfigSubcommand;
use std::io::{self, Write};
use student_hub::config::Config;
use student_hub::{error, info};

/// Dispatch config subcommands
///
/// `effective` is the config with CLI overrides applied and is only shown.
/// Changes are made to `stored`, the file as loaded, so one-off overrides
/// never leak into the saved config.
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    effective: &Config,
    stored: &mut Config,
    defaults: &Config,
) {
    match subcommand {
        None => handle_config_get(effective, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(effective, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(stored, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(stored, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) {
    if let Some(k) = key {
        match config.get(&k) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("✗ Unknown config key: '{k}'");
                std::process::exit(1);
            }
        }
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        println!("\n(file: {})", Config::get_config_file_path().display());
    }
}

fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        error!("Failed to save config: {e}");
        eprintln!("✗ Failed to save config: {e}");
        std::process::exit(1);
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_or_exit(config);
    info!("Config key '{key}' set to '{value}'");
    println!("✓ Set {key} = {value}");
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    save_or_exit(config);
    info!("Config key '{key}' reset to default");
    println!("✓ Reset {key} to default");
}

/// Handle the config reset subcommand
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            error!("Failed to remove config file: {e}");
            eprintln!("✗ Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
