//! CLI command handlers for `StudentHub`.
//!
//! Each subcommand is implemented in its own submodule.

pub mod catalog;
pub mod config;
pub mod schedule;

use student_hub::config::Config;
use student_hub::core::models::Catalog;
use student_hub::{error, info};

/// Load the catalog named by the config, exiting on failure
pub fn load_catalog(config: &Config) -> Catalog {
    if config.paths.catalog.is_empty() {
        error!("No catalog path configured");
        eprintln!("✗ No catalog configured. Pass --catalog FILE or run `studenthub config set catalog FILE`.");
        std::process::exit(1);
    }

    match Catalog::load(&config.paths.catalog) {
        Ok(catalog) => {
            info!(
                "Loaded {} course(s) from {}",
                catalog.len(),
                config.paths.catalog
            );
            catalog
        }
        Err(e) => {
            error!("{e}");
            eprintln!("✗ {e} ({})", config.paths.catalog);
            std::process::exit(1);
        }
    }
}
