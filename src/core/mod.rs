//! Core module: course models, the schedule engine and report generation

pub mod calendar;
pub mod config;
pub mod conflicts;
pub mod credits;
pub mod engine;
pub mod models;
pub mod report;
pub mod schedule;

/// Returns the current version of the `StudentHub` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
