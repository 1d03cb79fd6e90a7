//! Shared library for `StudentHub`
//! Contains the course-schedule engine used by the `studenthub` CLI.

pub mod core;
pub mod logger;

pub use core::config;
pub use core::get_version;
