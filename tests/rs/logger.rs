//! Integration tests for logger behavior.

use student_hub::logger::{set_level, set_level_from_str, Level};
use student_hub::{debug, error, info, verbose, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    verbose!("verbose integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_captures_messages() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("logs").join("studenthub.log");

    assert!(student_hub::logger::init_file_logging(&path));
    error!("file logging integration");

    let content = std::fs::read_to_string(&path).expect("Failed to read log file");
    assert!(content.contains("[ERROR] file logging integration"));
}
