//! Integration tests for the `studenthub` binary

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/catalog.toml");

/// Run the binary with its config directory inside `home`
fn studenthub(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_studenthub"))
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .args(["--catalog", SAMPLE])
        .args(args)
        .output()
        .expect("Failed to run studenthub")
}

fn parse_stdout(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout should be a single JSON document")
}

#[test]
fn json_with_report_keeps_stdout_parseable() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let report = home.path().join("week.md");
    let report_arg = report.to_string_lossy().to_string();

    let output = studenthub(
        home.path(),
        &["schedule", "c-101", "c-102", "--json", "--report", "md", "-o", &report_arg],
    );

    assert!(output.status.success());
    let value = parse_stdout(&output);
    assert_eq!(value["summary"]["total"], 6);
    assert_eq!(value["conflicts"].as_array().map(Vec::len), Some(1));

    assert!(report.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Report generated"));
}

#[test]
fn verbose_json_reports_duplicates_on_stderr() {
    let home = TempDir::new().expect("Failed to create temp dir");

    let output = studenthub(
        home.path(),
        &["-v", "schedule", "c-101", "c-101", "c-102", "--json"],
    );

    assert!(output.status.success());
    let value = parse_stdout(&output);
    assert_eq!(value["courses"].as_array().map(Vec::len), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ignoring 1 duplicate id(s)"));
}

#[test]
fn schedule_without_ids_is_rejected() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let output = studenthub(home.path(), &["schedule"]);
    assert!(!output.status.success());
}
