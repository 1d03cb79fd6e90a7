//! Integration tests for schedule report generation

use std::fs;
use student_hub::core::calendar::CalendarWindow;
use student_hub::core::credits::CreditLimits;
use student_hub::core::engine::evaluate;
use student_hub::core::models::{Catalog, Selection};
use student_hub::core::report::{
    reporter_for, HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use tempfile::TempDir;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/catalog.toml");

fn sample() -> Catalog {
    Catalog::load(SAMPLE).expect("Failed to load sample catalog")
}

#[test]
fn markdown_report_lists_courses_conflicts_and_grid() {
    let catalog = sample();
    let selection: Selection = ["c-101", "c-102", "c-108"].into_iter().collect();
    let window = CalendarWindow::default();
    let limits = CreditLimits::default();
    let output = evaluate(&catalog, &selection, &limits, &window);
    let ctx = ReportContext::new("Fall Plan", &output, &window, &limits);

    let report = MarkdownReporter::new().render(&ctx).expect("Failed to render");

    assert!(report.starts_with("# Fall Plan"));
    assert!(report.contains("| FIN-401 | Corporate Finance | 3 | major |"));
    assert!(report.contains("FIN-401 & MKT-210 (Mon 11:00 AM - 11:30 AM)"));
    assert!(report.contains("| 10:00 AM | FIN-401 |  | FIN-401 |  |  |"));
    assert!(report.contains("| 11:00 AM | FIN-401, MKT-210 |  | FIN-401, MKT-210 |  |  |"));
    assert!(report.contains("Could not parse schedule string: 'TBA' for course MGT-300"));
    assert!(report.contains("| **Registration** | allowed |"));
    assert!(!report.contains("{{"));
}

#[test]
fn markdown_report_for_empty_selection() {
    let catalog = sample();
    let window = CalendarWindow::default();
    let limits = CreditLimits::default();
    let output = evaluate(&catalog, &Selection::new(), &limits, &window);
    let ctx = ReportContext::new("Empty", &output, &window, &limits);

    let report = MarkdownReporter::new().render(&ctx).expect("Failed to render");
    assert!(report.contains("_No courses selected._"));
    assert!(report.contains("blocked (nothing selected)"));
    assert!(report.contains("No time conflicts."));
}

#[test]
fn html_report_positions_events() {
    let catalog = sample();
    let selection: Selection = ["c-107", "c-101", "c-104"].into_iter().collect();
    let window = CalendarWindow::default();
    let limits = CreditLimits::default();
    let output = evaluate(&catalog, &selection, &limits, &window);
    let ctx = ReportContext::new("Week <1>", &output, &window, &limits);

    let html = HtmlReporter::new().render(&ctx).expect("Failed to render");

    assert!(html.contains("<title>Week &lt;1&gt;</title>"));
    assert!(html.contains("top: 510.0px; height: 90.0px;"));
    assert!(html.contains("top: 120.0px; height: 90.0px;"));
    assert!(html.contains("height: 600.0px;"));
    assert!(html.contains("event conflict"));
    assert!(html.contains("title=\"ART-110: Drawing Studio\n4:30 PM - 7:00 PM\""));
    assert!(html.contains("8:00 AM"));
    assert!(html.contains("5:00 PM"));
    assert!(html.contains("Registration allowed"));
}

#[test]
fn html_report_flags_blocked_registration() {
    let catalog = sample();
    let selection: Selection = ["c-101", "c-102", "c-103", "c-104", "c-105", "c-106", "c-109"]
        .into_iter()
        .collect();
    let window = CalendarWindow::default();
    let limits = CreditLimits::default();
    let output = evaluate(&catalog, &selection, &limits, &window);
    let ctx = ReportContext::new("Overload", &output, &window, &limits);

    let html = HtmlReporter::new().render(&ctx).expect("Failed to render");
    assert!(html.contains("stat blocked"));
    assert!(html.contains("Total credits (22) exceed maximum allowed (18)."));
    assert!(html.contains("class=\"alert-error\""));
    assert!(html.contains("class=\"alert-warning\""));
}

#[test]
fn generate_writes_report_files() {
    let catalog = sample();
    let selection: Selection = ["c-103", "c-105"].into_iter().collect();
    let window = CalendarWindow::default();
    let limits = CreditLimits::default();
    let output = evaluate(&catalog, &selection, &limits, &window);
    let ctx = ReportContext::new("Files", &output, &window, &limits);
    let dir = TempDir::new().expect("Failed to create temp dir");

    for format in [ReportFormat::Markdown, ReportFormat::Html] {
        let path = dir.path().join(format!("schedule.{}", format.extension()));
        reporter_for(format)
            .generate(&ctx, &path)
            .expect("Failed to generate report");
        let content = fs::read_to_string(&path).expect("Failed to read report");
        assert!(content.contains("ACC-100"));
        assert!(content.contains("ECO-201"));
    }
}
