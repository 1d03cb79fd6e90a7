//! End-to-end tests of schedule evaluation against the sample catalog

use student_hub::core::calendar::CalendarWindow;
use student_hub::core::credits::{AlertKind, AlertScope, CreditLimits, CreditSummary};
use student_hub::core::engine::{evaluate, EngineOutput};
use student_hub::core::models::{Catalog, CourseType, Selection};
use student_hub::core::schedule::{parse, ParseWarning, Weekday};

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/catalog.toml");

fn sample() -> Catalog {
    Catalog::load(SAMPLE).expect("Failed to load sample catalog")
}

fn run<'a>(catalog: &'a Catalog, ids: &[&str]) -> EngineOutput<'a> {
    let selection: Selection = ids.iter().copied().collect();
    evaluate(
        catalog,
        &selection,
        &CreditLimits::default(),
        &CalendarWindow::default(),
    )
}

#[test]
fn parses_documented_examples() {
    let mwf = parse("Mon, Wed, Fri 11:00 AM - 11:50 AM");
    let days: Vec<Weekday> = mwf.iter().map(|s| s.weekday).collect();
    assert_eq!(days, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
    assert!(mwf.iter().all(|s| s.start_minute == 660 && s.end_minute == 710));

    let tt = parse("Tue, Thu 1:00 PM - 2:50 PM");
    assert_eq!(tt.len(), 2);
    assert!(tt.iter().all(|s| s.start_minute == 780 && s.end_minute == 890));

    assert!(parse("12:00 AM - 1:00 AM").is_empty());
}

#[test]
fn overlapping_selection_reports_every_pair() {
    let catalog = sample();
    let output = run(&catalog, &["c-101", "c-102", "c-104"]);

    assert_eq!(
        output.conflict_summary(),
        "FIN-401 & MKT-210; FIN-401 & CS-150; MKT-210 & CS-150"
    );
    let first = &output.conflicts[0];
    assert_eq!(first.weekday, Weekday::Mon);
    assert_eq!(first.describe(), "FIN-401 & MKT-210 (Mon 11:00 AM - 11:30 AM)");

    // Conflicts warn but never block
    assert_eq!(
        output.summary,
        CreditSummary {
            total: 10,
            major: 3,
            minor: 3,
            elective: 4
        }
    );
    assert!(output.alerts.is_empty());
    assert!(output.can_register());
}

#[test]
fn conflicts_do_not_depend_on_selection_order() {
    let catalog = sample();
    let forward = run(&catalog, &["c-101", "c-102"]);
    let backward = run(&catalog, &["c-102", "c-101"]);

    assert_eq!(forward.conflicts.len(), 1);
    assert_eq!(backward.conflicts.len(), 1);
    assert_eq!(forward.conflicts[0].course_a.id, "c-101");
    assert_eq!(backward.conflicts[0].course_a.id, "c-101");
    assert_eq!(forward.summary, backward.summary);
}

#[test]
fn disjoint_courses_do_not_conflict() {
    let catalog = sample();
    let output = run(&catalog, &["c-101", "c-103", "c-105", "c-106"]);
    assert!(!output.has_conflicts());
}

#[test]
fn fourteen_credit_load_has_no_alerts() {
    let catalog = sample();
    let output = run(&catalog, &["c-101", "c-103", "c-105", "c-102", "c-107"]);

    assert_eq!(output.summary.category(CourseType::Major), 9);
    assert_eq!(output.summary.category(CourseType::Minor), 3);
    assert_eq!(output.summary.category(CourseType::Elective), 2);
    assert_eq!(output.summary.total, 14);
    assert!(output.alerts.is_empty());
}

#[test]
fn overload_blocks_registration() {
    let catalog = sample();
    let output = run(
        &catalog,
        &["c-101", "c-102", "c-103", "c-104", "c-105", "c-106", "c-109"],
    );

    assert_eq!(output.summary.total, 22);
    let scopes: Vec<(AlertKind, AlertScope)> =
        output.alerts.iter().map(|a| (a.kind, a.scope)).collect();
    assert_eq!(
        scopes,
        vec![
            (AlertKind::Error, AlertScope::Total),
            (AlertKind::Warning, AlertScope::Category(CourseType::Major)),
        ]
    );
    assert_eq!(
        output.alerts[0].message,
        "Total credits (22) exceed maximum allowed (18)."
    );
    assert!(!output.can_register());
}

#[test]
fn custom_limits_change_the_verdict() {
    let catalog = sample();
    let selection: Selection = ["c-101", "c-102", "c-103", "c-104", "c-105", "c-106", "c-109"]
        .into_iter()
        .collect();
    let limits = CreditLimits {
        total: 24,
        major: 15,
        minor: 6,
        elective: 6,
    };
    let output = evaluate(&catalog, &selection, &limits, &CalendarWindow::default());
    assert!(output.alerts.is_empty());
    assert!(output.can_register());
}

#[test]
fn late_slots_are_clipped_or_dropped() {
    let catalog = sample();

    // Fri 4:30 PM - 7:00 PM, visible until 6:00 PM
    let output = run(&catalog, &["c-107"]);
    assert_eq!(output.events.len(), 1);
    let event = &output.events[0];
    assert_eq!(event.column, 4);
    assert!((event.top - 510.0).abs() < 1e-3);
    assert!((event.height - 90.0).abs() < 1e-3);

    // Wed 6:00 PM starts at the window end; Sat is not a grid day
    let output = run(&catalog, &["c-110"]);
    assert!(output.events.is_empty());
    assert_eq!(
        output.warnings,
        vec![ParseWarning::UnknownDay {
            course: "LAW-205".to_string(),
            token: "SAT".to_string(),
        }]
    );
}

#[test]
fn wider_window_shows_evening_slots() {
    let catalog = sample();
    let selection: Selection = ["c-110"].into_iter().collect();
    let window = CalendarWindow::new(8, 21, 60.0).expect("valid window");
    let output = evaluate(&catalog, &selection, &CreditLimits::default(), &window);

    assert_eq!(output.events.len(), 1);
    assert_eq!(output.events[0].slot.weekday, Weekday::Wed);
    assert!((output.events[0].height - 75.0).abs() < 1e-3);
}

#[test]
fn unparsable_schedule_still_counts_credits() {
    let catalog = sample();
    let output = run(&catalog, &["c-108", "c-102"]);

    assert_eq!(output.summary.minor, 6);
    assert!(!output.has_conflicts());
    assert!(matches!(
        output.warnings.as_slice(),
        [ParseWarning::Malformed { course, .. }] if course == "MGT-300"
    ));
}

#[test]
fn colors_follow_selection_order() {
    let catalog = sample();
    let output = run(&catalog, &["c-103", "c-101"]);

    for event in &output.events {
        let expected = if event.slot.course_id == "c-103" { "sky" } else { "amber" };
        assert_eq!(event.color.name, expected);
    }
}

#[test]
fn output_serializes_to_json() {
    let catalog = sample();
    let output = run(&catalog, &["c-101", "c-102", "c-108"]);
    let value = serde_json::to_value(&output).expect("Failed to serialize");

    assert_eq!(value["summary"]["total"], 9);
    assert_eq!(value["conflicts"][0]["course_a"]["code"], "FIN-401");
    assert_eq!(value["events"][0]["color"]["name"], "sky");
    assert_eq!(value["warnings"][0]["kind"], "malformed");
}
