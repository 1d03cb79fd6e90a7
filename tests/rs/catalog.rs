//! Integration tests for catalog loading and search

use std::fs;
use student_hub::core::models::{Catalog, CatalogError, CourseFilter, CourseType, Selection};
use tempfile::TempDir;

const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/samples/catalog.toml");

fn sample() -> Catalog {
    Catalog::load(SAMPLE).expect("Failed to load sample catalog")
}

fn ids(courses: &[&student_hub::core::models::Course]) -> Vec<String> {
    courses.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn loads_sample_catalog() {
    let catalog = sample();
    assert_eq!(catalog.len(), 10);

    let course = catalog.get("c-104").expect("c-104 exists");
    assert_eq!(course.code, "CS-150");
    assert_eq!(course.credits, 4);
    assert_eq!(course.course_type, CourseType::Elective);
    assert_eq!(course.deadline, "2025-08-20");
}

#[test]
fn keyword_matches_name_or_description() {
    let catalog = sample();

    let filter = CourseFilter {
        keyword: Some("FINANCE".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&catalog.search(&filter)), vec!["c-101"]);

    let filter = CourseFilter {
        keyword: Some("portfolio".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&catalog.search(&filter)), vec!["c-109"]);
}

#[test]
fn code_and_instructor_are_substring_matches() {
    let catalog = sample();

    let filter = CourseFilter {
        code: Some("fin".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&catalog.search(&filter)), vec!["c-101", "c-109"]);

    let filter = CourseFilter {
        instructor: Some("haddad".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&catalog.search(&filter)), vec!["c-101", "c-106"]);
}

#[test]
fn department_and_semester_are_exact() {
    let catalog = sample();

    let filter = CourseFilter {
        department: Some("Finance".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&catalog.search(&filter)), vec!["c-101", "c-109"]);

    let filter = CourseFilter {
        department: Some("Fin".to_string()),
        ..Default::default()
    };
    assert!(catalog.search(&filter).is_empty());

    let filter = CourseFilter {
        department: Some("Finance".to_string()),
        semester: Some("Fall 2025".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&catalog.search(&filter)), vec!["c-101"]);
}

#[test]
fn empty_filter_lists_everything() {
    let catalog = sample();
    let filter = CourseFilter {
        keyword: Some(String::new()),
        ..Default::default()
    };
    assert!(filter.is_empty());
    assert_eq!(catalog.search(&filter).len(), catalog.len());
}

#[test]
fn distinct_departments_and_semesters() {
    let catalog = sample();
    assert_eq!(catalog.departments().len(), 9);
    assert_eq!(catalog.departments()[0], "Finance");
    assert_eq!(catalog.semesters(), vec!["Fall 2025", "Spring 2026"]);
}

#[test]
fn resolve_keeps_selection_order() {
    let catalog = sample();
    let mut selection = Selection::new();
    assert!(selection.add("c-106"));
    assert!(selection.add("c-101"));
    assert!(!selection.add("c-106"));
    assert!(selection.add("missing"));

    let resolved = catalog.resolve(&selection);
    assert_eq!(ids(&resolved), vec!["c-106", "c-101"]);

    assert!(selection.remove("c-106"));
    assert_eq!(ids(&catalog.resolve(&selection)), vec!["c-101"]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let toml = r#"
[[courses]]
id = "x"
code = "A-1"
name = "A"
credits = 3
type = "major"

[[courses]]
id = "x"
code = "B-1"
name = "B"
credits = 3
type = "minor"
"#;
    assert!(matches!(
        Catalog::from_toml(toml),
        Err(CatalogError::DuplicateId(id)) if id == "x"
    ));
}

#[test]
fn zero_credits_are_rejected() {
    let toml = r#"
[[courses]]
id = "x"
code = "A-1"
name = "A"
credits = 0
type = "major"
"#;
    assert!(matches!(
        Catalog::from_toml(toml),
        Err(CatalogError::InvalidCredits(_))
    ));
}

#[test]
fn unknown_course_type_is_a_parse_error() {
    let toml = r#"
[[courses]]
id = "x"
code = "A-1"
name = "A"
credits = 3
type = "core"
"#;
    assert!(matches!(
        Catalog::from_toml(toml),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = Catalog::load(dir.path().join("nope.toml"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn round_trips_through_a_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("catalog.toml");

    let catalog = sample();
    fs::write(&path, toml::to_string(&catalog).expect("Failed to serialize")).expect("Failed to write");

    let reloaded = Catalog::load(&path).expect("Failed to reload");
    assert_eq!(reloaded, catalog);
}
