//! Integration smoke tests for `student_hub`

use student_hub::core::calendar::CalendarWindow;
use student_hub::core::credits::CreditLimits;
use student_hub::core::engine::evaluate;
use student_hub::core::models::{Catalog, Selection};
use student_hub::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn empty_catalog_evaluates_cleanly() {
    let catalog = Catalog::from_toml("").expect("empty catalog");
    let selection: Selection = ["anything"].into_iter().collect();
    let output = evaluate(
        &catalog,
        &selection,
        &CreditLimits::default(),
        &CalendarWindow::default(),
    );
    assert!(output.courses.is_empty());
    assert_eq!(output.missing, vec!["anything".to_string()]);
    assert!(!output.can_register());
}
