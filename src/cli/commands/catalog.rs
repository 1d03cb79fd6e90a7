//! Catalog command handler

use crate::args::CatalogFilterArgs;
use student_hub::config::Config;
use student_hub::{debug, verbose};

/// List catalog courses matching the filters
pub fn run(filters: &CatalogFilterArgs, config: &Config) {
    let catalog = super::load_catalog(config);
    let filter = filters.to_filter();
    debug!("Catalog filter: {filter:?}");

    let matches = catalog.search(&filter);
    if matches.is_empty() {
        println!("No courses match.");
        if filter.is_empty() {
            verbose!("Catalog {} is empty", config.paths.catalog);
        }
        return;
    }

    println!(
        "{:<8} {:<10} {:<32} {:>3}  {:<8} {:<36} {}",
        "ID", "CODE", "NAME", "CR", "TYPE", "SCHEDULE", "INSTRUCTOR"
    );
    for course in &matches {
        println!(
            "{:<8} {:<10} {:<32} {:>3}  {:<8} {:<36} {}",
            course.id,
            course.code,
            course.name,
            course.credits,
            course.course_type,
            course.schedule,
            course.instructor
        );
        verbose!(
            "         {} | {} | deadline {}",
            course.department,
            course.semester,
            course.deadline
        );
    }
    println!("\n{} of {} course(s)", matches.len(), catalog.len());

    if filter.is_empty() {
        verbose!("Departments: {}", catalog.departments().join(", "));
        verbose!("Semesters: {}", catalog.semesters().join(", "));
    }
}
