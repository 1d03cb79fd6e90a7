//! Schedule command handler

use std::fs;
use std::path::{Path, PathBuf};
use student_hub::config::Config;
use student_hub::core::engine::{self, EngineOutput};
use student_hub::core::models::Selection;
use student_hub::core::report::{reporter_for, ReportContext, ReportFormat};
use student_hub::core::schedule::Weekday;
use student_hub::logger::{self, Level};
use student_hub::{error, info, verbose};

/// Evaluate a selection and print or export the result
pub fn run(
    course_ids: &[String],
    json: bool,
    report: Option<ReportFormat>,
    output: Option<&Path>,
    config: &Config,
) {
    if json {
        // Info and debug lines go to stdout; keep it parseable
        logger::set_level(logger::level().min(Level::Warn));
    }

    if let Err(e) = config.calendar.validate() {
        error!("Invalid calendar config: {e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }

    let catalog = super::load_catalog(config);
    let selection: Selection = course_ids.iter().cloned().collect();
    let duplicates = course_ids.len() - selection.len();
    if duplicates > 0 && logger::is_verbose_enabled() {
        status(json, &format!("Ignoring {duplicates} duplicate id(s)"));
    }

    let result = engine::evaluate(&catalog, &selection, &config.limits, &config.calendar);
    for id in &result.missing {
        eprintln!("✗ Course not found in catalog: {id}");
    }

    if json {
        match serde_json::to_string_pretty(&result) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                error!("Failed to serialize evaluation: {e}");
                eprintln!("✗ Failed to serialize evaluation: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print_summary(&result);
    }

    if let Some(format) = report {
        let path = output.map_or_else(|| default_report_path(config, format), Path::to_path_buf);
        write_report(&result, config, format, &path, json);
    }
}

fn print_summary(result: &EngineOutput) {
    println!("\n=== Selected Courses ===\n");
    if result.courses.is_empty() {
        println!("  (none)");
    }
    for course in &result.courses {
        println!("  {}", course.label());
        verbose!("      {}", course.schedule);
    }

    println!("\n=== Weekly Calendar ===\n");
    for day in Weekday::ALL {
        let mut events: Vec<_> = result.events_in_column(day.index()).collect();
        if events.is_empty() {
            continue;
        }
        events.sort_by_key(|e| e.slot.start_minute);
        println!("  {day}");
        for event in events {
            println!(
                "    {:<20} {:<10} [{}]",
                event.slot.time_range(),
                event.slot.course_code,
                event.color.name
            );
            verbose!(
                "      top {:.1}px, height {:.1}px",
                event.top,
                event.height
            );
        }
    }

    println!("\n=== Conflicts ===\n");
    if result.has_conflicts() {
        for pair in &result.conflicts {
            println!("  ⚠️  {}", pair.describe());
        }
    } else {
        println!("  No time conflicts");
    }

    let summary = &result.summary;
    println!("\n=== Credits ===\n");
    println!("  Major:    {}", summary.major);
    println!("  Minor:    {}", summary.minor);
    println!("  Elective: {}", summary.elective);
    println!("  Total:    {}", summary.total);

    if !result.alerts.is_empty() {
        println!("\n=== Alerts ===\n");
        for alert in &result.alerts {
            println!("  {alert}");
        }
    }

    if !result.warnings.is_empty() {
        verbose!("\n=== Schedule Warnings ===\n");
        for warning in &result.warnings {
            verbose!("  {warning}");
        }
    }

    println!();
    if result.can_register() {
        println!("✓ Registration allowed");
        if result.has_conflicts() {
            println!("  Note: time conflicts with {}", result.conflict_summary());
        }
    } else {
        println!("✗ Registration blocked");
    }
}

fn default_report_path(config: &Config, format: ReportFormat) -> PathBuf {
    PathBuf::from(&config.paths.reports_dir).join(format!("schedule.{}", format.extension()))
}

/// Print a status line. With `--json` it goes to stderr so stdout holds
/// only the JSON document.
fn status(json: bool, message: &str) {
    if json {
        eprintln!("{message}");
    } else {
        println!("{message}");
    }
}

fn write_report(
    result: &EngineOutput,
    config: &Config,
    format: ReportFormat,
    path: &Path,
    json: bool,
) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            error!("Failed to create reports directory {}: {e}", parent.display());
            eprintln!("✗ Failed to create reports directory: {}", parent.display());
            std::process::exit(1);
        }
    }

    let ctx = ReportContext::new("Weekly Schedule", result, &config.calendar, &config.limits);
    match reporter_for(format).generate(&ctx, path) {
        Ok(()) => {
            info!("Wrote {format} report to {}", path.display());
            status(json, &format!("✓ Report generated: {}", path.display()));
        }
        Err(e) => {
            error!("Failed to generate {format} report: {e}");
            eprintln!("✗ Failed to generate report: {e}");
            std::process::exit(1);
        }
    }
}
