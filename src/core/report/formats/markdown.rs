//! Markdown report generator
//!
//! Renders the weekly schedule as plain Markdown tables. The calendar is an
//! hour-by-weekday grid listing the course codes meeting in each cell.

use crate::core::models::CourseType;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::schedule::Weekday;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/schedule.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let output = ctx.output;
        let values = [
            ("title", ctx.title.clone()),
            ("course_count", ctx.course_count().to_string()),
            ("total_credits", output.summary.total.to_string()),
            ("max_total", ctx.limits.total.to_string()),
            ("conflict_count", output.conflicts.len().to_string()),
            ("registration_status", ctx.registration_status().to_string()),
            ("course_table", Self::generate_course_table(ctx)),
            ("calendar_table", Self::generate_calendar_table(ctx)),
            ("conflicts", Self::generate_conflict_list(ctx)),
            ("credit_table", Self::generate_credit_table(ctx)),
            ("alerts", Self::generate_alert_list(ctx)),
            ("warnings", Self::generate_warning_list(ctx)),
        ];
        fill_template(MARKDOWN_TEMPLATE, &values)
    }

    fn generate_course_table(ctx: &ReportContext) -> String {
        if ctx.output.courses.is_empty() {
            return "_No courses selected._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Code | Name | Credits | Type | Schedule | Instructor |\n");
        table.push_str("|---|---|---|---|---|---|\n");
        for course in &ctx.output.courses {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} | {} |",
                cell(&course.code),
                cell(&course.name),
                course.credits,
                course.course_type,
                cell(&course.schedule),
                cell(&course.instructor)
            );
        }

        if !ctx.output.missing.is_empty() {
            let _ = writeln!(
                table,
                "\n⚠️ Not in catalog: {}",
                ctx.output.missing.join(", ")
            );
        }

        table
    }

    /// Hour rows by weekday columns
    fn generate_calendar_table(ctx: &ReportContext) -> String {
        let mut table = String::from("| Time |");
        for day in Weekday::ALL {
            let _ = write!(table, " {day} |");
        }
        table.push_str("\n|---|");
        table.push_str(&"---|".repeat(Weekday::ALL.len()));
        table.push('\n');

        for (hour, label) in (ctx.window.start_hour..ctx.window.end_hour).zip(ctx.window.hour_labels()) {
            let _ = write!(table, "| {label} |");
            for day in Weekday::ALL {
                let codes: Vec<String> = ctx
                    .events_in_hour(day, hour)
                    .map(|e| cell(&e.slot.course_code))
                    .collect();
                let _ = write!(table, " {} |", codes.join(", "));
            }
            table.push('\n');
        }

        table
    }

    fn generate_conflict_list(ctx: &ReportContext) -> String {
        if ctx.output.conflicts.is_empty() {
            return "No time conflicts.\n".to_string();
        }
        ctx.output
            .conflicts
            .iter()
            .fold(String::new(), |mut list, pair| {
                let _ = writeln!(list, "- ⚠️ {}", pair.describe());
                list
            })
    }

    fn generate_credit_table(ctx: &ReportContext) -> String {
        let summary = &ctx.output.summary;
        let mut table = String::new();
        table.push_str("| Category | Credits | Limit |\n");
        table.push_str("|---|---|---|\n");
        for course_type in CourseType::ALL {
            let _ = writeln!(
                table,
                "| {course_type} | {} | {} |",
                summary.category(course_type),
                ctx.limits.category(course_type)
            );
        }
        let _ = writeln!(
            table,
            "| **total** | **{}** | {} |",
            summary.total, ctx.limits.total
        );
        table
    }

    fn generate_alert_list(ctx: &ReportContext) -> String {
        if ctx.output.alerts.is_empty() {
            return "No credit alerts.\n".to_string();
        }
        ctx.output.alerts.iter().fold(String::new(), |mut list, alert| {
            let _ = writeln!(list, "- **{}**: {}", alert.kind, alert.message);
            list
        })
    }

    fn generate_warning_list(ctx: &ReportContext) -> String {
        if ctx.output.warnings.is_empty() {
            return "None.\n".to_string();
        }
        ctx.output
            .warnings
            .iter()
            .fold(String::new(), |mut list, warning| {
                let _ = writeln!(list, "- {warning}");
                list
            })
    }
}

/// Replace every `{{key}}` in a single pass
///
/// Inserted values are never rescanned, so placeholder-like text inside
/// catalog data stays literal. Unknown keys are left as written.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut report = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        report.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let found = after.find("}}").and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (value, close))
        });
        match found {
            Some((value, close)) => {
                report.push_str(value);
                rest = &after[close + 2..];
            }
            None => {
                report.push_str("{{");
                rest = after;
            }
        }
    }
    report.push_str(rest);
    report
}

/// Escape text for a Markdown table cell
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
