//! HTML report generator
//!
//! Renders a self-contained page with the weekly grid drawn from the
//! positioned calendar events. The page is an `askama` template; view rows
//! are precomputed here so the template only loops and prints.

use crate::core::calendar::color_for;
use crate::core::conflicts::ConflictPair;
use crate::core::credits::AlertKind;
use crate::core::models::CourseType;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::schedule::Weekday;
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Hour label on the grid's time axis
struct HourRow {
    label: String,
    top: String,
}

/// One positioned course block
struct EventBox {
    code: String,
    tooltip: String,
    time: String,
    top: String,
    height: String,
    background: &'static str,
    text: &'static str,
    border: &'static str,
    conflicting: bool,
}

/// A weekday column and its blocks
struct DayColumn {
    name: &'static str,
    events: Vec<EventBox>,
}

struct CourseRow {
    code: String,
    name: String,
    credits: u32,
    course_type: String,
    schedule: String,
    instructor: String,
    swatch: &'static str,
}

struct CreditRow {
    category: String,
    credits: u32,
    limit: u32,
    over: bool,
}

struct AlertRow {
    is_error: bool,
    text: String,
}

#[derive(Template)]
#[template(path = "schedule.html")]
struct SchedulePage {
    title: String,
    course_count: usize,
    total_credits: u32,
    max_total: u32,
    can_register: bool,
    registration_status: &'static str,
    grid_height: String,
    hours: Vec<HourRow>,
    columns: Vec<DayColumn>,
    courses: Vec<CourseRow>,
    missing: Vec<String>,
    credits: Vec<CreditRow>,
    conflicts: Vec<String>,
    alerts: Vec<AlertRow>,
    warnings: Vec<String>,
}

fn px(value: f32) -> String {
    format!("{value:.1}px")
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[allow(clippy::unused_self)]
    fn build_page(&self, ctx: &ReportContext) -> SchedulePage {
        let output = ctx.output;
        let window = ctx.window;

        let hours = (window.start_hour..window.end_hour)
            .zip(window.hour_labels())
            .map(|(hour, label)| HourRow {
                label,
                top: px(f32::from(hour - window.start_hour) * window.hour_height_px),
            })
            .collect();

        let columns = Weekday::ALL
            .iter()
            .map(|day| DayColumn {
                name: day.abbrev(),
                events: output
                    .events_in_column(day.index())
                    .map(|event| EventBox {
                        code: event.slot.course_code.clone(),
                        tooltip: event.title(),
                        time: event.slot.time_range(),
                        top: px(event.top),
                        height: px(event.height),
                        background: event.color.background,
                        text: event.color.text,
                        border: event.color.border,
                        conflicting: output
                            .conflicts
                            .iter()
                            .any(|pair| pair.involves(&event.slot.course_id)),
                    })
                    .collect(),
            })
            .collect();

        let courses = output
            .courses
            .iter()
            .enumerate()
            .map(|(index, course)| CourseRow {
                code: course.code.clone(),
                name: course.name.clone(),
                credits: course.credits,
                course_type: course.course_type.to_string(),
                schedule: course.schedule.clone(),
                instructor: course.instructor.clone(),
                swatch: color_for(index).background,
            })
            .collect();

        let credits = CourseType::ALL
            .iter()
            .map(|&course_type| {
                let credits = output.summary.category(course_type);
                let limit = ctx.limits.category(course_type);
                CreditRow {
                    category: course_type.to_string(),
                    credits,
                    limit,
                    over: credits > limit,
                }
            })
            .collect();

        SchedulePage {
            title: ctx.title.clone(),
            course_count: ctx.course_count(),
            total_credits: output.summary.total,
            max_total: ctx.limits.total,
            can_register: output.can_register(),
            registration_status: ctx.registration_status(),
            grid_height: px(window.height_px()),
            hours,
            columns,
            courses,
            missing: output.missing.clone(),
            credits,
            conflicts: output.conflicts.iter().map(ConflictPair::describe).collect(),
            alerts: output
                .alerts
                .iter()
                .map(|alert| AlertRow {
                    is_error: alert.kind == AlertKind::Error,
                    text: alert.to_string(),
                })
                .collect(),
            warnings: output.warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.build_page(ctx).render()?)
    }
}
