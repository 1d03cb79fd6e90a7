//! Report generation for evaluated schedules
//!
//! Renders an [`EngineOutput`] as a weekly schedule report in Markdown or
//! HTML.

pub mod formats;

use crate::core::calendar::{CalendarEvent, CalendarWindow};
use crate::core::credits::CreditLimits;
use crate::core::engine::EngineOutput;
use crate::core::schedule::{intervals_overlap, Weekday};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Report heading
    pub title: String,
    /// Evaluated selection
    pub output: &'a EngineOutput<'a>,
    /// Window the calendar was laid out in
    pub window: &'a CalendarWindow,
    /// Limits the alerts were checked against
    pub limits: &'a CreditLimits,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        output: &'a EngineOutput<'a>,
        window: &'a CalendarWindow,
        limits: &'a CreditLimits,
    ) -> Self {
        Self {
            title: title.into(),
            output,
            window,
            limits,
        }
    }

    /// Number of selected courses found in the catalog
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.output.courses.len()
    }

    /// Registration status line
    #[must_use]
    pub fn registration_status(&self) -> &'static str {
        if self.output.can_register() {
            "allowed"
        } else if self.output.courses.is_empty() {
            "blocked (nothing selected)"
        } else {
            "blocked (credit limit exceeded)"
        }
    }

    /// Events of one weekday that intersect the given hour row
    pub fn events_in_hour(
        &self,
        weekday: Weekday,
        hour: u8,
    ) -> impl Iterator<Item = &'a CalendarEvent> {
        let row_start = u16::from(hour) * 60;
        let row_end = row_start + 60;
        self.output.events_in_column(weekday.index()).filter(move |e| {
            intervals_overlap(e.slot.start_minute, e.slot.end_minute, row_start, row_end)
        })
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Reporter for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    }
}
