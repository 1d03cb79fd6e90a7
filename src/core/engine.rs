//! Schedule evaluation
//!
//! One pure pass from a catalog and a selection to everything the calendar
//! and registration views show. Nothing is cached between calls.

use crate::core::calendar::{self, CalendarEvent, CalendarWindow};
use crate::core::conflicts::{self, ConflictPair};
use crate::core::credits::{self, Alert, CreditLimits, CreditSummary};
use crate::core::models::{Catalog, Course, Selection};
use crate::core::schedule::{self, CourseSchedule, ParseWarning, TimeSlot};
use serde::Serialize;

/// Result of evaluating a selection
#[derive(Debug, Clone, Serialize)]
pub struct EngineOutput<'a> {
    /// Selected courses found in the catalog, in selection order
    pub courses: Vec<&'a Course>,
    /// Selected ids with no catalog entry
    pub missing: Vec<String>,
    /// Positioned calendar events
    pub events: Vec<CalendarEvent>,
    /// Overlapping course pairs
    pub conflicts: Vec<ConflictPair<'a>>,
    /// Credit totals
    pub summary: CreditSummary,
    /// Credit-load alerts
    pub alerts: Vec<Alert>,
    /// Problems found in schedule text
    pub warnings: Vec<ParseWarning>,
}

impl EngineOutput<'_> {
    /// Whether registration may proceed
    #[must_use]
    pub fn can_register(&self) -> bool {
        credits::can_register(self.courses.len(), &self.alerts)
    }

    /// Whether any selected courses overlap
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Conflict labels joined with `; `
    #[must_use]
    pub fn conflict_summary(&self) -> String {
        conflicts::describe_conflicts(&self.conflicts)
    }

    /// Events for one calendar column
    pub fn events_in_column(&self, column: usize) -> impl Iterator<Item = &CalendarEvent> {
        self.events.iter().filter(move |e| e.column == column)
    }
}

/// Evaluate a selection against a catalog
///
/// Unknown ids are skipped and reported in `missing`. Each schedule string
/// is parsed once; the slots feed both conflict detection and layout.
#[must_use]
pub fn evaluate<'a>(
    catalog: &'a Catalog,
    selection: &Selection,
    limits: &CreditLimits,
    window: &CalendarWindow,
) -> EngineOutput<'a> {
    let courses = catalog.resolve(selection);
    let missing: Vec<String> = selection
        .ids()
        .iter()
        .filter(|id| catalog.get(id).is_none())
        .cloned()
        .collect();

    let mut warnings = Vec::new();
    let schedules: Vec<CourseSchedule<'a>> = courses
        .iter()
        .map(|course| {
            let parsed = schedule::parse_course(course);
            warnings.extend(parsed.warnings);
            CourseSchedule {
                course: *course,
                slots: parsed.slots,
            }
        })
        .collect();

    let slots: Vec<TimeSlot> = schedules
        .iter()
        .flat_map(|s| s.slots.iter().cloned())
        .collect();
    // Colour index is the position among resolved courses
    let resolved: Selection = courses.iter().map(|c| c.id.as_str()).collect();
    let events = calendar::layout(&slots, window, &resolved);
    let conflicts = conflicts::find_conflicts(&schedules);

    let summary = credits::summarize(&courses);
    let alerts = credits::check_alerts(&summary, limits);

    crate::debug!(
        "Evaluated {} course(s): {} slot(s), {} event(s), {} conflict(s), {} alert(s)",
        courses.len(),
        slots.len(),
        events.len(),
        conflicts.len(),
        alerts.len()
    );

    EngineOutput {
        courses,
        missing,
        events,
        conflicts,
        summary,
        alerts,
        warnings,
    }
}
