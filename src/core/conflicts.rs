//! Schedule conflict detection
//!
//! Two selected courses conflict when any of their weekly slots meet on the
//! same weekday with overlapping half-open intervals. Selections are small
//! (a handful of courses), so every unordered pair is compared directly.

use crate::core::models::Course;
use crate::core::schedule::{format_minutes, CourseSchedule, Weekday};
use serde::Serialize;

/// Two courses whose schedules overlap
///
/// The pair is stored canonically with `course_a.id < course_b.id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictPair<'a> {
    /// Course with the smaller id
    pub course_a: &'a Course,
    /// Course with the larger id
    pub course_b: &'a Course,
    /// Day of the first overlap found
    pub weekday: Weekday,
    /// Start of the first overlap found, minutes since midnight
    pub overlap_start: u16,
    /// End of the first overlap found, minutes since midnight
    pub overlap_end: u16,
}

impl ConflictPair<'_> {
    /// Short label, e.g. `FIN-401 & MKT-210`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} & {}", self.course_a.code, self.course_b.code)
    }

    /// Label with the overlapping window, e.g. `FIN-401 & MKT-210 (Mon 10:30 AM - 11:00 AM)`
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{} ({} {} - {})",
            self.label(),
            self.weekday,
            format_minutes(self.overlap_start),
            format_minutes(self.overlap_end)
        )
    }

    /// Whether the pair involves the given course id
    #[must_use]
    pub fn involves(&self, course_id: &str) -> bool {
        self.course_a.id == course_id || self.course_b.id == course_id
    }
}

/// Detect conflicts among courses, parsing each schedule once
///
/// Pairs are reported in input order (`i` increasing, then `j > i`).
/// Courses with unparsable schedules contribute no slots and never conflict.
#[must_use]
pub fn detect_conflicts<'a>(courses: &[&'a Course]) -> Vec<ConflictPair<'a>> {
    let schedules: Vec<CourseSchedule<'a>> =
        courses.iter().map(|c| CourseSchedule::parse(c)).collect();
    find_conflicts(&schedules)
}

/// Detect conflicts among already-parsed schedules
#[must_use]
pub fn find_conflicts<'a>(schedules: &[CourseSchedule<'a>]) -> Vec<ConflictPair<'a>> {
    let mut conflicts = Vec::new();

    for (i, a) in schedules.iter().enumerate() {
        for b in &schedules[i + 1..] {
            if a.course.id == b.course.id {
                continue;
            }
            if let Some(pair) = first_overlap(a, b) {
                conflicts.push(pair);
            }
        }
    }

    conflicts
}

fn first_overlap<'a>(a: &CourseSchedule<'a>, b: &CourseSchedule<'a>) -> Option<ConflictPair<'a>> {
    a.slots.iter().find_map(|sa| {
        b.slots.iter().find_map(|sb| {
            sa.overlap_window(sb).map(|(start, end)| {
                let (course_a, course_b) = if a.course.id <= b.course.id {
                    (a.course, b.course)
                } else {
                    (b.course, a.course)
                };
                ConflictPair {
                    course_a,
                    course_b,
                    weekday: sa.weekday,
                    overlap_start: start,
                    overlap_end: end,
                }
            })
        })
    })
}

/// Join conflict labels the way the registration confirmation lists them
#[must_use]
pub fn describe_conflicts(conflicts: &[ConflictPair<'_>]) -> String {
    conflicts
        .iter()
        .map(ConflictPair::label)
        .collect::<Vec<_>>()
        .join("; ")
}
