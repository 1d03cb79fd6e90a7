//! Weekly schedule model and schedule text parsing

pub mod parser;
pub mod slot;

pub use parser::{parse, parse_course, ParseWarning, ParsedSchedule};
pub use slot::{format_minutes, intervals_overlap, TimeSlot, Weekday, MINUTES_PER_DAY};

use crate::core::models::Course;

/// A course together with the slots parsed from its schedule text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSchedule<'a> {
    /// The course the slots belong to
    pub course: &'a Course,
    /// Parsed weekly slots (empty when the schedule could not be parsed)
    pub slots: Vec<TimeSlot>,
}

impl<'a> CourseSchedule<'a> {
    /// Parse a course's schedule, discarding the warnings after logging them
    #[must_use]
    pub fn parse(course: &'a Course) -> Self {
        Self {
            course,
            slots: parse_course(course).slots,
        }
    }
}
