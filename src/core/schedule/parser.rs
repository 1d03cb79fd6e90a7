//! Schedule text parser
//!
//! Turns human-authored schedule strings such as
//! `"Mon, Wed, Fri 11:00 AM - 11:50 AM"` into weekly [`TimeSlot`]s.
//!
//! Grammar: `<days> <start> - <end>`, where each time is `H:MM AM|PM`
//! (1–2 digit hour, two-digit minute, meridiem in any case, optional space
//! before the meridiem) and `<days>` is a comma-separated list of day
//! tokens separated from the start time by whitespace.
//!
//! Bad input never fails the caller. A malformed string or an inverted
//! range yields no slots; an unknown day token drops only that day. Each
//! problem is reported as a [`ParseWarning`] and logged.

use super::slot::{TimeSlot, Weekday};
use crate::core::models::Course;
use crate::warn;
use serde::Serialize;
use std::fmt;

/// Non-fatal problem found while parsing a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseWarning {
    /// The text does not have the `<days> <start> - <end>` shape
    Malformed {
        /// Course code the schedule belongs to
        course: String,
        /// Offending schedule text
        schedule: String,
    },
    /// The end time is not after the start time
    InvalidRange {
        /// Course code the schedule belongs to
        course: String,
        /// Start, minutes since midnight
        start: u16,
        /// End, minutes since midnight
        end: u16,
    },
    /// A day token is not in the day table
    UnknownDay {
        /// Course code the schedule belongs to
        course: String,
        /// Offending day token (trimmed, uppercased)
        token: String,
    },
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { course, schedule } => {
                write!(f, "Could not parse schedule string: '{schedule}' for course {course}")
            }
            Self::InvalidRange { course, start, end } => write!(
                f,
                "Invalid time range for {course}: {} - {}",
                super::slot::format_minutes(*start),
                super::slot::format_minutes(*end)
            ),
            Self::UnknownDay { course, token } => {
                write!(f, "Unknown day string: '{token}' in schedule for {course}")
            }
        }
    }
}

/// Slots parsed from one schedule together with the problems found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSchedule {
    /// One slot per recognised day
    pub slots: Vec<TimeSlot>,
    /// Problems encountered, in the order they were found
    pub warnings: Vec<ParseWarning>,
}

/// Parse schedule text with no course identity attached
///
/// The returned slots carry empty course fields. Use [`parse_course`] to
/// keep the owning course on each slot.
#[must_use]
pub fn parse(schedule: &str) -> Vec<TimeSlot> {
    parse_schedule(schedule, "", "", "").slots
}

/// Parse a course's schedule, tagging each slot with the course identity
#[must_use]
pub fn parse_course(course: &Course) -> ParsedSchedule {
    parse_schedule(&course.schedule, &course.id, &course.code, &course.name)
}

/// Parse schedule text for the given course identity, logging every warning
#[must_use]
pub fn parse_schedule(
    schedule: &str,
    course_id: &str,
    course_code: &str,
    course_name: &str,
) -> ParsedSchedule {
    let mut parsed = ParsedSchedule::default();

    let Some((days, start, end)) = split_schedule(schedule) else {
        parsed.warnings.push(ParseWarning::Malformed {
            course: course_code.to_string(),
            schedule: schedule.to_string(),
        });
        log_warnings(&parsed.warnings);
        return parsed;
    };

    if end <= start {
        parsed.warnings.push(ParseWarning::InvalidRange {
            course: course_code.to_string(),
            start,
            end,
        });
        log_warnings(&parsed.warnings);
        return parsed;
    }

    for token in days.split(',').map(|d| d.trim().to_uppercase()) {
        match Weekday::from_token(&token) {
            Some(weekday) => parsed.slots.push(TimeSlot {
                course_id: course_id.to_string(),
                course_code: course_code.to_string(),
                course_name: course_name.to_string(),
                weekday,
                start_minute: start,
                end_minute: end,
            }),
            None => parsed.warnings.push(ParseWarning::UnknownDay {
                course: course_code.to_string(),
                token,
            }),
        }
    }

    log_warnings(&parsed.warnings);
    parsed
}

fn log_warnings(warnings: &[ParseWarning]) {
    for w in warnings {
        warn!("{w}");
    }
}

/// Split `<days> <start> - <end>` into the day list and both times in minutes
fn split_schedule(schedule: &str) -> Option<(&str, u16, u16)> {
    let (left, right) = schedule.trim().rsplit_once('-')?;

    let (rest, end) = split_trailing_clock(right.trim())?;
    if !rest.is_empty() {
        return None;
    }

    let (days, start) = split_trailing_clock(left.trim_end())?;
    if !days.ends_with(char::is_whitespace) || days.trim().is_empty() {
        return None;
    }

    Some((days.trim(), start, end))
}

/// Parse an `H:MM AM|PM` clock at the end of `text`.
///
/// Returns the text before the clock (untrimmed) and the clock in minutes
/// since midnight.
fn split_trailing_clock(text: &str) -> Option<(&str, u16)> {
    let len = text.len();
    let meridiem = text.get(len.checked_sub(2)?..)?;
    let pm = if meridiem.eq_ignore_ascii_case("PM") {
        true
    } else if meridiem.eq_ignore_ascii_case("AM") {
        false
    } else {
        return None;
    };

    // `text.len() - 2` is a char boundary: the meridiem is two ASCII bytes
    let clock = text[..len - 2].trim_end();
    let bytes = clock.as_bytes();
    let n = bytes.len();
    if n < 4 {
        return None;
    }

    let (m1, m2, colon, h2) = (bytes[n - 2], bytes[n - 1], bytes[n - 3], bytes[n - 4]);
    if colon != b':' || !m1.is_ascii_digit() || !m2.is_ascii_digit() || !h2.is_ascii_digit() {
        return None;
    }
    let minute = u16::from(m1 - b'0') * 10 + u16::from(m2 - b'0');

    let (hour, hour_start) = if n >= 5 && bytes[n - 5].is_ascii_digit() {
        (u16::from(bytes[n - 5] - b'0') * 10 + u16::from(h2 - b'0'), n - 5)
    } else {
        (u16::from(h2 - b'0'), n - 4)
    };

    let minutes = to_minutes(hour, minute, pm)?;
    Some((&clock[..hour_start], minutes))
}

/// Convert a 12-hour clock reading to minutes since midnight.
///
/// `12:xx AM` is hour 0 and `12:xx PM` stays hour 12.
const fn to_minutes(hour12: u16, minute: u16, pm: bool) -> Option<u16> {
    if hour12 < 1 || hour12 > 12 || minute > 59 {
        return None;
    }
    let hour = match (pm, hour12) {
        (false, 12) => 0,
        (true, 12) => 12,
        (true, h) => h + 12,
        (false, h) => h,
    };
    Some(hour * 60 + minute)
}
