//! Weekly time slots and interval primitives
//!
//! Times are minutes since midnight. Intervals are half-open `[start, end)`,
//! so a class ending at 11:00 and one starting at 11:00 do not overlap.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes in a day; the exclusive upper bound for an end minute
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Weekday shown on the weekly grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday
    Mon,
    /// Tuesday
    Tue,
    /// Wednesday
    Wed,
    /// Thursday
    Thu,
    /// Friday
    Fri,
}

impl Weekday {
    /// Displayed weekdays in column order
    pub const ALL: [Self; 5] = [Self::Mon, Self::Tue, Self::Wed, Self::Thu, Self::Fri];

    /// Column index on the weekly grid (Mon = 0)
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Three-letter abbreviation
    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
        }
    }

    /// Map a day token from schedule text.
    ///
    /// Accepts full names, three-letter abbreviations and the registrar
    /// short forms `M`, `TU`, `W`, `TH`/`R`, `F`. The token must already be
    /// trimmed; matching ignores case.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "MONDAY" | "MON" | "M" => Some(Self::Mon),
            "TUESDAY" | "TUE" | "TU" => Some(Self::Tue),
            "WEDNESDAY" | "WED" | "W" => Some(Self::Wed),
            "THURSDAY" | "THU" | "TH" | "R" => Some(Self::Thu),
            "FRIDAY" | "FRI" | "F" => Some(Self::Fri),
            _ => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// One weekly meeting of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Owning course id
    pub course_id: String,
    /// Owning course code
    pub course_code: String,
    /// Owning course name
    pub course_name: String,
    /// Meeting day
    pub weekday: Weekday,
    /// Start, minutes since midnight (inclusive)
    pub start_minute: u16,
    /// End, minutes since midnight (exclusive)
    pub end_minute: u16,
}

impl TimeSlot {
    /// Length in minutes
    #[must_use]
    pub const fn duration_minutes(&self) -> u16 {
        self.end_minute - self.start_minute
    }

    /// Whether both slots meet on the same day with intersecting intervals
    #[must_use]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.weekday as u8 == other.weekday as u8
            && intervals_overlap(
                self.start_minute,
                self.end_minute,
                other.start_minute,
                other.end_minute,
            )
    }

    /// The shared `[start, end)` window when the slots overlap
    #[must_use]
    pub fn overlap_window(&self, other: &Self) -> Option<(u16, u16)> {
        self.overlaps(other).then(|| {
            (
                self.start_minute.max(other.start_minute),
                self.end_minute.min(other.end_minute),
            )
        })
    }

    /// Time range as clock text, e.g. `11:00 AM - 11:50 AM`
    #[must_use]
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            format_minutes(self.start_minute),
            format_minutes(self.end_minute)
        )
    }

    /// Stable identifier: `<course id>-<day>-<start minute>`
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.course_id, self.weekday, self.start_minute)
    }
}

/// Half-open interval intersection test
#[must_use]
pub const fn intervals_overlap(a_start: u16, a_end: u16, b_start: u16, b_end: u16) -> bool {
    a_start < b_end && b_start < a_end
}

/// Format minutes since midnight as 12-hour clock text (`0` → `12:00 AM`)
#[must_use]
pub fn format_minutes(minutes: u16) -> String {
    let hour24 = (minutes / 60) % 24;
    let minute = minutes % 60;
    let meridiem = if hour24 < 12 { "AM" } else { "PM" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12}:{minute:02} {meridiem}")
}
