//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Credit category a course counts towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    /// Major-specific course
    Major,
    /// Minor course
    Minor,
    /// Free elective
    Elective,
}

impl CourseType {
    /// All categories in the order credit alerts are reported
    pub const ALL: [Self; 3] = [Self::Major, Self::Minor, Self::Elective];
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
            Self::Elective => write!(f, "elective"),
        }
    }
}

impl FromStr for CourseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "elective" => Ok(Self::Elective),
            _ => Err(format!("Unknown course type: {s}")),
        }
    }
}

/// A course offered in the catalog
///
/// Courses are read-only once loaded; everything the engine derives from
/// them (slots, conflicts, credit sums) is recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique catalog id (e.g., "c-101")
    pub id: String,

    /// Course code (e.g., "FIN-401")
    pub code: String,

    /// Course name (e.g., "Corporate Finance")
    pub name: String,

    /// Free-text description used by keyword search
    #[serde(default)]
    pub description: String,

    /// Credit value (must be positive)
    pub credits: u32,

    /// Credit category
    #[serde(rename = "type")]
    pub course_type: CourseType,

    /// Weekly schedule text (e.g., "Mon, Wed 10:00 AM - 11:30 AM")
    #[serde(default)]
    pub schedule: String,

    /// Offering department
    #[serde(default)]
    pub department: String,

    /// Semester label (e.g., "Fall 2025")
    #[serde(default)]
    pub semester: String,

    /// Instructor name
    #[serde(default)]
    pub instructor: String,

    /// Registration deadline as an ISO date string
    #[serde(default)]
    pub deadline: String,
}

impl Course {
    /// Create a new course with an empty schedule and no descriptive fields
    ///
    /// # Arguments
    /// * `id` - Catalog id
    /// * `code` - Course code
    /// * `name` - Course name
    /// * `credits` - Credit value
    /// * `course_type` - Credit category
    #[must_use]
    pub const fn new(
        id: String,
        code: String,
        name: String,
        credits: u32,
        course_type: CourseType,
    ) -> Self {
        Self {
            id,
            code,
            name,
            description: String::new(),
            credits,
            course_type,
            schedule: String::new(),
            department: String::new(),
            semester: String::new(),
            instructor: String::new(),
            deadline: String::new(),
        }
    }

    /// Set the schedule text
    #[must_use]
    pub fn with_schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    /// Set the department
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Set the semester label
    #[must_use]
    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester = semester.into();
        self
    }

    /// Set the instructor
    #[must_use]
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// One-line label used in listings, e.g. `FIN-401 Corporate Finance (6 cr, major)`
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} {} ({} cr, {})",
            self.code, self.name, self.credits, self.course_type
        )
    }
}
