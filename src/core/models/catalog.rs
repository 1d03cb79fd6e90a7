//! Course catalog loading and search

use super::{Course, Selection};
use crate::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// Errors raised while loading a catalog file
#[derive(Debug)]
pub enum CatalogError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file is not valid catalog TOML
    Parse(toml::de::Error),
    /// Two courses share an id
    DuplicateId(String),
    /// A course has a zero credit value
    InvalidCredits(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read catalog: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse catalog: {e}"),
            Self::DuplicateId(id) => write!(f, "Duplicate course id in catalog: '{id}'"),
            Self::InvalidCredits(id) => {
                write!(f, "Course '{id}' must have a positive credit value")
            }
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

/// Search criteria for the catalog
///
/// Empty criteria match everything. `keyword` matches the name or the
/// description, `code` and `instructor` are substring matches, and
/// `department`/`semester` must match exactly. All comparisons except the
/// exact ones ignore case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    /// Keyword searched in name and description
    pub keyword: Option<String>,
    /// Course code fragment
    pub code: Option<String>,
    /// Instructor name fragment
    pub instructor: Option<String>,
    /// Exact department
    pub department: Option<String>,
    /// Exact semester label
    pub semester: Option<String>,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn criterion(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl CourseFilter {
    /// Whether the course satisfies every set criterion
    #[must_use]
    pub fn matches(&self, course: &Course) -> bool {
        let keyword = criterion(self.keyword.as_ref()).is_none_or(|k| {
            contains_ignore_case(&course.name, k) || contains_ignore_case(&course.description, k)
        });
        let code = criterion(self.code.as_ref()).is_none_or(|c| contains_ignore_case(&course.code, c));
        let instructor = criterion(self.instructor.as_ref())
            .is_none_or(|i| contains_ignore_case(&course.instructor, i));
        let department = criterion(self.department.as_ref()).is_none_or(|d| course.department == d);
        let semester = criterion(self.semester.as_ref()).is_none_or(|s| course.semester == s);

        keyword && code && instructor && department && semester
    }

    /// Whether no criterion is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        [
            self.keyword.as_ref(),
            self.code.as_ref(),
            self.instructor.as_ref(),
            self.department.as_ref(),
            self.semester.as_ref(),
        ]
        .into_iter()
        .all(|value| criterion(value).is_none())
    }
}

/// The set of courses available for registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Courses in catalog order
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl Catalog {
    /// Build a catalog from courses, checking ids and credits
    ///
    /// # Errors
    /// Returns an error on duplicate ids or zero-credit courses
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for course in &courses {
            if !seen.insert(course.id.as_str()) {
                return Err(CatalogError::DuplicateId(course.id.clone()));
            }
            if course.credits == 0 {
                return Err(CatalogError::InvalidCredits(course.id.clone()));
            }
        }
        Ok(Self { courses })
    }

    /// Parse a catalog from TOML (`[[courses]]` tables)
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or the courses fail validation
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let raw: Self = toml::from_str(toml_str)?;
        Self::new(raw.courses)
    }

    /// Load a catalog file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Look up a course by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses matching the filter, in catalog order
    #[must_use]
    pub fn search(&self, filter: &CourseFilter) -> Vec<&Course> {
        self.courses.iter().filter(|c| filter.matches(c)).collect()
    }

    /// Distinct non-empty departments in first-seen order
    #[must_use]
    pub fn departments(&self) -> Vec<&str> {
        distinct(self.courses.iter().map(|c| c.department.as_str()))
    }

    /// Distinct non-empty semesters in first-seen order
    #[must_use]
    pub fn semesters(&self) -> Vec<&str> {
        distinct(self.courses.iter().map(|c| c.semester.as_str()))
    }

    /// Resolve a selection into course references, in selection order
    ///
    /// Ids missing from the catalog are logged and skipped.
    #[must_use]
    pub fn resolve(&self, selection: &Selection) -> Vec<&Course> {
        selection
            .ids()
            .iter()
            .filter_map(|id| {
                let course = self.get(id);
                if course.is_none() {
                    warn!("Selected course '{id}' is not in the catalog");
                }
                course
            })
            .collect()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .collect()
}
