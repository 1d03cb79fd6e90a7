//! Credit aggregation and credit-load rules

use crate::core::models::{Course, CourseType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credits of the selected courses, bucketed by category
///
/// Always built by folding over the whole selection, never patched in
/// place, so `total == major + minor + elective` holds by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditSummary {
    /// Sum over all selected courses
    pub total: u32,
    /// Sum over major courses
    pub major: u32,
    /// Sum over minor courses
    pub minor: u32,
    /// Sum over elective courses
    pub elective: u32,
}

impl CreditSummary {
    /// Credits for one category
    #[must_use]
    pub const fn category(&self, course_type: CourseType) -> u32 {
        match course_type {
            CourseType::Major => self.major,
            CourseType::Minor => self.minor,
            CourseType::Elective => self.elective,
        }
    }

    /// Fold step: the summary with one more course counted
    #[must_use]
    pub const fn with_course(mut self, course: &Course) -> Self {
        self.total = self.total.saturating_add(course.credits);
        match course.course_type {
            CourseType::Major => self.major = self.major.saturating_add(course.credits),
            CourseType::Minor => self.minor = self.minor.saturating_add(course.credits),
            CourseType::Elective => self.elective = self.elective.saturating_add(course.credits),
        }
        self
    }
}

/// Sum credits of the selected courses
#[must_use]
pub fn summarize(selected: &[&Course]) -> CreditSummary {
    selected
        .iter()
        .fold(CreditSummary::default(), |acc, course| acc.with_course(course))
}

/// Credit thresholds; exceeding `total` blocks registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditLimits {
    /// Maximum total credits
    pub total: u32,
    /// Recommended major credits
    pub major: u32,
    /// Recommended minor credits
    pub minor: u32,
    /// Recommended elective credits
    pub elective: u32,
}

impl Default for CreditLimits {
    fn default() -> Self {
        Self {
            total: 18,
            major: 12,
            minor: 6,
            elective: 6,
        }
    }
}

impl CreditLimits {
    /// Limit for one category
    #[must_use]
    pub const fn category(&self, course_type: CourseType) -> u32 {
        match course_type {
            CourseType::Major => self.major,
            CourseType::Minor => self.minor,
            CourseType::Elective => self.elective,
        }
    }
}

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// A category exceeds its recommended limit; registration is still allowed
    Warning,
    /// The total exceeds the maximum; registration is blocked
    Error,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// What an alert is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertScope {
    /// Total credits
    Total,
    /// One credit category
    Category(CourseType),
}

/// A credit-load alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// Severity
    pub kind: AlertKind,
    /// What was exceeded
    pub scope: AlertScope,
    /// Credits counted
    pub credits: u32,
    /// Threshold exceeded
    pub limit: u32,
    /// Message shown to the student
    pub message: String,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

fn category_title(course_type: CourseType) -> &'static str {
    match course_type {
        CourseType::Major => "Major",
        CourseType::Minor => "Minor",
        CourseType::Elective => "Free elective",
    }
}

/// Compare a summary against the limits
///
/// Alerts come out in a fixed order: total first, then major, minor and
/// elective, each only when exceeded.
#[must_use]
pub fn check_alerts(summary: &CreditSummary, limits: &CreditLimits) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if summary.total > limits.total {
        alerts.push(Alert {
            kind: AlertKind::Error,
            scope: AlertScope::Total,
            credits: summary.total,
            limit: limits.total,
            message: format!(
                "Total credits ({}) exceed maximum allowed ({}).",
                summary.total, limits.total
            ),
        });
    }

    for course_type in CourseType::ALL {
        let credits = summary.category(course_type);
        let limit = limits.category(course_type);
        if credits > limit {
            alerts.push(Alert {
                kind: AlertKind::Warning,
                scope: AlertScope::Category(course_type),
                credits,
                limit,
                message: format!(
                    "{} credits ({credits}) exceed recommended limit ({limit}).",
                    category_title(course_type)
                ),
            });
        }
    }

    alerts
}

/// Whether registration may proceed: something selected and no error alert
#[must_use]
pub fn can_register(selected_count: usize, alerts: &[Alert]) -> bool {
    selected_count > 0 && !alerts.iter().any(|a| a.kind == AlertKind::Error)
}
