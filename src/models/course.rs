//! Course model and pairwise conflict detection.
//!
//! A course is an immutable snapshot supplied per request: identity
//! (course code + section), a credit value, and zero or more weekly
//! meetings. Display-only fields the engine never reads (name, professor,
//! category, grade) ride along in `attributes` untouched.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::TimeInterval;

/// A candidate course offering.
///
/// Identity for deduplication and equality of membership is the
/// (code, section) pair. A course with zero intervals is legal: it never
/// conflicts with anything but its credits still count toward the budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g. "CS101").
    pub code: String,
    /// Section number within the course.
    pub section: String,
    /// Credit value (non-negative).
    pub credits: i32,
    /// Weekly meetings. May be empty.
    pub intervals: Vec<TimeInterval>,
    /// Opaque pass-through fields for the presentation layer
    /// (name, professor, category, grade). Never read by the engine.
    pub attributes: HashMap<String, String>,
}

impl Course {
    /// Creates a new course with the given identity and credits.
    pub fn new(code: impl Into<String>, section: impl Into<String>, credits: i32) -> Self {
        Self {
            code: code.into(),
            section: section.into(),
            credits,
            intervals: Vec::new(),
            attributes: HashMap::new(),
        }
    }

    /// Adds a weekly meeting.
    pub fn with_interval(mut self, interval: TimeInterval) -> Self {
        self.intervals.push(interval);
        self
    }

    /// Adds a display-only attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Identity pair used for membership and deduplication.
    #[inline]
    pub fn identity(&self) -> (&str, &str) {
        (&self.code, &self.section)
    }

    /// Whether this course's meetings clash with another's.
    ///
    /// Any-vs-any interval overlap, short-circuiting on the first hit.
    /// Symmetric. A course with no intervals conflicts with nothing.
    pub fn conflicts_with(&self, other: &Course) -> bool {
        self.intervals
            .iter()
            .any(|a| other.intervals.iter().any(|b| a.overlaps(b)))
    }
}
