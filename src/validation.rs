//! Ingestion-time validation for course pools.
//!
//! The engine assumes well-formed input: non-empty identities, unique
//! (code, section) pairs, non-negative credits, and well-formed meeting
//! intervals. Upstream parsers should run these checks and fix or drop
//! offenders before calling the generator. Detects:
//! - Empty course code or section (would collide in the dedup key)
//! - Duplicate (code, section) identities
//! - Negative credit values
//! - Malformed intervals (`start >= end` or outside the daily range)

use std::collections::HashSet;

use crate::models::Course;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Course code or section is empty. Two such courses would be
    /// indistinguishable to schedule deduplication.
    EmptyIdentity,
    /// Two pool entries share the same (code, section) identity.
    DuplicateIdentity,
    /// Credit value is negative.
    NegativeCredits,
    /// Interval violates `0 <= start < end <= 1440`.
    MalformedInterval,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course pool before generation.
///
/// Checks:
/// 1. Every course has a non-empty code and section
/// 2. No two courses share a (code, section) identity
/// 3. No negative credit values
/// 4. Every interval satisfies `0 <= start < end <= 1440`
///
/// A course with zero intervals is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_courses(pool: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut identities = HashSet::new();

    for course in pool {
        if course.code.is_empty() || course.section.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyIdentity,
                format!(
                    "Course with empty identity: code='{}', section='{}'",
                    course.code, course.section
                ),
            ));
        } else if !identities.insert(course.identity()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateIdentity,
                format!(
                    "Duplicate course identity: {} section {}",
                    course.code, course.section
                ),
            ));
        }

        if course.credits < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeCredits,
                format!(
                    "Course '{}' has negative credits: {}",
                    course.code, course.credits
                ),
            ));
        }

        for iv in &course.intervals {
            if !iv.is_well_formed() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedInterval,
                    format!(
                        "Course '{}' has malformed interval {} {}..{}",
                        course.code, iv.day, iv.start_min, iv.end_min
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimeInterval, Weekday};

    fn valid_course(code: &str, section: &str) -> Course {
        Course::new(code, section, 3).with_interval(TimeInterval::new(Weekday::Mon, 540, 630))
    }

    #[test]
    fn test_valid_pool() {
        let pool = vec![
            valid_course("CS101", "001"),
            valid_course("CS101", "002"),
            Course::new("ONLINE", "001", 3), // zero intervals is fine
        ];
        assert!(validate_courses(&pool).is_ok());
    }

    #[test]
    fn test_empty_pool_is_valid() {
        assert!(validate_courses(&[]).is_ok());
    }

    #[test]
    fn test_empty_identity() {
        let pool = vec![Course::new("", "001", 3)];
        let errors = validate_courses(&pool).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyIdentity);
    }

    #[test]
    fn test_duplicate_identity() {
        let pool = vec![valid_course("CS101", "001"), valid_course("CS101", "001")];
        let errors = validate_courses(&pool).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateIdentity);
    }

    #[test]
    fn test_negative_credits() {
        let pool = vec![Course::new("CS101", "001", -3)];
        let errors = validate_courses(&pool).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeCredits);
    }

    #[test]
    fn test_malformed_intervals() {
        let pool = vec![
            Course::new("A", "001", 3).with_interval(TimeInterval::new(Weekday::Mon, 630, 630)),
            Course::new("B", "001", 3).with_interval(TimeInterval::new(Weekday::Tue, 700, 600)),
            Course::new("C", "001", 3).with_interval(TimeInterval::new(Weekday::Wed, 900, 1500)),
        ];
        let errors = validate_courses(&pool).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::MalformedInterval));
    }

    #[test]
    fn test_all_errors_collected() {
        let pool = vec![
            Course::new("", "", -1),
            valid_course("CS101", "001"),
            valid_course("CS101", "001"),
        ];
        let errors = validate_courses(&pool).unwrap_err();
        // Empty identity + negative credits + duplicate
        assert_eq!(errors.len(), 3);
    }
}
