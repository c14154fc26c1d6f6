//! Weekly time interval model.
//!
//! A `TimeInterval` is one weekly occurrence of a course meeting: a weekday
//! plus a half-open `[start, end)` range in minutes-of-day. All conflict
//! detection reduces to pairwise interval overlap tests on this type.
//!
//! # Time Model
//! Times are minutes since midnight (0–1440). Intervals on different
//! weekdays never overlap; on the same weekday, overlap is half-open
//! intersection, so an interval ending at the exact minute another starts
//! does NOT overlap it. Back-to-back detection in scoring relies on this.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Teaching days of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
    /// Friday.
    Fri,
}

impl Weekday {
    /// All teaching days, Monday first.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
        };
        f.write_str(s)
    }
}

/// Number of minutes in a day; interval bounds must stay within `0..=1440`.
pub const MINUTES_PER_DAY: i32 = 1440;

/// A weekly class meeting: weekday plus half-open `[start, end)` minute range.
///
/// Invariant: `0 <= start_min < end_min <= 1440`. The engine assumes
/// well-formed intervals; [`validate_courses`](crate::validation::validate_courses)
/// rejects malformed ones at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Day of week.
    pub day: Weekday,
    /// Start (minutes since midnight, inclusive).
    pub start_min: i32,
    /// End (minutes since midnight, exclusive).
    pub end_min: i32,
}

impl TimeInterval {
    /// Creates a new interval.
    pub fn new(day: Weekday, start_min: i32, end_min: i32) -> Self {
        Self {
            day,
            start_min,
            end_min,
        }
    }

    /// Duration of this meeting (minutes).
    #[inline]
    pub fn duration_min(&self) -> i32 {
        self.end_min - self.start_min
    }

    /// Midpoint of the meeting in minutes-of-day.
    ///
    /// Used by the time-spread scoring term.
    #[inline]
    pub fn midpoint_min(&self) -> f64 {
        (self.start_min + self.end_min) as f64 / 2.0
    }

    /// Whether two intervals overlap.
    ///
    /// Intervals on different days never overlap. Same-day overlap is
    /// half-open intersection: touching endpoints (`a.end == b.start`)
    /// do not count.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_min < other.end_min
            && other.start_min < self.end_min
    }

    /// Whether the interval satisfies `0 <= start < end <= 1440`.
    pub fn is_well_formed(&self) -> bool {
        self.start_min >= 0 && self.start_min < self.end_min && self.end_min <= MINUTES_PER_DAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_same_day() {
        let a = TimeInterval::new(Weekday::Mon, 540, 630);
        let b = TimeInterval::new(Weekday::Mon, 600, 690);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_no_overlap_different_day() {
        let a = TimeInterval::new(Weekday::Mon, 540, 630);
        let b = TimeInterval::new(Weekday::Tue, 540, 630);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        // Mon 10:00-10:50 vs Mon 10:50-11:40: back-to-back, not a conflict
        let a = TimeInterval::new(Weekday::Mon, 600, 650);
        let b = TimeInterval::new(Weekday::Mon, 650, 700);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = TimeInterval::new(Weekday::Wed, 540, 720);
        let inner = TimeInterval::new(Weekday::Wed, 600, 660);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_duration_and_midpoint() {
        let a = TimeInterval::new(Weekday::Fri, 540, 630);
        assert_eq!(a.duration_min(), 90);
        assert!((a.midpoint_min() - 585.0).abs() < 1e-10);
    }

    #[test]
    fn test_well_formed() {
        assert!(TimeInterval::new(Weekday::Mon, 0, 1440).is_well_formed());
        assert!(!TimeInterval::new(Weekday::Mon, 600, 600).is_well_formed());
        assert!(!TimeInterval::new(Weekday::Mon, 650, 600).is_well_formed());
        assert!(!TimeInterval::new(Weekday::Mon, -10, 600).is_well_formed());
        assert!(!TimeInterval::new(Weekday::Mon, 600, 1500).is_well_formed());
    }

    #[test]
    fn test_weekday_serde_roundtrip() {
        let json = serde_json::to_string(&Weekday::Tue).unwrap();
        let back: Weekday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Weekday::Tue);
    }
}
