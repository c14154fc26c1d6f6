//! Timetable (solution) model.
//!
//! A timetable is a set of distinct courses with no pairwise meeting
//! conflicts. Member order is irrelevant: structural identity is the
//! sorted set of (code, section) pairs, which the generator uses to
//! deduplicate results. Timetables live for a single generation run;
//! nothing persists between calls.

use serde::{Deserialize, Serialize};

use super::{Course, TimeInterval, Weekday};

/// A non-conflicting, credit-bounded collection of courses.
///
/// The generator maintains the invariants (no pairwise conflicts, credit
/// sum within budget); `Timetable` itself only offers the incremental
/// conflict check and derived queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Member courses.
    pub courses: Vec<Course>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course. Callers check [`conflicts_with`](Self::conflicts_with)
    /// and the credit budget first.
    pub fn add(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Whether no courses have been accepted.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Number of member courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Sum of member credit values.
    pub fn total_credits(&self) -> i32 {
        self.courses.iter().map(|c| c.credits).sum()
    }

    /// Incremental insertion check: does `candidate` clash with any
    /// already-accepted member? O(members × intervals).
    pub fn conflicts_with(&self, candidate: &Course) -> bool {
        self.courses.iter().any(|c| c.conflicts_with(candidate))
    }

    /// Whether a course with this identity is a member.
    pub fn contains(&self, code: &str, section: &str) -> bool {
        self.courses.iter().any(|c| c.identity() == (code, section))
    }

    /// Order-independent structural identity: sorted (code, section) pairs.
    ///
    /// Two timetables with the same key hold the same course set, whatever
    /// order the random walk accepted them in.
    pub fn membership_key(&self) -> Vec<(String, String)> {
        let mut key: Vec<(String, String)> = self
            .courses
            .iter()
            .map(|c| (c.code.clone(), c.section.clone()))
            .collect();
        key.sort();
        key
    }

    /// All weekly meetings across all member courses.
    pub fn intervals(&self) -> impl Iterator<Item = &TimeInterval> {
        self.courses.iter().flat_map(|c| c.intervals.iter())
    }

    /// Whether any member meets on the given day.
    pub fn has_class_on(&self, day: Weekday) -> bool {
        self.intervals().any(|iv| iv.day == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(code: &str, section: &str, day: Weekday, start: i32, end: i32) -> Course {
        Course::new(code, section, 3).with_interval(TimeInterval::new(day, start, end))
    }

    #[test]
    fn test_total_credits() {
        let mut t = Timetable::new();
        t.add(Course::new("A", "001", 3));
        t.add(Course::new("B", "001", 2));
        assert_eq!(t.total_credits(), 5);
        assert_eq!(t.course_count(), 2);
    }

    #[test]
    fn test_conflicts_with_members() {
        let mut t = Timetable::new();
        t.add(course("A", "001", Weekday::Mon, 540, 630));
        t.add(course("B", "001", Weekday::Tue, 540, 630));

        let clash = course("C", "001", Weekday::Mon, 600, 690);
        let free = course("D", "001", Weekday::Wed, 540, 630);
        assert!(t.conflicts_with(&clash));
        assert!(!t.conflicts_with(&free));
    }

    #[test]
    fn test_membership_key_order_independent() {
        let mut forward = Timetable::new();
        forward.add(course("A", "001", Weekday::Mon, 540, 630));
        forward.add(course("B", "002", Weekday::Tue, 540, 630));

        let mut backward = Timetable::new();
        backward.add(course("B", "002", Weekday::Tue, 540, 630));
        backward.add(course("A", "001", Weekday::Mon, 540, 630));

        assert_eq!(forward.membership_key(), backward.membership_key());
    }

    #[test]
    fn test_contains() {
        let mut t = Timetable::new();
        t.add(course("A", "001", Weekday::Mon, 540, 630));
        assert!(t.contains("A", "001"));
        assert!(!t.contains("A", "002"));
        assert!(!t.contains("B", "001"));
    }

    #[test]
    fn test_has_class_on() {
        let mut t = Timetable::new();
        t.add(course("A", "001", Weekday::Mon, 540, 630));
        t.add(Course::new("ONLINE", "001", 3)); // no meetings
        assert!(t.has_class_on(Weekday::Mon));
        assert!(!t.has_class_on(Weekday::Tue));
    }

    #[test]
    fn test_empty_timetable() {
        let t = Timetable::new();
        assert!(t.is_empty());
        assert_eq!(t.total_credits(), 0);
        assert!(t.membership_key().is_empty());
        assert!(!t.has_class_on(Weekday::Mon));
    }
}
