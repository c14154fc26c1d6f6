//! Randomized timetable generation.
//!
//! # Algorithm
//!
//! Random-restart greedy construction:
//!
//! 1. Shuffle the course pool.
//! 2. Walk it in order, accepting each course iff its credits fit the
//!    budget and it clashes with no accepted member (rejected courses
//!    are not retried within the attempt).
//! 3. Keep the resulting timetable if non-empty and structurally new
//!    (dedup by sorted membership key).
//! 4. Repeat until `max_schedules` distinct timetables are collected or
//!    the attempt budget (`max_schedules * 10`) runs out.
//!
//! Exact maximum-weight independent-set search over the conflict graph is
//! NP-hard; bounded random restarts trade optimality for speed, and the
//! results are re-ranked by [`scoring`](crate::scoring) anyway.
//!
//! # Reference
//! - Motwani & Raghavan (1995), "Randomized Algorithms"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Course, Timetable};

/// Attempt budget per requested timetable. Guarantees termination even
/// when the feasible set is smaller than `max_schedules`, or empty.
const ATTEMPT_MULTIPLIER: usize = 10;

/// Bounded randomized timetable generator.
///
/// Stateless between calls: every [`generate`](Self::generate) call
/// operates only on its own pool and local state, so concurrent calls
/// need no synchronization.
///
/// # Example
///
/// ```
/// use timetabler::generator::TimetableGenerator;
/// use timetabler::models::{Course, TimeInterval, Weekday};
///
/// let pool = vec![
///     Course::new("CS101", "001", 3)
///         .with_interval(TimeInterval::new(Weekday::Mon, 540, 630)),
///     Course::new("MA201", "001", 3)
///         .with_interval(TimeInterval::new(Weekday::Tue, 540, 630)),
/// ];
///
/// let generator = TimetableGenerator::new(18, 10);
/// let timetables = generator.generate(&pool);
/// assert!(!timetables.is_empty());
/// assert!(timetables.iter().all(|t| t.total_credits() <= 18));
/// ```
#[derive(Debug, Clone)]
pub struct TimetableGenerator {
    max_credits: i32,
    max_schedules: usize,
}

impl TimetableGenerator {
    /// Creates a generator with a credit budget and a result-count cap.
    pub fn new(max_credits: i32, max_schedules: usize) -> Self {
        Self {
            max_credits,
            max_schedules,
        }
    }

    /// Generates up to `max_schedules` distinct timetables using the
    /// thread-local RNG.
    pub fn generate(&self, pool: &[Course]) -> Vec<Timetable> {
        self.generate_with_rng(pool, &mut rand::rng())
    }

    /// Generates with a caller-supplied RNG (seed it for reproducibility).
    ///
    /// Degrades gracefully: an empty pool, a zero `max_schedules`, or a
    /// non-positive credit budget all yield an empty result rather than
    /// an error. Returned timetables are non-empty, pairwise-distinct by
    /// membership, conflict-free, and within the credit budget.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        pool: &[Course],
        rng: &mut R,
    ) -> Vec<Timetable> {
        let mut results: Vec<Timetable> = Vec::new();
        if self.max_schedules == 0 || pool.is_empty() {
            return results;
        }

        let mut seen: HashSet<Vec<(String, String)>> = HashSet::new();
        let mut order: Vec<usize> = (0..pool.len()).collect();
        let max_attempts = self.max_schedules * ATTEMPT_MULTIPLIER;

        for _ in 0..max_attempts {
            if results.len() >= self.max_schedules {
                break;
            }

            order.shuffle(rng);
            let mut timetable = Timetable::new();
            let mut total_credits: i64 = 0;

            for &idx in &order {
                let course = &pool[idx];
                if total_credits + i64::from(course.credits) > i64::from(self.max_credits) {
                    continue;
                }
                if timetable.conflicts_with(course) {
                    continue;
                }
                total_credits += i64::from(course.credits);
                timetable.add(course.clone());
            }

            if timetable.is_empty() {
                continue;
            }
            if seen.insert(timetable.membership_key()) {
                results.push(timetable);
            }
        }

        results
    }
}
