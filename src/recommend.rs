//! Best-timetable selection and ranking.
//!
//! Thin policy layer over [`scoring`](crate::scoring): pick the single
//! highest-scoring timetable, or sort the whole set for an
//! "alternatives" view. Ties go to the first-seen entry — the scan is
//! deterministic even though generation order was randomized.

use crate::models::{Preference, Timetable};
use crate::scoring::score;

/// Returns the highest-scoring timetable and its score.
///
/// Ties break to the earliest entry. An empty input yields
/// `(None, 0.0)` — a normal outcome, not an error.
pub fn recommend<'a>(
    timetables: &'a [Timetable],
    preference: &Preference,
) -> (Option<&'a Timetable>, f64) {
    let mut best: Option<&Timetable> = None;
    let mut best_score = 0.0;

    for t in timetables {
        let s = score(t, preference);
        if best.is_none() || s > best_score {
            best = Some(t);
            best_score = s;
        }
    }

    (best, best_score)
}

/// Returns all timetables paired with their scores, sorted descending.
///
/// Stable: equal-scoring timetables keep their first-seen order.
pub fn rank<'a>(
    timetables: &'a [Timetable],
    preference: &Preference,
) -> Vec<(&'a Timetable, f64)> {
    let mut scored: Vec<(&Timetable, f64)> = timetables
        .iter()
        .map(|t| (t, score(t, preference)))
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored
}
