//! Timetable desirability scoring.
//!
//! Pure, deterministic mapping from a timetable and a preference bundle
//! to a score: higher is better, range unbounded. Four additive terms:
//!
//! | Term | Trigger | Weight |
//! |------|---------|--------|
//! | Credit load | total in 15..=21 / 12..15 / over budget | +10 / +7 / −5 |
//! | Free day | no meetings on the preferred day | +15 |
//! | Consecutive | per exact back-to-back pair, same day | +5 each |
//! | Spread | meeting midpoints span > 5 hours | +3 |
//!
//! The free-day bonus deliberately exceeds a single consecutive bonus so
//! that a satisfied free day dominates one back-to-back pairing. Feasibility
//! (conflicts, credit cap) is the generator's job; scoring only ranks.

use std::collections::HashMap;

use crate::models::{Preference, Timetable, Weekday};

/// Bonus for a total credit load in the 15..=21 sweet spot.
const FULL_LOAD_BONUS: f64 = 10.0;
/// Bonus for a lighter 12..15 load.
const LIGHT_LOAD_BONUS: f64 = 7.0;
/// Penalty for exceeding the preference's credit cap.
const OVERLOAD_PENALTY: f64 = -5.0;
/// Bonus when the preferred free day has no meetings.
const FREE_DAY_BONUS: f64 = 15.0;
/// Bonus per exactly back-to-back pair of meetings.
const CONSECUTIVE_BONUS: f64 = 5.0;
/// Bonus when meeting midpoints span more than [`SPREAD_THRESHOLD_MIN`].
const SPREAD_BONUS: f64 = 3.0;
/// Midpoint spread (minutes) beyond which the spread bonus applies.
const SPREAD_THRESHOLD_MIN: f64 = 300.0;

/// Per-term score decomposition.
///
/// [`total`](Self::total) is what [`recommend`](crate::recommend::recommend)
/// ranks by; the individual terms exist so a presentation layer can explain
/// why a timetable won.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Credit-load term.
    pub credit_load: f64,
    /// Free-day term.
    pub free_day: f64,
    /// Consecutive-class term (sum over back-to-back pairs).
    pub consecutive: f64,
    /// Time-spread term.
    pub spread: f64,
}

impl ScoreBreakdown {
    /// Scores a timetable against a preference bundle.
    ///
    /// An empty timetable scores exactly zero in every term.
    pub fn calculate(timetable: &Timetable, preference: &Preference) -> Self {
        let zero = Self {
            credit_load: 0.0,
            free_day: 0.0,
            consecutive: 0.0,
            spread: 0.0,
        };
        if timetable.is_empty() {
            return zero;
        }

        Self {
            credit_load: credit_load_term(timetable, preference),
            free_day: free_day_term(timetable, preference),
            consecutive: consecutive_term(timetable, preference),
            spread: spread_term(timetable),
        }
    }

    /// Sum of all terms.
    pub fn total(&self) -> f64 {
        self.credit_load + self.free_day + self.consecutive + self.spread
    }
}

/// Scores a timetable; higher is better. Equivalent to
/// `ScoreBreakdown::calculate(timetable, preference).total()`.
pub fn score(timetable: &Timetable, preference: &Preference) -> f64 {
    ScoreBreakdown::calculate(timetable, preference).total()
}

fn credit_load_term(timetable: &Timetable, preference: &Preference) -> f64 {
    let total = timetable.total_credits();
    if (15..=21).contains(&total) {
        FULL_LOAD_BONUS
    } else if (12..15).contains(&total) {
        LIGHT_LOAD_BONUS
    } else if total > preference.max_credits {
        OVERLOAD_PENALTY
    } else {
        0.0
    }
}

fn free_day_term(timetable: &Timetable, preference: &Preference) -> f64 {
    match preference.preferred_free_day {
        Some(day) if !timetable.has_class_on(day) => FREE_DAY_BONUS,
        _ => 0.0,
    }
}

fn consecutive_term(timetable: &Timetable, preference: &Preference) -> f64 {
    if !preference.prefer_consecutive {
        return 0.0;
    }

    let mut by_day: HashMap<Weekday, Vec<(i32, i32)>> = HashMap::new();
    for iv in timetable.intervals() {
        by_day
            .entry(iv.day)
            .or_default()
            .push((iv.start_min, iv.end_min));
    }

    let mut bonus = 0.0;
    for times in by_day.values_mut() {
        times.sort();
        for pair in times.windows(2) {
            // Exact back-to-back only; a one-minute gap earns nothing
            if pair[0].1 == pair[1].0 {
                bonus += CONSECUTIVE_BONUS;
            }
        }
    }
    bonus
}

fn spread_term(timetable: &Timetable) -> f64 {
    let mut min_mid = f64::INFINITY;
    let mut max_mid = f64::NEG_INFINITY;
    let mut any = false;
    for iv in timetable.intervals() {
        let mid = iv.midpoint_min();
        min_mid = min_mid.min(mid);
        max_mid = max_mid.max(mid);
        any = true;
    }
    if any && max_mid - min_mid > SPREAD_THRESHOLD_MIN {
        SPREAD_BONUS
    } else {
        0.0
    }
}
