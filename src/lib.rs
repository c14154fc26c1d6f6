//! Course timetable generation engine.
//!
//! Given a pool of candidate courses (each with weekly meeting intervals),
//! detects schedule conflicts, searches the combinatorial space of
//! non-conflicting course subsets under a credit budget, deduplicates
//! structurally identical results, and ranks candidates against soft user
//! preferences (free day, consecutive classes, credit load, time spread).
//!
//! Ingestion (CSV parsing, filtering) and presentation are upstream and
//! downstream collaborators: this crate consumes an already-materialized
//! course list plus a structured [`Preference`](models::Preference) bundle
//! and produces in-memory results. Nothing persists between calls.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Weekday`, `TimeInterval`, `Course`,
//!   `Timetable`, `Preference`
//! - **`generator`**: Bounded random-restart greedy timetable search
//! - **`scoring`**: Preference-based desirability scoring
//! - **`recommend`**: Best-pick selection and descending ranking
//! - **`validation`**: Ingestion-time input integrity checks
//!
//! # Pipeline
//!
//! ```
//! use timetabler::generator::TimetableGenerator;
//! use timetabler::models::{Course, Preference, TimeInterval, Weekday};
//! use timetabler::recommend::recommend;
//! use timetabler::validation::validate_courses;
//!
//! let pool = vec![
//!     Course::new("CS101", "001", 3)
//!         .with_interval(TimeInterval::new(Weekday::Mon, 540, 630)),
//!     Course::new("MA201", "001", 3)
//!         .with_interval(TimeInterval::new(Weekday::Tue, 540, 630)),
//! ];
//! assert!(validate_courses(&pool).is_ok());
//!
//! let preference = Preference::new(18).with_free_day(Weekday::Fri);
//! let timetables = TimetableGenerator::new(preference.max_credits, 20).generate(&pool);
//! let (best, _score) = recommend(&timetables, &preference);
//! assert!(best.is_some());
//! ```
//!
//! # References
//!
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"
//! - Motwani & Raghavan (1995), "Randomized Algorithms"

pub mod generator;
pub mod models;
pub mod recommend;
pub mod scoring;
pub mod validation;
