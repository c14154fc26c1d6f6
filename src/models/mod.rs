//! Timetabling domain models.
//!
//! Core data types for candidate courses and generated timetables.
//! Courses are immutable snapshots supplied per request; timetables are
//! built and discarded within a single generation run.
//!
//! | Type | Role |
//! |------|------|
//! | `Weekday` / `TimeInterval` | Weekly meeting slot, overlap tests |
//! | `Course` | Identity, credits, meetings, opaque display fields |
//! | `Timetable` | Non-conflicting, credit-bounded course set |
//! | `Preference` | Soft ranking criteria |

mod course;
mod interval;
mod preference;
mod timetable;

pub use course::Course;
pub use interval::{TimeInterval, Weekday, MINUTES_PER_DAY};
pub use preference::Preference;
pub use timetable::Timetable;
