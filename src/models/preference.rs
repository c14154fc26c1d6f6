//! User preference bundle.
//!
//! Soft criteria used only for ranking, never for feasibility: the
//! generator consults `max_credits` alone, and the scorer reads the rest.
//! Preferences typically arrive pre-structured from an upstream helper
//! (form input or natural-language analysis); the engine has no contract
//! with how they were produced.

use serde::{Deserialize, Serialize};

use super::Weekday;

/// Ranking preferences for generated timetables.
///
/// Weighting constants (credit sweet spot, free-day bonus, consecutive
/// bonus, spread bonus) are fixed policy in [`scoring`](crate::scoring),
/// not user-exposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preference {
    /// Maximum total credits a timetable may carry.
    pub max_credits: i32,
    /// Day the user wants entirely free of classes, if any.
    pub preferred_free_day: Option<Weekday>,
    /// Reward exactly back-to-back sessions on the same day.
    pub prefer_consecutive: bool,
}

impl Preference {
    /// Creates a preference with the given credit cap and defaults otherwise.
    pub fn new(max_credits: i32) -> Self {
        Self {
            max_credits,
            preferred_free_day: None,
            prefer_consecutive: false,
        }
    }

    /// Sets the preferred free day.
    pub fn with_free_day(mut self, day: Weekday) -> Self {
        self.preferred_free_day = Some(day);
        self
    }

    /// Enables the consecutive-class bonus.
    pub fn with_consecutive(mut self) -> Self {
        self.prefer_consecutive = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let p = Preference::new(18)
            .with_free_day(Weekday::Fri)
            .with_consecutive();
        assert_eq!(p.max_credits, 18);
        assert_eq!(p.preferred_free_day, Some(Weekday::Fri));
        assert!(p.prefer_consecutive);
    }

    #[test]
    fn test_defaults() {
        let p = Preference::new(21);
        assert_eq!(p.preferred_free_day, None);
        assert!(!p.prefer_consecutive);
    }

    #[test]
    fn test_json_fixture() {
        let p: Preference = serde_json::from_str(
            r#"{"max_credits":18,"preferred_free_day":"Tue","prefer_consecutive":true}"#,
        )
        .unwrap();
        assert_eq!(p.max_credits, 18);
        assert_eq!(p.preferred_free_day, Some(Weekday::Tue));
        assert!(p.prefer_consecutive);
    }
}
