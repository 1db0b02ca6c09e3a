use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Weeks in one training cycle.
pub const CYCLE_WEEKS: i64 = 6;

/// Monday 6 October 2025 was Week 1, Day 1.
pub const DEFAULT_CYCLE_START: NaiveDate = match NaiveDate::from_ymd_opt(2025, 10, 6) {
    Some(date) => date,
    None => panic!("invalid default cycle start"),
};

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// A (week, day) position inside the six-week cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CyclePosition {
    /// `1..=6`
    pub week: u8,
    /// ISO weekday, Monday `1` through Sunday `7`.
    pub day: u8,
}

impl CyclePosition {
    /// Position of `date` in the cycle that began on `cycle_start`.
    ///
    /// Dates before the start wrap backwards so the week always lands in `1..=6`.
    pub fn on(date: NaiveDate, cycle_start: NaiveDate) -> Self {
        let days_since = (date - cycle_start).num_days();
        let week = days_since.div_euclid(7).rem_euclid(CYCLE_WEEKS) + 1;
        Self {
            week: week as u8,
            day: date.weekday().number_from_monday() as u8,
        }
    }

    pub fn day_name(&self) -> &'static str {
        DAY_NAMES
            .get(usize::from(self.day.saturating_sub(1)))
            .copied()
            .unwrap_or("Unknown")
    }
}
