use chrono::NaiveDate;

use crate::cycle::CyclePosition;

const LONG_DATE: &str = "%A, %B %-d, %Y";

/// `Monday, October 6, 2025`
pub fn long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE).to_string()
}

/// Plain-text export of one day's workout:
///
/// ```text
/// WORKOUT FOR Monday, October 6, 2025
/// Week 1, Day 1
///
/// <body>
/// ```
pub fn export_text(date: NaiveDate, position: CyclePosition, body: &str) -> String {
    format!(
        "WORKOUT FOR {}\nWeek {}, Day {}\n\n{}",
        long_date(date),
        position.week,
        position.day,
        body
    )
}

/// `workout-Monday,-October-6,-2025.txt`
pub fn export_file_name(date: NaiveDate) -> String {
    let stamp = long_date(date).split_whitespace().collect::<Vec<_>>().join("-");
    format!("workout-{stamp}.txt")
}

/// Body shown and exported when no workout is stored for `position`.
pub fn coming_soon(position: CyclePosition) -> String {
    format!(
        "Week {}, Day {} - Full database coming soon.",
        position.week, position.day
    )
}
