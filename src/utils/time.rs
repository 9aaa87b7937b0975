//! Time utilities: parsing HH:MM, duration computations, combining with dates.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Parse a 24-hour `HH:MM` string.
pub fn parse_hhmm(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map_err(|_| AppError::InvalidFormat(format!("Invalid time format '{s}'. Use HH:MM (24h).")))
}

/// Combine a date with an `HH:MM` string into a naive instant.
/// Re-validates the time string.
pub fn combine(day: NaiveDate, hhmm: &str) -> AppResult<NaiveDateTime> {
    Ok(day.and_time(parse_hhmm(hhmm)?))
}

/// Whole minutes between two instants, truncated.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}

/// Format a time as `HH:MM`, dropping seconds.
pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
