//! Date utilities: parsing YYYY-MM-DD, week bounds, date ranges.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Duration, NaiveDate};

/// Parse a `YYYY-MM-DD` string.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidFormat(format!("Invalid date format '{s}'. Use YYYY-MM-DD.")))
}

pub fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Monday and Friday of the ISO week containing `d`.
/// The workweek is a fixed Mon-Fri window; weekly targets are derived from
/// the non-off days inside it, not from the workdays_per_week setting.
pub fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = d - Duration::days(i64::from(d.weekday().num_days_from_monday()));
    (monday, monday + Duration::days(4))
}

/// Jan 1 and Dec 31 of `year`. Caller validates the year range.
pub fn year_bounds(year: i32) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();
    (start, end)
}

/// All dates in `[start, end]`, inclusive.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;
    while d <= end {
        out.push(d);
        d = d.succ_opt().unwrap();
    }
    out
}
