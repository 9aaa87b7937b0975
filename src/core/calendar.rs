//! Year calendar composition: one entry per calendar day with its off-day
//! annotation, for calendar-grid rendering. No weekly aggregation here.

use crate::core::day::compute_day_summary;
use crate::core::offdays::resolve_off_days;
use crate::core::targets::get_targets;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{DayEntry, YearCalendar};
use crate::utils::clock::Clock;
use crate::utils::date::{days_between, iso, year_bounds};
use rusqlite::Connection;

pub fn compute_year_calendar(
    conn: &Connection,
    year: i32,
    clock: &dyn Clock,
) -> AppResult<YearCalendar> {
    let (start, end) = year_bounds(year);
    let targets = get_targets(conn)?;

    let holidays = queries::list_recurring(conn)?;
    let time_off = queries::time_off_overlapping(conn, &iso(start), &iso(end))?;
    let off_map = resolve_off_days(&holidays, &time_off, start, end)?;

    let rows = queries::work_days_in_range(conn, &iso(start), &iso(end))?;

    let window = days_between(start, end);
    let mut days = Vec::with_capacity(window.len());
    for d in window {
        let ds = iso(d);
        let summary = compute_day_summary(d, rows.get(&ds), &targets, clock)?;
        let off = off_map.get(&ds).cloned();
        days.push(DayEntry {
            is_off: off.is_some(),
            summary,
            off,
        });
    }

    Ok(YearCalendar {
        year,
        start_date: iso(start),
        end_date: iso(end),
        days,
    })
}
