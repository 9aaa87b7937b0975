//! Week aggregation over the fixed Mon-Fri window: per-day summaries,
//! off-day-aware weekly targets, and end-of-week pace.

use crate::core::day::compute_day_summary;
use crate::core::offdays::resolve_off_days;
use crate::core::targets::get_targets;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::{DayEntry, Status, WeekStatus, WeekSummary, WeekTargets};
use crate::utils::clock::Clock;
use crate::utils::date::{days_between, iso, week_bounds};
use chrono::NaiveDate;
use rusqlite::Connection;

fn ceil_div(a: i64, b: i64) -> i64 {
    if b <= 0 {
        return a;
    }
    (a + b - 1) / b
}

pub fn compute_week(
    conn: &Connection,
    anchor: NaiveDate,
    clock: &dyn Clock,
) -> AppResult<WeekSummary> {
    let (week_start, week_end) = week_bounds(anchor);
    let targets = get_targets(conn)?;

    let holidays = queries::list_recurring(conn)?;
    let time_off = queries::time_off_overlapping(conn, &iso(week_start), &iso(week_end))?;
    let off_map = resolve_off_days(&holidays, &time_off, week_start, week_end)?;

    let rows = queries::work_days_in_range(conn, &iso(week_start), &iso(week_end))?;

    let window = days_between(week_start, week_end);
    let mut days = Vec::with_capacity(window.len());
    let mut working_days = 0i64;
    let mut week_net_minutes = 0i64;

    for &d in &window {
        let ds = iso(d);
        let summary = compute_day_summary(d, rows.get(&ds), &targets, clock)?;
        let off = off_map.get(&ds).cloned();
        let is_off = off.is_some();

        if !is_off {
            working_days += 1;
        }
        // off days still count if worked
        week_net_minutes += summary.net_minutes;

        days.push(DayEntry { summary, is_off, off });
    }

    // Weekly targets follow the days actually available for work: a holiday
    // inside the window lowers them.
    let weekly_soft = targets.daily_soft * working_days;
    let weekly_hard = targets.daily_hard * working_days;

    let today = clock.now().date();
    let remaining_workdays = window
        .iter()
        .filter(|&&d| d >= today && !off_map.contains_key(&iso(d)))
        .count() as i64;

    let soft_remaining = (weekly_soft - week_net_minutes).max(0);
    let hard_remaining = (weekly_hard - week_net_minutes).max(0);

    let (pace_soft, pace_hard) = if remaining_workdays > 0 {
        (
            Some(ceil_div(soft_remaining, remaining_workdays)),
            Some(ceil_div(hard_remaining, remaining_workdays)),
        )
    } else {
        (None, None)
    };

    Ok(WeekSummary {
        week_start: iso(week_start),
        week_end: iso(week_end),
        working_days,
        weekly_soft,
        weekly_hard,
        week_net_minutes,
        days,
        targets: WeekTargets {
            daily_soft: targets.daily_soft,
            daily_hard: targets.daily_hard,
            weekly_soft,
            weekly_hard,
        },
        status: WeekStatus {
            weekly: Status::classify(week_net_minutes, weekly_soft, weekly_hard),
            remaining_workdays,
            soft_remaining_minutes: soft_remaining,
            hard_remaining_minutes: hard_remaining,
            pace_soft_per_day: pace_soft,
            pace_hard_per_day: pace_hard,
        },
    })
}
