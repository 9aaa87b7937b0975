//! Day summary engine: gross/net minutes, running state, and status
//! classification against the daily targets.

use crate::errors::{AppError, AppResult};
use crate::models::{DailyTargets, DayStatus, DaySummary, Status, Targets, WorkDay};
use crate::utils::clock::Clock;
use crate::utils::date::iso;
use crate::utils::time::{combine, minutes_between};
use chrono::NaiveDate;

fn non_empty(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

/// Compute the summary for one date. `row` is the stored record, if any; a
/// missing row behaves as an all-empty day. A day with a start and no end is
/// measured against `clock` and flagged `running`, so the result is a live
/// snapshot rather than a pure function of stored state.
pub fn compute_day_summary(
    date: NaiveDate,
    row: Option<&WorkDay>,
    targets: &Targets,
    clock: &dyn Clock,
) -> AppResult<DaySummary> {
    let empty = WorkDay::default();
    let row = row.unwrap_or(&empty);

    let start_time = non_empty(&row.start_time);
    let end_time = non_empty(&row.end_time);

    let mut gross = 0i64;
    let mut running = false;

    if let Some(start) = start_time {
        let start_dt = combine(date, start)?;
        let end_dt = match end_time {
            Some(end) => {
                let end_dt = combine(date, end)?;
                if end_dt < start_dt {
                    return Err(AppError::InvalidRange(format!(
                        "End time earlier than start time on {}.",
                        iso(date)
                    )));
                }
                end_dt
            }
            None => {
                running = true;
                clock.now()
            }
        };
        gross = minutes_between(start_dt, end_dt).max(0);
    }

    let break_minutes = row.break_minutes.max(0);
    let net = (gross - break_minutes).max(0);

    Ok(DaySummary {
        date: iso(date),
        start_time: start_time.map(str::to_string),
        end_time: end_time.map(str::to_string),
        break_minutes,
        gross_minutes: gross,
        net_minutes: net,
        running,
        targets: DailyTargets {
            daily_soft: targets.daily_soft,
            daily_hard: targets.daily_hard,
        },
        status: DayStatus {
            daily: Status::classify(net, targets.daily_soft, targets.daily_hard),
            over_soft_by: (net - targets.daily_soft).max(0),
            over_hard_by: (net - targets.daily_hard).max(0),
            soft_remaining: (targets.daily_soft - net).max(0),
            hard_remaining: (targets.daily_hard - net).max(0),
        },
    })
}
