//! Off-day resolution: merges recurring holidays and time-off ranges into a
//! per-date lookup for a query window.

use crate::errors::AppResult;
use crate::models::{
    DateRange, OffAnnotation, OffKind, OffSource, RecurringHoliday, TimeOff, TimeOffKind,
};
use crate::utils::date::{days_between, iso, parse_date};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

fn off_kind(kind: TimeOffKind) -> OffKind {
    match kind {
        TimeOffKind::Vacation => OffKind::Vacation,
        TimeOffKind::Personal => OffKind::Personal,
    }
}

/// Build the date → off annotation map for `[start, end]`. Recurring
/// holidays are matched by (month, day); time-off ranges are expanded over
/// the window. When both cover a date the time-off entry wins: personal
/// time off is the more specific source.
pub fn resolve_off_days(
    holidays: &[RecurringHoliday],
    time_off: &[TimeOff],
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<HashMap<String, OffAnnotation>> {
    let by_month_day: HashMap<(u32, u32), &RecurringHoliday> =
        holidays.iter().map(|h| ((h.month, h.day), h)).collect();

    let mut out = HashMap::new();

    for d in days_between(start, end) {
        if let Some(h) = by_month_day.get(&(d.month(), d.day())) {
            out.insert(
                iso(d),
                OffAnnotation {
                    source: OffSource::Recurring,
                    kind: OffKind::Holiday,
                    label: h.label.clone(),
                    recurring_id: Some(h.id),
                    time_off_id: None,
                    range: None,
                },
            );
        }
    }

    for t in time_off {
        let s = parse_date(&t.start_date)?;
        let e = parse_date(&t.end_date)?;
        // clip the range to the query window
        let first = s.max(start);
        let last = e.min(end);
        if first > last {
            continue;
        }
        for d in days_between(first, last) {
            out.insert(
                iso(d),
                OffAnnotation {
                    source: OffSource::Personal,
                    kind: off_kind(t.kind),
                    label: t.label.clone(),
                    recurring_id: None,
                    time_off_id: Some(t.id),
                    range: Some(DateRange {
                        start: t.start_date.clone(),
                        end: t.end_date.clone(),
                    }),
                },
            );
        }
    }

    Ok(out)
}
