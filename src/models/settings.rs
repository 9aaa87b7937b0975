use serde::Serialize;

/// Validated daily/weekly minute targets derived from stored settings.
/// `weekly_*` here is the static `daily * workdays_per_week` product; week
/// aggregation recomputes weekly targets from the actual non-off days.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Targets {
    pub daily_soft: i64,
    pub daily_hard: i64,
    pub workdays_per_week: i64,
    pub weekly_soft: i64,
    pub weekly_hard: i64,
}
