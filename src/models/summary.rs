use super::off::OffAnnotation;
use serde::Serialize;

/// Classification of net minutes against a (soft, hard) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    UnderSoft,
    BetweenSoftAndHard,
    OverHard,
}

impl Status {
    /// Total, non-overlapping partition: over requires strictly more than
    /// hard, so net == hard still classifies as between.
    pub fn classify(net: i64, soft: i64, hard: i64) -> Self {
        if net > hard {
            Status::OverHard
        } else if net > soft {
            Status::BetweenSoftAndHard
        } else {
            Status::UnderSoft
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DailyTargets {
    pub daily_soft: i64,
    pub daily_hard: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayStatus {
    pub daily: Status,
    pub over_soft_by: i64,
    pub over_hard_by: i64,
    pub soft_remaining: i64,
    pub hard_remaining: i64,
}

/// Output of the day summary engine. Stable shape regardless of which
/// branch computed it; `running` marks a live snapshot whose gross minutes
/// were taken against the current instant.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub break_minutes: i64,
    pub gross_minutes: i64,
    pub net_minutes: i64,
    pub running: bool,
    pub targets: DailyTargets,
    pub status: DayStatus,
}

/// A day inside a week or calendar view, with its off-day annotation.
#[derive(Debug, Clone, Serialize)]
pub struct DayEntry {
    #[serde(flatten)]
    pub summary: DaySummary,
    pub is_off: bool,
    pub off: Option<OffAnnotation>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WeekTargets {
    pub daily_soft: i64,
    pub daily_hard: i64,
    pub weekly_soft: i64,
    pub weekly_hard: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekStatus {
    pub weekly: Status,
    pub remaining_workdays: i64,
    pub soft_remaining_minutes: i64,
    pub hard_remaining_minutes: i64,
    pub pace_soft_per_day: Option<i64>,
    pub pace_hard_per_day: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekSummary {
    pub week_start: String,
    pub week_end: String,
    pub working_days: i64,
    pub weekly_soft: i64,
    pub weekly_hard: i64,
    pub week_net_minutes: i64,
    pub days: Vec<DayEntry>,
    pub targets: WeekTargets,
    pub status: WeekStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearCalendar {
    pub year: i32,
    pub start_date: String,
    pub end_date: String,
    pub days: Vec<DayEntry>,
}
