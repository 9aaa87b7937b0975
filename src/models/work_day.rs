use serde::Serialize;

/// One stored record per calendar date (primary key = date, YYYY-MM-DD).
/// Created lazily on first access, never deleted. Both times are `HH:MM`;
/// when both are present the end must not precede the start (a day's work
/// never crosses midnight).
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkDay {
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub break_minutes: i64,
    pub notes: Option<String>,
}
