use serde::{Deserialize, Serialize};

/// Annual recurrence keyed by a unique (month, day) pair, e.g. every Dec 25.
#[derive(Debug, Clone, Serialize)]
pub struct RecurringHoliday {
    pub id: i64,
    pub month: u32,
    pub day: u32,
    pub label: Option<String>,
}

/// Inclusive date range of personal time off. Never updated in place:
/// delete and recreate.
#[derive(Debug, Clone, Serialize)]
pub struct TimeOff {
    pub id: i64,
    pub start_date: String,
    pub end_date: String,
    pub kind: TimeOffKind,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOffKind {
    Vacation,
    Personal,
}

impl TimeOffKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            TimeOffKind::Vacation => "vacation",
            TimeOffKind::Personal => "personal",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "vacation" => Some(TimeOffKind::Vacation),
            "personal" => Some(TimeOffKind::Personal),
            _ => None,
        }
    }
}

/// Which record made a date an off day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OffSource {
    Recurring,
    Personal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OffKind {
    Holiday,
    Vacation,
    Personal,
}

#[derive(Debug, Clone, Serialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Read-only back-reference to the record that marks a date as off.
/// Exactly one of `recurring_id` / `time_off_id` is set, matching `source`.
#[derive(Debug, Clone, Serialize)]
pub struct OffAnnotation {
    pub source: OffSource,
    pub kind: OffKind,
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_off_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<DateRange>,
}
