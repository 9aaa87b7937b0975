//! Day endpoints. Every mutation returns the recomputed day summary.

use super::AppState;
use crate::core::day::compute_day_summary;
use crate::core::targets::get_targets;
use crate::db::queries;
use crate::db::queries::WorkDayChanges;
use crate::errors::{AppError, AppResult};
use crate::models::DaySummary;
use crate::utils::clock::Clock;
use crate::utils::date::{iso, parse_date};
use crate::utils::time::{combine, format_hhmm, parse_hhmm};
use axum::Json;
use axum::extract::{Path, State};
use chrono::NaiveDate;
use rusqlite::Connection;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub struct StartAtBody {
    pub start_time: String,
}

#[derive(Debug, Deserialize)]
pub struct EndAtBody {
    pub end_time: String,
}

#[derive(Debug, Deserialize)]
pub struct MinutesBody {
    pub minutes: i64,
}

/// Distinguishes an absent field (leave alone) from an explicit null (clear).
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

#[derive(Debug, Default, Deserialize)]
pub struct DayPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub start_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_time: Option<Option<String>>,
    pub break_minutes: Option<i64>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

fn check_minutes(minutes: i64) -> AppResult<()> {
    if !(0..=24 * 60).contains(&minutes) {
        return Err(AppError::InvalidRange(format!(
            "minutes must be between 0 and 1440, got {minutes}"
        )));
    }
    Ok(())
}

fn summarize(conn: &Connection, date: NaiveDate, clock: &dyn Clock) -> AppResult<Json<DaySummary>> {
    let targets = get_targets(conn)?;
    let row = queries::get_work_day(conn, &iso(date))?;
    Ok(Json(compute_day_summary(date, row.as_ref(), &targets, clock)?))
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<DaySummary>> {
    let day = parse_date(&date)?;
    let conn = state.conn()?;
    queries::get_or_create_work_day(&conn, &iso(day))?;
    summarize(&conn, day, state.clock.as_ref())
}

pub async fn start_now(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<DaySummary>> {
    let day = parse_date(&date)?;
    let conn = state.conn()?;
    let row = queries::get_or_create_work_day(&conn, &iso(day))?;

    // already started: leave the stored start alone
    if row.start_time.as_deref().map_or(true, str::is_empty) {
        let now = format_hhmm(state.clock.now().time());
        queries::set_start(&conn, &iso(day), &now)?;
    }
    summarize(&conn, day, state.clock.as_ref())
}

pub async fn start_at(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(body): Json<StartAtBody>,
) -> AppResult<Json<DaySummary>> {
    let day = parse_date(&date)?;
    parse_hhmm(&body.start_time)?;

    let conn = state.conn()?;
    queries::get_or_create_work_day(&conn, &iso(day))?;
    queries::set_start_reset_end(&conn, &iso(day), &body.start_time)?;
    summarize(&conn, day, state.clock.as_ref())
}

pub async fn end_now(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<DaySummary>> {
    let day = parse_date(&date)?;
    let conn = state.conn()?;
    let row = queries::get_or_create_work_day(&conn, &iso(day))?;

    if row.start_time.as_deref().map_or(true, str::is_empty) {
        return Err(AppError::InvalidRange(format!(
            "Day {date} not started yet (no start_time)."
        )));
    }
    let now = format_hhmm(state.clock.now().time());
    queries::set_end(&conn, &iso(day), &now)?;
    summarize(&conn, day, state.clock.as_ref())
}

pub async fn end_at(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(body): Json<EndAtBody>,
) -> AppResult<Json<DaySummary>> {
    let day = parse_date(&date)?;
    parse_hhmm(&body.end_time)?;

    let conn = state.conn()?;
    let row = queries::get_or_create_work_day(&conn, &iso(day))?;

    let Some(start) = row.start_time.as_deref().filter(|s| !s.is_empty()) else {
        return Err(AppError::InvalidRange(format!(
            "Day {date} not started yet (no start_time)."
        )));
    };
    if combine(day, &body.end_time)? < combine(day, start)? {
        return Err(AppError::InvalidRange(
            "End time cannot be earlier than start time (no midnight crossing).".to_string(),
        ));
    }
    queries::set_end(&conn, &iso(day), &body.end_time)?;
    summarize(&conn, day, state.clock.as_ref())
}

pub async fn clear_end(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<DaySummary>> {
    let day = parse_date(&date)?;
    let conn = state.conn()?;
    queries::get_or_create_work_day(&conn, &iso(day))?;
    queries::clear_end(&conn, &iso(day))?;
    summarize(&conn, day, state.clock.as_ref())
}

pub async fn break_add(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(body): Json<MinutesBody>,
) -> AppResult<Json<DaySummary>> {
    let day = parse_date(&date)?;
    check_minutes(body.minutes)?;
    let conn = state.conn()?;
    queries::get_or_create_work_day(&conn, &iso(day))?;
    queries::add_break_delta(&conn, &iso(day), body.minutes)?;
    summarize(&conn, day, state.clock.as_ref())
}

pub async fn break_subtract(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(body): Json<MinutesBody>,
) -> AppResult<Json<DaySummary>> {
    let day = parse_date(&date)?;
    check_minutes(body.minutes)?;
    let conn = state.conn()?;
    queries::get_or_create_work_day(&conn, &iso(day))?;
    queries::add_break_delta(&conn, &iso(day), -body.minutes)?;
    summarize(&conn, day, state.clock.as_ref())
}

/// Empty strings clear a time field, same as an explicit null.
fn normalize_time_field(field: Option<Option<String>>) -> AppResult<Option<Option<String>>> {
    match field {
        Some(Some(s)) if s.is_empty() => Ok(Some(None)),
        Some(Some(s)) => {
            parse_hhmm(&s)?;
            Ok(Some(Some(s)))
        }
        other => Ok(other),
    }
}

pub async fn patch_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Json(body): Json<DayPatch>,
) -> AppResult<Json<DaySummary>> {
    let day = parse_date(&date)?;

    if let Some(minutes) = body.break_minutes {
        check_minutes(minutes)?;
    }
    let changes = WorkDayChanges {
        start_time: normalize_time_field(body.start_time)?,
        end_time: normalize_time_field(body.end_time)?,
        break_minutes: body.break_minutes,
        notes: body.notes,
    };

    let conn = state.conn()?;
    queries::get_or_create_work_day(&conn, &iso(day))?;
    if !changes.is_empty() {
        queries::patch_work_day(&conn, &iso(day), &changes)?;
    }
    summarize(&conn, day, state.clock.as_ref())
}
