//! All SQL for the four persisted entities. Functions return the plain
//! rusqlite Result; callers convert via AppError's From impl.

use crate::models::{RecurringHoliday, TimeOff, TimeOffKind, WorkDay};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, ToSql, params};
use std::collections::HashMap;

fn row_to_work_day(row: &rusqlite::Row) -> Result<WorkDay> {
    Ok(WorkDay {
        date: row.get("date")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        break_minutes: row.get::<_, Option<i64>>("break_minutes")?.unwrap_or(0),
        notes: row.get("notes")?,
    })
}

fn row_to_time_off(row: &rusqlite::Row) -> Result<TimeOff> {
    let kind: String = row.get("kind")?;
    let kind = TimeOffKind::from_db_str(&kind).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, format!("unknown kind '{kind}'").into())
    })?;
    Ok(TimeOff {
        id: row.get("id")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
        kind,
        label: row.get("label")?,
    })
}

fn row_to_recurring(row: &rusqlite::Row) -> Result<RecurringHoliday> {
    Ok(RecurringHoliday {
        id: row.get("id")?,
        month: row.get("month")?,
        day: row.get("day")?,
        label: row.get("label")?,
    })
}

// ---------------------------------------------------------------------------
// work_day
// ---------------------------------------------------------------------------

const WORK_DAY_COLS: &str = "date, start_time, end_time, break_minutes, notes";

pub fn get_work_day(conn: &Connection, date: &str) -> Result<Option<WorkDay>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {WORK_DAY_COLS} FROM work_day WHERE date = ?1"
    ))?;
    stmt.query_row([date], row_to_work_day).optional()
}

/// Fetch the record for a date, inserting the empty row first if this is the
/// first access. Rows are never deleted afterwards.
pub fn get_or_create_work_day(conn: &Connection, date: &str) -> Result<WorkDay> {
    conn.execute(
        "INSERT INTO work_day(date) VALUES (?1) ON CONFLICT(date) DO NOTHING",
        [date],
    )?;
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {WORK_DAY_COLS} FROM work_day WHERE date = ?1"
    ))?;
    stmt.query_row([date], row_to_work_day)
}

/// All stored rows for dates in `[start, end]`, keyed by date, in one query.
pub fn work_days_in_range(
    conn: &Connection,
    start: &str,
    end: &str,
) -> Result<HashMap<String, WorkDay>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {WORK_DAY_COLS} FROM work_day WHERE date >= ?1 AND date <= ?2"
    ))?;
    let rows = stmt.query_map([start, end], row_to_work_day)?;

    let mut out = HashMap::new();
    for r in rows {
        let wd = r?;
        out.insert(wd.date.clone(), wd);
    }
    Ok(out)
}

pub fn set_start(conn: &Connection, date: &str, hhmm: &str) -> Result<()> {
    conn.execute(
        "UPDATE work_day SET start_time = ?1 WHERE date = ?2",
        params![hhmm, date],
    )?;
    Ok(())
}

/// Restarting a day drops any previously stored end time.
pub fn set_start_reset_end(conn: &Connection, date: &str, hhmm: &str) -> Result<()> {
    conn.execute(
        "UPDATE work_day SET start_time = ?1, end_time = NULL WHERE date = ?2",
        params![hhmm, date],
    )?;
    Ok(())
}

pub fn set_end(conn: &Connection, date: &str, hhmm: &str) -> Result<()> {
    conn.execute(
        "UPDATE work_day SET end_time = ?1 WHERE date = ?2",
        params![hhmm, date],
    )?;
    Ok(())
}

pub fn clear_end(conn: &Connection, date: &str) -> Result<()> {
    conn.execute("UPDATE work_day SET end_time = NULL WHERE date = ?1", [date])?;
    Ok(())
}

/// Atomic break adjustment, clamped at zero in SQL. A single UPDATE avoids
/// the lost-update race a read-then-write sequence would have.
pub fn add_break_delta(conn: &Connection, date: &str, delta: i64) -> Result<()> {
    conn.execute(
        "UPDATE work_day SET break_minutes = MAX(0, break_minutes + ?1) WHERE date = ?2",
        params![delta, date],
    )?;
    Ok(())
}

/// Sparse field update for PATCH. Outer None leaves the column alone, inner
/// None writes NULL.
#[derive(Debug, Default)]
pub struct WorkDayChanges {
    pub start_time: Option<Option<String>>,
    pub end_time: Option<Option<String>>,
    pub break_minutes: Option<i64>,
    pub notes: Option<Option<String>>,
}

impl WorkDayChanges {
    pub fn is_empty(&self) -> bool {
        self.start_time.is_none()
            && self.end_time.is_none()
            && self.break_minutes.is_none()
            && self.notes.is_none()
    }
}

pub fn patch_work_day(conn: &Connection, date: &str, changes: &WorkDayChanges) -> Result<()> {
    let mut sets: Vec<&str> = Vec::new();
    let mut values: Vec<&dyn ToSql> = Vec::new();

    if let Some(v) = &changes.start_time {
        sets.push("start_time = ?");
        values.push(v);
    }
    if let Some(v) = &changes.end_time {
        sets.push("end_time = ?");
        values.push(v);
    }
    if let Some(v) = &changes.break_minutes {
        sets.push("break_minutes = ?");
        values.push(v);
    }
    if let Some(v) = &changes.notes {
        sets.push("notes = ?");
        values.push(v);
    }

    if sets.is_empty() {
        return Ok(());
    }

    let sql = format!("UPDATE work_day SET {} WHERE date = ?", sets.join(", "));
    values.push(&date);
    conn.execute(&sql, rusqlite::params_from_iter(values))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// settings
// ---------------------------------------------------------------------------

pub fn settings_map(conn: &Connection) -> Result<HashMap<String, String>> {
    let mut stmt = conn.prepare_cached("SELECT key, value FROM settings")?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?;
    rows.collect()
}

/// Last-write-wins per key.
pub fn upsert_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// recurring_holiday
// ---------------------------------------------------------------------------

pub fn list_recurring(conn: &Connection) -> Result<Vec<RecurringHoliday>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, month, day, label FROM recurring_holiday ORDER BY month ASC, day ASC",
    )?;
    let rows = stmt.query_map([], row_to_recurring)?;
    rows.collect()
}

/// Upsert on the unique (month, day) pair; a repeat POST just updates the label.
pub fn upsert_recurring(conn: &Connection, month: u32, day: u32, label: Option<&str>) -> Result<()> {
    conn.execute(
        "INSERT INTO recurring_holiday (month, day, label) VALUES (?1, ?2, ?3)
         ON CONFLICT(month, day) DO UPDATE SET label = excluded.label",
        params![month, day, label],
    )?;
    Ok(())
}

/// Returns the number of rows deleted; deleting a missing id is a no-op.
pub fn delete_recurring(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM recurring_holiday WHERE id = ?1", [id])
}

// ---------------------------------------------------------------------------
// time_off
// ---------------------------------------------------------------------------

pub fn insert_time_off(
    conn: &Connection,
    start_date: &str,
    end_date: &str,
    kind: TimeOffKind,
    label: Option<&str>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO time_off (start_date, end_date, kind, label) VALUES (?1, ?2, ?3, ?4)",
        params![start_date, end_date, kind.to_db_str(), label],
    )?;
    Ok(conn.last_insert_rowid())
}

const TIME_OFF_COLS: &str = "id, start_date, end_date, kind, label";

pub fn list_time_off(conn: &Connection) -> Result<Vec<TimeOff>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {TIME_OFF_COLS} FROM time_off ORDER BY start_date ASC, id ASC"
    ))?;
    let rows = stmt.query_map([], row_to_time_off)?;
    rows.collect()
}

/// Entries whose inclusive range intersects `[start, end]`:
/// NOT (end_date < start OR start_date > end).
pub fn time_off_overlapping(conn: &Connection, start: &str, end: &str) -> Result<Vec<TimeOff>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {TIME_OFF_COLS} FROM time_off
         WHERE NOT (end_date < ?1 OR start_date > ?2)
         ORDER BY start_date ASC, id ASC"
    ))?;
    let rows = stmt.query_map([start, end], row_to_time_off)?;
    rows.collect()
}

pub fn delete_time_off(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM time_off WHERE id = ?1", [id])
}
