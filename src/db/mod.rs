//! SQLite layer: connection open, schema creation, defaults seeding.
//! Every request opens its own connection, does its reads/writes, and drops
//! it; no connection is shared across requests.

pub mod queries;

use crate::errors::AppResult;
use rusqlite::{Connection, params};
use std::path::Path;

/// Settings seeded at first initialization: 6h soft, 8h hard, Mon-Fri.
pub const DEFAULT_SETTINGS: [(&str, &str); 3] = [
    ("daily_soft_minutes", "360"),
    ("daily_hard_minutes", "480"),
    ("workdays_per_week", "5"),
];

pub fn open(path: &Path) -> AppResult<Connection> {
    let conn = Connection::open(path)?;
    Ok(conn)
}

/// Initialize the database schema and seed default settings.
/// Safe to call repeatedly; existing rows are left alone.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS work_day (
            date          TEXT PRIMARY KEY,               -- YYYY-MM-DD
            start_time    TEXT,                           -- HH:MM
            end_time      TEXT,                           -- HH:MM
            break_minutes INTEGER NOT NULL DEFAULT 0,
            notes         TEXT
        );

        CREATE TABLE IF NOT EXISTS settings (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS recurring_holiday (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            month INTEGER NOT NULL,
            day   INTEGER NOT NULL,
            label TEXT,
            UNIQUE(month, day)
        );

        CREATE TABLE IF NOT EXISTS time_off (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            start_date TEXT NOT NULL,                     -- YYYY-MM-DD
            end_date   TEXT NOT NULL,
            kind       TEXT NOT NULL CHECK (kind IN ('vacation','personal')),
            label      TEXT
        );
        ",
    )?;

    let mut stmt = conn
        .prepare_cached("INSERT INTO settings(key, value) VALUES (?1, ?2) ON CONFLICT(key) DO NOTHING")?;
    for (k, v) in DEFAULT_SETTINGS {
        stmt.execute(params![k, v])?;
    }
    Ok(())
}

#[cfg(test)]
pub fn open_in_memory() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    init_db(&conn).unwrap();
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_seeds_defaults_once() {
        let conn = open_in_memory();
        // second init must not clobber a changed value
        conn.execute(
            "UPDATE settings SET value = '420' WHERE key = 'daily_soft_minutes'",
            [],
        )
        .unwrap();
        init_db(&conn).unwrap();

        let v: String = conn
            .query_row(
                "SELECT value FROM settings WHERE key = 'daily_soft_minutes'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(v, "420");
    }
}
