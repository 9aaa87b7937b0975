//! Settings → targets resolution.
//! Settings live as strings in a key/value table; defaults are merged at
//! read time so a partially seeded table still resolves.

use crate::db::DEFAULT_SETTINGS;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::Targets;
use rusqlite::Connection;
use std::collections::HashMap;

pub const KEY_DAILY_SOFT: &str = "daily_soft_minutes";
pub const KEY_DAILY_HARD: &str = "daily_hard_minutes";
pub const KEY_WORKDAYS: &str = "workdays_per_week";

/// Current settings as stored strings, with defaults filled in for any
/// missing key.
pub fn get_settings(conn: &Connection) -> AppResult<HashMap<String, String>> {
    let mut out = queries::settings_map(conn)?;
    for (k, v) in DEFAULT_SETTINGS {
        out.entry(k.to_string()).or_insert_with(|| v.to_string());
    }
    Ok(out)
}

fn parse_setting(s: &HashMap<String, String>, key: &str) -> AppResult<i64> {
    s.get(key)
        .and_then(|v| v.trim().parse::<i64>().ok())
        .ok_or_else(|| AppError::InternalInconsistency(format!("'{key}' is not an integer")))
}

/// Parse and validate stored settings into usable targets.
pub fn get_targets(conn: &Connection) -> AppResult<Targets> {
    let s = get_settings(conn)?;
    let daily_soft = parse_setting(&s, KEY_DAILY_SOFT)?;
    let daily_hard = parse_setting(&s, KEY_DAILY_HARD)?;
    let workdays = parse_setting(&s, KEY_WORKDAYS)?;

    if daily_soft < 0 || daily_hard < 0 || workdays <= 0 {
        return Err(AppError::InternalInconsistency(
            "negative or zero values".to_string(),
        ));
    }
    if daily_soft > daily_hard {
        return Err(AppError::InvalidTarget(
            "daily_soft_minutes cannot be greater than daily_hard_minutes.".to_string(),
        ));
    }

    Ok(Targets {
        daily_soft,
        daily_hard,
        workdays_per_week: workdays,
        weekly_soft: daily_soft * workdays,
        weekly_hard: daily_hard * workdays,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;

    #[test]
    fn defaults_resolve_on_fresh_db() {
        let conn = open_in_memory();
        let t = get_targets(&conn).unwrap();
        assert_eq!(t.daily_soft, 360);
        assert_eq!(t.daily_hard, 480);
        assert_eq!(t.workdays_per_week, 5);
        assert_eq!(t.weekly_soft, 1800);
        assert_eq!(t.weekly_hard, 2400);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let conn = open_in_memory();
        conn.execute("DELETE FROM settings WHERE key = 'daily_hard_minutes'", [])
            .unwrap();
        let t = get_targets(&conn).unwrap();
        assert_eq!(t.daily_hard, 480);
    }

    #[test]
    fn non_numeric_setting_is_internal_inconsistency() {
        let conn = open_in_memory();
        queries::upsert_setting(&conn, KEY_DAILY_SOFT, "six hours").unwrap();
        match get_targets(&conn) {
            Err(AppError::InternalInconsistency(_)) => {}
            other => panic!("expected InternalInconsistency, got {other:?}"),
        }
    }

    #[test]
    fn negative_or_zero_values_are_internal_inconsistency() {
        let conn = open_in_memory();
        queries::upsert_setting(&conn, KEY_WORKDAYS, "0").unwrap();
        assert!(matches!(
            get_targets(&conn),
            Err(AppError::InternalInconsistency(_))
        ));

        let conn = open_in_memory();
        queries::upsert_setting(&conn, KEY_DAILY_SOFT, "-10").unwrap();
        assert!(matches!(
            get_targets(&conn),
            Err(AppError::InternalInconsistency(_))
        ));
    }

    #[test]
    fn soft_above_hard_is_invalid_target() {
        let conn = open_in_memory();
        queries::upsert_setting(&conn, KEY_DAILY_SOFT, "500").unwrap();
        assert!(matches!(get_targets(&conn), Err(AppError::InvalidTarget(_))));
    }
}
