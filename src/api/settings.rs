//! Settings endpoints. Values are stored per key, last write wins; a PATCH
//! that would leave soft above hard is rejected before any write.

use super::AppState;
use crate::core::targets;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use axum::Json;
use axum::extract::State;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct SettingsValues {
    pub daily_soft_minutes: i64,
    pub daily_hard_minutes: i64,
    pub workdays_per_week: i64,
}

#[derive(Debug, Serialize)]
pub struct DerivedTargets {
    pub weekly_soft_minutes: i64,
    pub weekly_hard_minutes: i64,
}

#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub settings: SettingsValues,
    pub derived: DerivedTargets,
}

#[derive(Debug, Deserialize)]
pub struct SettingsPatch {
    pub daily_soft_minutes: Option<i64>,
    pub daily_hard_minutes: Option<i64>,
    pub workdays_per_week: Option<i64>,
}

fn view(conn: &Connection) -> AppResult<Json<SettingsView>> {
    let t = targets::get_targets(conn)?;
    Ok(Json(SettingsView {
        settings: SettingsValues {
            daily_soft_minutes: t.daily_soft,
            daily_hard_minutes: t.daily_hard,
            workdays_per_week: t.workdays_per_week,
        },
        derived: DerivedTargets {
            weekly_soft_minutes: t.weekly_soft,
            weekly_hard_minutes: t.weekly_hard,
        },
    }))
}

pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<SettingsView>> {
    let conn = state.conn()?;
    view(&conn)
}

pub async fn patch_settings(
    State(state): State<AppState>,
    Json(body): Json<SettingsPatch>,
) -> AppResult<Json<SettingsView>> {
    for (name, value, lo, hi) in [
        ("daily_soft_minutes", body.daily_soft_minutes, 0, 1440),
        ("daily_hard_minutes", body.daily_hard_minutes, 0, 1440),
        ("workdays_per_week", body.workdays_per_week, 1, 7),
    ] {
        if let Some(v) = value {
            if !(lo..=hi).contains(&v) {
                return Err(AppError::InvalidRange(format!(
                    "{name} must be between {lo} and {hi}, got {v}"
                )));
            }
        }
    }

    let conn = state.conn()?;
    let current = targets::get_targets(&conn)?;

    let new_soft = body.daily_soft_minutes.unwrap_or(current.daily_soft);
    let new_hard = body.daily_hard_minutes.unwrap_or(current.daily_hard);
    if new_soft > new_hard {
        return Err(AppError::InvalidTarget(
            "daily_soft_minutes cannot be greater than daily_hard_minutes.".to_string(),
        ));
    }

    if let Some(v) = body.daily_soft_minutes {
        queries::upsert_setting(&conn, targets::KEY_DAILY_SOFT, &v.to_string())?;
    }
    if let Some(v) = body.daily_hard_minutes {
        queries::upsert_setting(&conn, targets::KEY_DAILY_HARD, &v.to_string())?;
    }
    if let Some(v) = body.workdays_per_week {
        queries::upsert_setting(&conn, targets::KEY_WORKDAYS, &v.to_string())?;
    }

    view(&conn)
}
