//! Recurring-holiday endpoints: upsert on the (month, day) pair, delete by
//! id. Mutations return the refreshed list.

use super::{AppState, Items};
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::RecurringHoliday;
use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RecurringHolidayCreate {
    pub month: u32,
    pub day: u32,
    pub label: Option<String>,
}

pub async fn list_holidays(
    State(state): State<AppState>,
) -> AppResult<Json<Items<RecurringHoliday>>> {
    let conn = state.conn()?;
    let items = queries::list_recurring(&conn)?;
    Ok(Json(Items { items }))
}

pub async fn upsert_holiday(
    State(state): State<AppState>,
    Json(body): Json<RecurringHolidayCreate>,
) -> AppResult<Json<Items<RecurringHoliday>>> {
    if !(1..=12).contains(&body.month) {
        return Err(AppError::InvalidRange(format!(
            "month must be between 1 and 12, got {}",
            body.month
        )));
    }
    if !(1..=31).contains(&body.day) {
        return Err(AppError::InvalidRange(format!(
            "day must be between 1 and 31, got {}",
            body.day
        )));
    }

    let conn = state.conn()?;
    queries::upsert_recurring(&conn, body.month, body.day, body.label.as_deref())?;
    let items = queries::list_recurring(&conn)?;
    Ok(Json(Items { items }))
}

/// Deleting a missing id is a no-op success.
pub async fn remove_holiday(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Items<RecurringHoliday>>> {
    let conn = state.conn()?;
    queries::delete_recurring(&conn, id)?;
    let items = queries::list_recurring(&conn)?;
    Ok(Json(Items { items }))
}
