//! Time-off endpoints: insert, list with optional overlap filter, delete by
//! id. Entries are never updated in place.

use super::{AppState, Items};
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{TimeOff, TimeOffKind};
use crate::utils::date::parse_date;
use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TimeOffCreate {
    pub start_date: String,
    pub end_date: String,
    pub kind: TimeOffKind,
    pub label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TimeOffFilter {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

pub async fn list_time_off(
    State(state): State<AppState>,
    Query(filter): Query<TimeOffFilter>,
) -> AppResult<Json<Items<TimeOff>>> {
    if let Some(from) = &filter.from_date {
        parse_date(from)?;
    }
    if let Some(to) = &filter.to_date {
        parse_date(to)?;
    }

    let conn = state.conn()?;
    // the overlap filter only applies when both bounds are given
    let items = match (&filter.from_date, &filter.to_date) {
        (Some(from), Some(to)) => queries::time_off_overlapping(&conn, from, to)?,
        _ => queries::list_time_off(&conn)?,
    };
    Ok(Json(Items { items }))
}

pub async fn create_time_off(
    State(state): State<AppState>,
    Json(body): Json<TimeOffCreate>,
) -> AppResult<Json<Items<TimeOff>>> {
    let start = parse_date(&body.start_date)?;
    let end = parse_date(&body.end_date)?;
    if end < start {
        return Err(AppError::InvalidRange(
            "end_date cannot be earlier than start_date".to_string(),
        ));
    }

    let conn = state.conn()?;
    queries::insert_time_off(
        &conn,
        &body.start_date,
        &body.end_date,
        body.kind,
        body.label.as_deref(),
    )?;
    let items = queries::list_time_off(&conn)?;
    Ok(Json(Items { items }))
}

/// Deleting a missing id is a no-op success.
pub async fn remove_time_off(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Items<TimeOff>>> {
    let conn = state.conn()?;
    queries::delete_time_off(&conn, id)?;
    let items = queries::list_time_off(&conn)?;
    Ok(Json(Items { items }))
}
