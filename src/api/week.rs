//! Week endpoint.

use super::AppState;
use crate::core::week::compute_week;
use crate::errors::AppResult;
use crate::models::WeekSummary;
use crate::utils::date::parse_date;
use axum::Json;
use axum::extract::{Path, State};

pub async fn get_week(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> AppResult<Json<WeekSummary>> {
    let anchor = parse_date(&date)?;
    let conn = state.conn()?;
    Ok(Json(compute_week(&conn, anchor, state.clock.as_ref())?))
}
