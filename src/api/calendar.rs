//! Year calendar endpoint.

use super::AppState;
use crate::core::calendar::compute_year_calendar;
use crate::errors::{AppError, AppResult};
use crate::models::YearCalendar;
use axum::Json;
use axum::extract::{Path, State};

pub async fn get_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> AppResult<Json<YearCalendar>> {
    if !(1900..=2100).contains(&year) {
        return Err(AppError::InvalidRange(
            "year must be between 1900 and 2100".to_string(),
        ));
    }
    let conn = state.conn()?;
    Ok(Json(compute_year_calendar(&conn, year, state.clock.as_ref())?))
}
