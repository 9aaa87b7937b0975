//! HTTP surface: axum router, shared state, and error → response mapping.
//!
//! Endpoints:
//!   GET   /api/day/{date}                 PATCH /api/day/{date}
//!   POST  /api/day/{date}/start-now|start-at|end-now|end-at|clear-end
//!   POST  /api/day/{date}/break/add|subtract
//!   GET   /api/week/{date}
//!   GET   /api/calendar/year/{year}
//!   GET   /api/settings                   PATCH /api/settings
//!   GET/POST /api/recurring-holidays      DELETE /api/recurring-holidays/{id}
//!   GET/POST /api/time-off                DELETE /api/time-off/{id}

pub mod calendar;
pub mod day;
pub mod holidays;
pub mod settings;
pub mod timeoff;
pub mod week;

use crate::errors::{AppError, AppResult};
use crate::utils::clock::Clock;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, post};
use rusqlite::Connection;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Clone)]
pub struct AppState {
    db_path: Arc<PathBuf>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(db_path: PathBuf, clock: Arc<dyn Clock>) -> Self {
        Self {
            db_path: Arc::new(db_path),
            clock,
        }
    }

    /// One connection per request: open, read/write, commit, drop. Nothing
    /// mutable is shared between requests.
    pub fn conn(&self) -> AppResult<Connection> {
        crate::db::open(&self.db_path)
    }
}

/// Wrapper for list responses: `{"items": [...]}`.
#[derive(Debug, Serialize)]
pub struct Items<T> {
    pub items: Vec<T>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidFormat(_) | AppError::InvalidRange(_) | AppError::InvalidTarget(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Io(_)
            | AppError::Db(_)
            | AppError::InternalInconsistency(_)
            | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/day/{date}", get(day::get_day).patch(day::patch_day))
        .route("/api/day/{date}/start-now", post(day::start_now))
        .route("/api/day/{date}/start-at", post(day::start_at))
        .route("/api/day/{date}/end-now", post(day::end_now))
        .route("/api/day/{date}/end-at", post(day::end_at))
        .route("/api/day/{date}/clear-end", post(day::clear_end))
        .route("/api/day/{date}/break/add", post(day::break_add))
        .route("/api/day/{date}/break/subtract", post(day::break_subtract))
        .route("/api/week/{date}", get(week::get_week))
        .route("/api/calendar/year/{year}", get(calendar::get_year))
        .route(
            "/api/settings",
            get(settings::get_settings).patch(settings::patch_settings),
        )
        .route(
            "/api/recurring-holidays",
            get(holidays::list_holidays).post(holidays::upsert_holiday),
        )
        .route("/api/recurring-holidays/{id}", delete(holidays::remove_holiday))
        .route(
            "/api/time-off",
            get(timeoff::list_time_off).post(timeoff::create_time_off),
        )
        .route("/api/time-off/{id}", delete(timeoff::remove_time_off))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
