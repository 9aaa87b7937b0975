#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceExt;
use workclock::api::{AppState, build_router};
use workclock::utils::clock::FixedClock;

/// Build a router over a fresh database with the clock pinned at `now`
/// (`YYYY-MM-DD HH:MM`).
pub fn test_app(db: &Path, now: &str) -> Router {
    let conn = workclock::db::open(db).expect("open db");
    workclock::db::init_db(&conn).expect("init db");
    drop(conn);

    let now = chrono::NaiveDateTime::parse_from_str(now, "%Y-%m-%d %H:%M").expect("parse now");
    let state = AppState::new(db.to_path_buf(), Arc::new(FixedClock(now)));
    build_router(state)
}

pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        // Non-JSON bodies (e.g. axum's plain-text extractor rejections) are
        // surfaced as a string value so status-only assertions still work.
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "POST", uri, Some(body)).await
}

pub async fn post_empty(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "POST", uri, None).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    request(app, "PATCH", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    request(app, "DELETE", uri, None).await
}
