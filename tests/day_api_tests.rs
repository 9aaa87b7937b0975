use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{get, patch, post, post_empty, test_app};

#[tokio::test]
async fn get_day_creates_the_record_lazily() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 12:00");

    let (status, body) = get(&app, "/api/day/2024-06-10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2024-06-10");
    assert_eq!(body["gross_minutes"], 0);
    assert_eq!(body["net_minutes"], 0);
    assert_eq!(body["running"], false);
    assert_eq!(body["break_minutes"], 0);
    assert_eq!(body["targets"]["daily_soft"], 360);
    assert_eq!(body["targets"]["daily_hard"], 480);
    assert_eq!(body["status"]["daily"], "under_soft");
}

#[tokio::test]
async fn malformed_date_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 12:00");

    let (status, body) = get(&app, "/api/day/10-06-2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("YYYY-MM-DD"));
}

#[tokio::test]
async fn start_now_uses_the_clock_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 09:17");

    let (status, body) = post_empty(&app, "/api/day/2024-06-10/start-now").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["start_time"], "09:17");
    assert_eq!(body["running"], true);

    // a second start-now must not overwrite the stored start
    let (status, body) = post_empty(&app, "/api/day/2024-06-10/start-now").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["start_time"], "09:17");
}

#[tokio::test]
async fn running_day_is_a_live_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 13:37");

    let (_, _) = post(&app, "/api/day/2024-06-10/start-at", json!({"start_time": "09:00"})).await;
    let (status, body) = get(&app, "/api/day/2024-06-10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["running"], true);
    assert_eq!(body["gross_minutes"], 277);
}

#[tokio::test]
async fn start_at_clears_a_previous_end() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 18:00");

    post(&app, "/api/day/2024-06-10/start-at", json!({"start_time": "09:00"})).await;
    post(&app, "/api/day/2024-06-10/end-at", json!({"end_time": "17:00"})).await;

    let (status, body) =
        post(&app, "/api/day/2024-06-10/start-at", json!({"start_time": "10:00"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["start_time"], "10:00");
    assert!(body["end_time"].is_null());
    assert_eq!(body["running"], true);
}

#[tokio::test]
async fn full_day_scenario_with_break() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 18:00");

    post(&app, "/api/day/2024-06-10/start-at", json!({"start_time": "09:00"})).await;
    post(&app, "/api/day/2024-06-10/end-at", json!({"end_time": "17:30"})).await;
    let (status, body) = post(&app, "/api/day/2024-06-10/break/add", json!({"minutes": 30})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["gross_minutes"], 510);
    assert_eq!(body["net_minutes"], 480);
    assert_eq!(body["running"], false);
    // net == hard: over requires strictly more than hard
    assert_eq!(body["status"]["daily"], "between_soft_and_hard");
    assert_eq!(body["status"]["over_soft_by"], 120);
    assert_eq!(body["status"]["over_hard_by"], 0);
}

#[tokio::test]
async fn end_before_start_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 18:00");

    post(&app, "/api/day/2024-06-10/start-at", json!({"start_time": "17:00"})).await;
    let (status, body) =
        post(&app, "/api/day/2024-06-10/end-at", json!({"end_time": "09:00"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("earlier than start"));
}

#[tokio::test]
async fn ending_an_unstarted_day_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 18:00");

    let (status, _) = post_empty(&app, "/api/day/2024-06-10/end-now").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) =
        post(&app, "/api/day/2024-06-10/end-at", json!({"end_time": "17:00"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn end_now_then_clear_end_resumes_the_timer() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 17:00");

    post(&app, "/api/day/2024-06-10/start-at", json!({"start_time": "09:00"})).await;
    let (status, body) = post_empty(&app, "/api/day/2024-06-10/end-now").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["end_time"], "17:00");
    assert_eq!(body["running"], false);
    assert_eq!(body["gross_minutes"], 480);

    let (status, body) = post_empty(&app, "/api/day/2024-06-10/clear-end").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["end_time"].is_null());
    assert_eq!(body["running"], true);
}

#[tokio::test]
async fn break_subtract_clamps_at_zero() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 18:00");

    post(&app, "/api/day/2024-06-10/break/add", json!({"minutes": 20})).await;
    let (status, body) =
        post(&app, "/api/day/2024-06-10/break/subtract", json!({"minutes": 90})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["break_minutes"], 0);
}

#[tokio::test]
async fn break_minutes_out_of_bounds_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 18:00");

    let (status, _) = post(&app, "/api/day/2024-06-10/break/add", json!({"minutes": 1441})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = post(&app, "/api/day/2024-06-10/break/add", json!({"minutes": -5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_updates_only_the_named_fields() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 18:00");

    post(&app, "/api/day/2024-06-10/start-at", json!({"start_time": "09:00"})).await;
    let (status, body) = patch(
        &app,
        "/api/day/2024-06-10",
        json!({"end_time": "17:30", "break_minutes": 30, "notes": "ran long"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["start_time"], "09:00");
    assert_eq!(body["end_time"], "17:30");
    assert_eq!(body["net_minutes"], 480);
}

#[tokio::test]
async fn patch_with_empty_string_clears_a_time() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 18:00");

    post(&app, "/api/day/2024-06-10/start-at", json!({"start_time": "09:00"})).await;
    post(&app, "/api/day/2024-06-10/end-at", json!({"end_time": "17:00"})).await;

    let (status, body) = patch(&app, "/api/day/2024-06-10", json!({"end_time": ""})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["end_time"].is_null());
    assert_eq!(body["running"], true);
}

#[tokio::test]
async fn patch_rejects_malformed_times() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 18:00");

    let (status, _) = patch(&app, "/api/day/2024-06-10", json!({"start_time": "9am"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_patch_still_returns_the_summary() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 18:00");

    let (status, body) = patch(&app, "/api/day/2024-06-10", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["date"], "2024-06-10");
}

#[tokio::test]
async fn repeated_reads_are_stable_for_a_finished_day() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir.path().join("day.sqlite"), "2024-06-10 18:00");

    post(&app, "/api/day/2024-06-10/start-at", json!({"start_time": "09:00"})).await;
    post(&app, "/api/day/2024-06-10/end-at", json!({"end_time": "17:00"})).await;

    let (_, first) = get(&app, "/api/day/2024-06-10").await;
    let (_, second) = get(&app, "/api/day/2024-06-10").await;
    assert_eq!(first, second);
}
