use axum::http::StatusCode;
use classplan_core::models::{
    api::{AttendanceStatusResponse, ForecastResponse},
    subject::BunkStatus,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use crate::test_utils::{attendance, test_server};

#[tokio::test]
async fn test_forecast_reports_subjects_below_threshold() {
    let server = test_server();

    let response = server
        .post("/api/forecast")
        .json(&json!({
            "subjects": [
                attendance("Maths", 5, 10, "MON 9-10:T"),
                attendance("Physics", 18, 20, "MON 9-10:T"),
            ],
            "start": "2026-10-19",
            "end": "2026-10-26",
        }))
        .await;

    response.assert_status_ok();
    let body: ForecastResponse = response.json();
    assert_eq!(body.alerts.len(), 1);
    assert_eq!(body.alerts[0].label, "Maths");
    assert_eq!(body.alerts[0].projected_percentage, 41.7);
    assert_eq!(body.alerts[0].upcoming_classes, 2);
}

#[tokio::test]
async fn test_forecast_with_reversed_window_is_empty() {
    let server = test_server();

    let response = server
        .post("/api/forecast")
        .json(&json!({
            "subjects": [attendance("Maths", 0, 10, "MON 9-10")],
            "start": "2026-10-26",
            "end": "2026-10-19",
        }))
        .await;

    response.assert_status_ok();
    let body: ForecastResponse = response.json();
    assert!(body.alerts.is_empty());
}

#[tokio::test]
async fn test_forecast_rejects_bad_dates() {
    let server = test_server();

    let response = server
        .post("/api/forecast")
        .json(&json!({ "subjects": [], "start": "next monday", "end": "2026-10-19" }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[rstest]
#[case(0, 0, 100.0, BunkStatus::NoClasses, "No classes yet.")]
#[case(9, 10, 90.0, BunkStatus::SafeToBunk(2), "Safe to bunk 2")]
#[case(5, 10, 50.0, BunkStatus::AttendNext(10), "Attend next 10!")]
#[tokio::test]
async fn test_attendance_status(
    #[case] attended: u32,
    #[case] total_classes: u32,
    #[case] percentage: f64,
    #[case] status: BunkStatus,
    #[case] message: &str,
) {
    let server = test_server();

    let response = server
        .post("/api/attendance/status")
        .json(&json!({ "attended": attended, "total_classes": total_classes }))
        .await;

    response.assert_status_ok();
    let body: AttendanceStatusResponse = response.json();
    assert_eq!(body.percentage, percentage);
    assert_eq!(body.status, status);
    assert_eq!(body.message, message);
}

#[tokio::test]
async fn test_attendance_status_rejects_impossible_counts() {
    let server = test_server();

    let response = server
        .post("/api/attendance/status")
        .json(&json!({ "attended": 11, "total_classes": 10 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
