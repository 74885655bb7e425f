use classplan_api::config::ApiConfig;
use classplan_core::models::{api::GapsResponse, forecast::Gap, timetable::Timetables};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::{subject, test_server, test_server_with};

#[tokio::test]
async fn test_timetable_with_default_grid() {
    let server = test_server();

    let response = server
        .post("/api/timetable")
        .json(&json!({
            "subjects": [
                subject("Maths", "MON 9-11"),
                subject("Chemistry", "TUE 14-16:L"),
            ]
        }))
        .await;

    response.assert_status_ok();
    let grids: Timetables = response.json();
    assert_eq!(grids.theory.days, vec!["Mon", "Tue", "Wed", "Thu", "Fri"]);
    assert_eq!(grids.theory.rows.len(), 11);
    assert_eq!(grids.theory.cell(10, "Mon"), Some("Maths"));
    assert_eq!(grids.lab.cell(15, "Tue"), Some("Chemistry"));
    assert_eq!(grids.theory.cell(15, "Tue"), None);
}

#[tokio::test]
async fn test_timetable_with_requested_grid() {
    let server = test_server();

    let response = server
        .post("/api/timetable")
        .json(&json!({
            "subjects": [subject("Maths", "MON 9-11")],
            "hours": [10],
            "days": ["Monday"],
        }))
        .await;

    response.assert_status_ok();
    let grids: Timetables = response.json();
    assert_eq!(grids.theory.rows.len(), 1);
    assert_eq!(grids.theory.cell(10, "Monday"), Some("Maths"));
}

#[tokio::test]
async fn test_timetable_uses_configured_defaults() {
    let config = ApiConfig {
        timetable_hours: vec![9, 10],
        timetable_days: vec!["Sat".to_string()],
        ..ApiConfig::default()
    };
    let server = test_server_with(config);

    let response = server
        .post("/api/timetable")
        .json(&json!({ "subjects": [subject("Workshop", "SAT 9-10:L")] }))
        .await;

    let grids: Timetables = response.json();
    assert_eq!(grids.lab.cell(9, "Sat"), Some("Workshop"));
    assert_eq!(grids.lab.cell(10, "Sat"), None);
}

#[tokio::test]
async fn test_timetable_last_subject_wins() {
    let server = test_server();

    let response = server
        .post("/api/timetable")
        .json(&json!({
            "subjects": [subject("First", "MON 9-10"), subject("Second", "MON 9-10")]
        }))
        .await;

    let grids: Timetables = response.json();
    assert_eq!(grids.theory.cell(9, "Mon"), Some("Second"));
}

#[tokio::test]
async fn test_gaps_for_weekday() {
    let server = test_server();

    let response = server
        .post("/api/gaps")
        .json(&json!({
            "subjects": [subject("Maths", "MON 9-10"), subject("Physics", "MON 11-13, TUE 8-9")],
            "weekday": "Monday",
        }))
        .await;

    response.assert_status_ok();
    let body: GapsResponse = response.json();
    assert_eq!(body.gaps, vec![Gap { start: 10, end: 11 }]);
}

#[tokio::test]
async fn test_gaps_without_subjects() {
    let server = test_server();

    let response = server
        .post("/api/gaps")
        .json(&json!({ "weekday": "Mon" }))
        .await;

    response.assert_status_ok();
    let body: GapsResponse = response.json();
    assert!(body.gaps.is_empty());
}
