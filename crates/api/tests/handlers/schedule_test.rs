use axum::http::StatusCode;
use chrono::Weekday;
use classplan_core::models::{
    api::{AppendSlotResponse, ParseScheduleResponse},
    slot::{ScheduleSlot, SlotKind},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use crate::test_utils::test_server;

#[tokio::test]
async fn test_parse_mixed_notations() {
    let server = test_server();

    let response = server
        .post("/api/schedule/parse")
        .json(&json!({ "raw": "MON 9-11:L, WED 14-15, FRI 2PM" }))
        .await;

    response.assert_status_ok();
    let body: ParseScheduleResponse = response.json();
    assert_eq!(
        body.slots,
        vec![
            ScheduleSlot::ranged(Weekday::Mon, 9, 11, SlotKind::Lab),
            ScheduleSlot::ranged(Weekday::Wed, 14, 15, SlotKind::Theory),
            ScheduleSlot::single(Weekday::Fri, 14),
        ]
    );
}

#[rstest]
#[case("")]
#[case("FOO BAR")]
#[tokio::test]
async fn test_parse_malformed_returns_no_slots(#[case] raw: &str) {
    let server = test_server();

    let response = server
        .post("/api/schedule/parse")
        .json(&json!({ "raw": raw }))
        .await;

    response.assert_status_ok();
    let body: ParseScheduleResponse = response.json();
    assert!(body.slots.is_empty());
}

#[tokio::test]
async fn test_append_slot() {
    let server = test_server();

    let response = server
        .post("/api/schedule/append")
        .json(&json!({
            "raw": "MON 9-11:L",
            "day": "Wed",
            "start": 14,
            "end": 15,
        }))
        .await;

    response.assert_status_ok();
    let body: AppendSlotResponse = response.json();
    assert_eq!(body.raw, "MON 9-11:L, WED 14-15:T");
}

#[tokio::test]
async fn test_append_slot_rejects_reversed_hours() {
    let server = test_server();

    let response = server
        .post("/api/schedule/append")
        .json(&json!({
            "raw": "MON 9-11:L",
            "day": "Wed",
            "start": 15,
            "end": 14,
            "kind": "lab",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
}

#[tokio::test]
async fn test_append_slot_missing_fields_is_client_error() {
    let server = test_server();

    let response = server
        .post("/api/schedule/append")
        .json(&json!({ "raw": "MON 9-11:L" }))
        .await;

    assert!(response.status_code().is_client_error());
}
