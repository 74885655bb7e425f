use axum_test::TestServer;
use classplan_api::{app, config::ApiConfig};
use classplan_core::models::subject::{SubjectAttendance, SubjectSchedule};
use serde_json::{Value, json};

/// Test server over the full router with default configuration
pub fn test_server() -> TestServer {
    test_server_with(ApiConfig::default())
}

pub fn test_server_with(config: ApiConfig) -> TestServer {
    TestServer::new(app(&config)).expect("Failed to build test server")
}

pub fn subject(label: &str, schedule: &str) -> Value {
    json!(SubjectSchedule::new(label, schedule))
}

pub fn attendance(label: &str, attended: u32, total_classes: u32, schedule: &str) -> Value {
    json!(SubjectAttendance::new(label, attended, total_classes, schedule))
}
