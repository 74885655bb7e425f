use axum::{http::StatusCode, response::IntoResponse};
use classplan_api::{
    config::{ApiConfig, parse_log_level},
    middleware::error_handling::AppError,
    routes::health::{HealthResponse, VersionResponse},
};
use classplan_core::errors::PlanError;
use rstest::rstest;
use std::collections::HashMap;
use tracing::Level;

use crate::test_utils::test_server;

#[rstest]
#[case(PlanError::NotFound("Subject not found".to_string()), StatusCode::NOT_FOUND)]
#[case(PlanError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(
    PlanError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk")),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[case(PlanError::Internal(eyre::eyre!("boom")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: PlanError, #[case] status: StatusCode) {
    let response = AppError(error).into_response();

    assert_eq!(response.status(), status);
}

#[test]
fn test_eyre_report_maps_to_internal() {
    let error: AppError = eyre::eyre!("unexpected").into();

    assert!(matches!(error.0, PlanError::Internal(_)));
}

#[tokio::test]
async fn test_health_and_version() {
    let server = test_server();

    let health: HealthResponse = server.get("/health").await.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.timetable_days.len(), 5);

    let version: VersionResponse = server.get("/version").await.json();
    assert_eq!(version.name, "classplan-api");
    assert!(!version.version.is_empty());
}

#[test]
fn test_config_defaults() {
    let config = ApiConfig::from_lookup(|_| None).unwrap();

    assert_eq!(config.server_addr(), "127.0.0.1:3000");
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.timetable_hours, (8..=18).collect::<Vec<u32>>());
    assert!(config.cors_origins.is_none());
}

#[test]
fn test_config_from_values() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("API_HOST", "0.0.0.0"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "debug"),
        ("API_CORS_ORIGINS", "http://localhost:5173, http://127.0.0.1:5173"),
        ("API_REQUEST_TIMEOUT_SECONDS", "not-a-number"),
        ("TIMETABLE_HOURS", "9-12"),
        ("TIMETABLE_DAYS", "Mon, Wed"),
    ]);
    let config = ApiConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();

    assert_eq!(config.server_addr(), "0.0.0.0:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(config.cors_origins.as_ref().map(Vec::len), Some(2));
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.timetable_hours, vec![9, 10, 11, 12]);
    assert_eq!(config.timetable_days, vec!["Mon".to_string(), "Wed".to_string()]);
}

#[rstest]
#[case("API_PORT", "99999")]
#[case("TIMETABLE_HOURS", "18-8")]
#[case("TIMETABLE_HOURS", "eight")]
fn test_config_rejects_invalid_values(#[case] key: &str, #[case] value: &str) {
    let result = ApiConfig::from_lookup(|k| (k == key).then(|| value.to_string()));

    assert!(result.is_err());
}

#[rstest]
#[case("TRACE", Level::TRACE)]
#[case("warn", Level::WARN)]
#[case("verbose", Level::INFO)]
fn test_parse_log_level(#[case] value: &str, #[case] level: Level) {
    assert_eq!(parse_log_level(value), level);
}
