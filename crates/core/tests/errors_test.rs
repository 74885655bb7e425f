use std::error::Error;
use classplan_core::errors::{PlanError, PlanResult};

#[test]
fn test_plan_error_display() {
    let not_found = PlanError::NotFound("Subjects file missing".to_string());
    let validation = PlanError::Validation("Invalid input".to_string());
    let io = PlanError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "no such file",
    ));
    let internal = PlanError::Internal(eyre::eyre!("Snapshot failed"));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Subjects file missing"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(io.to_string(), "I/O error: no such file");
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let plan_error: PlanError = io_error.into();

    assert!(plan_error.source().is_some());
    assert!(matches!(plan_error, PlanError::Io(_)));
}

#[test]
fn test_plan_result() {
    let result: PlanResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: PlanResult<i32> = Err(PlanError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("Something broke");
    let plan_error: PlanError = report.into();

    assert!(plan_error.to_string().contains("Something broke"));
}
