use axum::Json;
use classplan_core::{
    errors::PlanError,
    models::{
        api::{AttendanceStatusRequest, AttendanceStatusResponse, ForecastRequest, ForecastResponse},
        subject::{BunkStatus, attendance_percentage},
    },
    schedule::forecast_attendance,
};
use tracing::{info, warn};

use crate::middleware::error_handling::AppError;

/// Worst-case attendance forecast over a date window
///
/// # Endpoint
///
/// ```text
/// POST /api/forecast
/// ```
///
/// A window ending before it starts is treated as empty and yields no alerts.
#[axum::debug_handler]
pub async fn forecast(Json(payload): Json<ForecastRequest>) -> Json<ForecastResponse> {
    if payload.end < payload.start {
        warn!(start = %payload.start, end = %payload.end, "Forecast window ends before it starts");
    }

    let alerts = forecast_attendance(&payload.subjects, payload.start, payload.end);
    info!(
        subjects = payload.subjects.len(),
        alerts = alerts.len(),
        "Computed attendance forecast"
    );

    Json(ForecastResponse { alerts })
}

/// Current percentage and bunk-safety status for a pair of counters
///
/// # Endpoint
///
/// ```text
/// POST /api/attendance/status
/// ```
///
/// # Errors
///
/// * `PlanError::Validation` - more classes attended than were held
#[axum::debug_handler]
pub async fn status(
    Json(payload): Json<AttendanceStatusRequest>,
) -> Result<Json<AttendanceStatusResponse>, AppError> {
    if payload.attended > payload.total_classes {
        return Err(AppError(PlanError::Validation(format!(
            "Attended {} of only {} classes",
            payload.attended, payload.total_classes
        ))));
    }

    let status = BunkStatus::from_counts(payload.attended, payload.total_classes);

    Ok(Json(AttendanceStatusResponse {
        percentage: attendance_percentage(payload.attended, payload.total_classes),
        message: status.to_string(),
        status,
    }))
}
