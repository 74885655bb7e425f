use axum::Json;
use classplan_core::{
    models::api::{AppendSlotRequest, AppendSlotResponse, ParseScheduleRequest, ParseScheduleResponse},
    schedule::{append_slot, parse_schedule},
};
use tracing::debug;

use crate::middleware::error_handling::AppError;

/// Parses one raw schedule string into its slots
///
/// # Endpoint
///
/// ```text
/// POST /api/schedule/parse
/// ```
///
/// Unrecognized segments are dropped, so this never fails on content.
#[axum::debug_handler]
pub async fn parse(Json(payload): Json<ParseScheduleRequest>) -> Json<ParseScheduleResponse> {
    let slots = parse_schedule(&payload.raw);
    debug!(slots = slots.len(), "Parsed schedule");

    Json(ParseScheduleResponse { slots })
}

/// Appends a ranged slot descriptor to a raw schedule and returns the new text
///
/// # Endpoint
///
/// ```text
/// POST /api/schedule/append
/// ```
///
/// # Errors
///
/// * `PlanError::Validation` - the hour range is reversed or past 23
#[axum::debug_handler]
pub async fn append(
    Json(payload): Json<AppendSlotRequest>,
) -> Result<Json<AppendSlotResponse>, AppError> {
    let raw = append_slot(
        &payload.raw,
        payload.day,
        payload.start,
        payload.end,
        payload.kind,
    )?;

    Ok(Json(AppendSlotResponse { raw }))
}
