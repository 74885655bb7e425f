//! # Timetable Handlers
//!
//! Week grid and daily gap views over the subjects sent by the caller.

use axum::{Json, extract::State};
use classplan_core::{
    models::{
        api::{GapsRequest, GapsResponse, TimetableRequest},
        timetable::Timetables,
    },
    schedule::{find_gaps, project_timetable},
};
use std::sync::Arc;

use crate::ApiState;

/// Builds the theory and lab grids of the week
///
/// # Endpoint
///
/// ```text
/// POST /api/timetable
/// ```
///
/// Hours and day keys default to the server's configured grid when the
/// request leaves them out.
#[axum::debug_handler]
pub async fn timetable(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<TimetableRequest>,
) -> Json<Timetables> {
    let hours = payload
        .hours
        .unwrap_or_else(|| state.timetable_hours.clone());
    let days = payload
        .days
        .unwrap_or_else(|| state.timetable_days.clone());

    Json(project_timetable(&payload.subjects, &hours, &days))
}

/// Lists the free gaps between the classes of one weekday
///
/// # Endpoint
///
/// ```text
/// POST /api/gaps
/// ```
#[axum::debug_handler]
pub async fn gaps(Json(payload): Json<GapsRequest>) -> Json<GapsResponse> {
    Json(GapsResponse {
        gaps: find_gaps(&payload.subjects, &payload.weekday),
    })
}
