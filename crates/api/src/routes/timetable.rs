use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/timetable", post(handlers::timetable::timetable))
        .route("/api/gaps", post(handlers::timetable::gaps))
}
