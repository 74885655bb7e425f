use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/forecast", post(handlers::attendance::forecast))
        .route(
            "/api/attendance/status",
            post(handlers::attendance::status),
        )
}
