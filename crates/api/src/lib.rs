//! # ClassPlan API
//!
//! The API crate is the local HTTP boundary of the ClassPlan planner. The UI
//! and the CRUD layer that owns subjects send schedules, counters and dates
//! here and get back parsed slots, week grids, free gaps and attendance
//! forecasts. The server keeps no data of its own; every response is computed
//! from the request body.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Call into `classplan-core` and shape the responses
//! - **Middleware**: Error mapping to HTTP status codes
//! - **Config**: Environment and application configuration

/// Configuration module for API settings
pub mod config;
/// Request handlers that call the schedule engine
pub mod handlers;
/// Error handling shared by all handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{future::Future, sync::Arc, time::Duration};

use axum::{Router, http::HeaderValue};
use eyre::Result;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Hours used when a timetable request names none
    pub timetable_hours: Vec<u32>,
    /// Day keys used when a timetable request names none
    pub timetable_days: Vec<String>,
}

impl ApiState {
    pub fn from_config(config: &config::ApiConfig) -> Self {
        Self {
            timetable_hours: config.timetable_hours.clone(),
            timetable_days: config.timetable_days.clone(),
        }
    }
}

/// Builds the application router with all routes and layers
///
/// # Example
///
/// ```
/// use classplan_api::{app, config::ApiConfig};
///
/// let router = app(&ApiConfig::default());
/// # let _ = router;
/// ```
pub fn app(config: &config::ApiConfig) -> Router {
    let state = Arc::new(ApiState::from_config(config));

    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Schedule notation endpoints
        .merge(routes::schedule::routes())
        // Timetable and gap endpoints
        .merge(routes::timetable::routes())
        // Forecast and attendance endpoints
        .merge(routes::attendance::routes())
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(origins);

        app.layer(cors)
    } else {
        app
    };

    app.layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
        .layer(TraceLayer::new_for_http())
}

/// Starts the API server and serves until `shutdown` resolves
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `shutdown` - Future that completes when the server should stop
pub async fn start_server<F>(config: config::ApiConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = app(&config);

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}
