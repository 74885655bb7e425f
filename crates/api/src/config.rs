//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the ClassPlan API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! The following environment variables are used:
//!
//! - `API_HOST`: The host address to bind the server to (default: "127.0.0.1")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `TIMETABLE_HOURS`: Default grid hours as `FIRST-LAST` (default: "8-18")
//! - `TIMETABLE_DAYS`: Default grid day keys, comma-separated (default: "Mon,Tue,Wed,Thu,Fri")

use eyre::{Result, WrapErr, eyre};
use std::env;
use tracing::Level;

use classplan_core::schedule::{default_days, default_hours};

/// Configuration for the ClassPlan API server
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use classplan_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Hours laid out when a timetable request names none
    pub timetable_hours: Vec<u32>,

    /// Day keys laid out when a timetable request names none
    pub timetable_days: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            timetable_hours: default_hours(),
            timetable_days: default_days(),
        }
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - The TIMETABLE_HOURS value is not a `FIRST-LAST` range
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, environment or not
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        // Network settings
        let host = lookup("API_HOST").unwrap_or(defaults.host);
        let port = match lookup("API_PORT") {
            Some(port) => port.parse::<u16>().wrap_err("Invalid API_PORT value")?,
            None => defaults.port,
        };

        // Logging settings
        let log_level = lookup("LOG_LEVEL")
            .map(|level| parse_log_level(&level))
            .unwrap_or(defaults.log_level);

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|timeout| timeout.parse().ok())
            .unwrap_or(defaults.request_timeout);

        // Timetable defaults
        let timetable_hours = match lookup("TIMETABLE_HOURS") {
            Some(hours) => parse_hour_range(&hours)?,
            None => defaults.timetable_hours,
        };
        let timetable_days = lookup("TIMETABLE_DAYS")
            .map(|days| {
                days.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|days| !days.is_empty())
            .unwrap_or(defaults.timetable_days);

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            timetable_hours,
            timetable_days,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level, falling back to INFO
pub fn parse_log_level(level: &str) -> Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn parse_hour_range(value: &str) -> Result<Vec<u32>> {
    let (first, last) = value
        .split_once('-')
        .ok_or_else(|| eyre!("TIMETABLE_HOURS must look like FIRST-LAST, got {:?}", value))?;
    let first: u32 = first.trim().parse().wrap_err("Invalid TIMETABLE_HOURS start")?;
    let last: u32 = last.trim().parse().wrap_err("Invalid TIMETABLE_HOURS end")?;

    if first > last || last > 23 {
        return Err(eyre!("TIMETABLE_HOURS range {} is out of order or past 23", value));
    }

    Ok((first..=last).collect())
}
