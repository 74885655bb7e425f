//! # Reminder Configuration
//!
//! ## Environment Variables
//!
//! - `REMINDER_SUBJECTS_FILE`: JSON file with the subjects to watch (required)
//! - `REMINDER_INTERVAL_SECONDS`: Seconds between checks (default: 60)
//! - `REMINDER_CHANNEL_CAPACITY`: Reminders buffered before new ones are dropped (default: 32)

use eyre::{Result, WrapErr, eyre};
use std::{env, path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct ReminderConfig {
    /// File the subject snapshot is read from on every tick
    pub subjects_file: PathBuf,
    /// Time between two checks
    pub interval: Duration,
    /// Capacity of the reminder channel
    pub channel_capacity: usize,
}

impl ReminderConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let subjects_file = lookup("REMINDER_SUBJECTS_FILE")
            .map(PathBuf::from)
            .ok_or_else(|| eyre!("REMINDER_SUBJECTS_FILE environment variable not set"))?;

        let interval_secs: u64 = match lookup("REMINDER_INTERVAL_SECONDS") {
            Some(secs) => secs
                .parse()
                .wrap_err("REMINDER_INTERVAL_SECONDS must be a whole number of seconds")?,
            None => 60,
        };
        if interval_secs == 0 {
            return Err(eyre!("REMINDER_INTERVAL_SECONDS must be at least 1"));
        }

        let channel_capacity = lookup("REMINDER_CHANNEL_CAPACITY")
            .and_then(|capacity| capacity.parse::<usize>().ok())
            .filter(|capacity| *capacity > 0)
            .unwrap_or(32);

        Ok(Self {
            subjects_file,
            interval: Duration::from_secs(interval_secs),
            channel_capacity,
        })
    }
}
