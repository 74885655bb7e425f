use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum attendance percentage a student has to keep
pub const ATTENDANCE_THRESHOLD: f64 = 75.0;

/// A subject's label together with its raw schedule text.
///
/// The label is opaque to the engine; it is only copied onto whatever the
/// engine derives from the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSchedule {
    pub label: String,
    #[serde(default)]
    pub schedule: String,
}

impl SubjectSchedule {
    pub fn new(label: impl Into<String>, schedule: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            schedule: schedule.into(),
        }
    }
}

/// A subject with its attendance counters, as needed by the forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectAttendance {
    pub label: String,
    #[serde(default)]
    pub attended: u32,
    #[serde(default)]
    pub total_classes: u32,
    #[serde(default)]
    pub schedule: String,
}

impl SubjectAttendance {
    pub fn new(
        label: impl Into<String>,
        attended: u32,
        total_classes: u32,
        schedule: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            attended,
            total_classes,
            schedule: schedule.into(),
        }
    }

    /// Current attendance, `100.0` before the first class
    pub fn attendance_percentage(&self) -> f64 {
        attendance_percentage(self.attended, self.total_classes)
    }

    pub fn bunk_status(&self) -> BunkStatus {
        BunkStatus::from_counts(self.attended, self.total_classes)
    }

    /// Marks one more class as held, attended or not
    pub fn record_attendance(&mut self, present: bool) {
        if present {
            self.attended += 1;
        }
        self.total_classes += 1;
    }
}

/// How much room a subject's attendance leaves above the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "classes", rename_all = "snake_case")]
pub enum BunkStatus {
    NoClasses,
    SafeToBunk(u32),
    DontMissNext,
    AttendNext(u32),
}

impl BunkStatus {
    pub fn from_counts(attended: u32, total_classes: u32) -> Self {
        if total_classes == 0 {
            return BunkStatus::NoClasses;
        }

        let attended_f = f64::from(attended);
        let total_f = f64::from(total_classes);

        if attendance_percentage(attended, total_classes) >= ATTENDANCE_THRESHOLD {
            let bunks = (attended_f / 0.75 - total_f).floor();
            if bunks > 0.0 {
                BunkStatus::SafeToBunk(bunks as u32)
            } else {
                BunkStatus::DontMissNext
            }
        } else {
            // attended + n >= 0.75 * (total + n)  <=>  n >= 3 * total - 4 * attended
            let needed = 3 * u64::from(total_classes) - 4 * u64::from(attended);
            BunkStatus::AttendNext(needed as u32)
        }
    }
}

impl fmt::Display for BunkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BunkStatus::NoClasses => write!(f, "No classes yet."),
            BunkStatus::SafeToBunk(n) => write!(f, "Safe to bunk {}", n),
            BunkStatus::DontMissNext => write!(f, "Don't miss next!"),
            BunkStatus::AttendNext(n) => write!(f, "Attend next {}!", n),
        }
    }
}

pub fn attendance_percentage(attended: u32, total_classes: u32) -> f64 {
    if total_classes == 0 {
        return 100.0;
    }
    round_one_decimal(f64::from(attended) / f64::from(total_classes) * 100.0)
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
