use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::forecast::{ForecastAlert, Gap};
use super::slot::{ScheduleSlot, SlotKind};
use super::subject::{BunkStatus, SubjectAttendance, SubjectSchedule};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseScheduleRequest {
    pub raw: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseScheduleResponse {
    pub slots: Vec<ScheduleSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendSlotRequest {
    #[serde(default)]
    pub raw: String,
    pub day: Weekday,
    pub start: u32,
    pub end: u32,
    #[serde(default)]
    pub kind: SlotKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppendSlotResponse {
    pub raw: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableRequest {
    #[serde(default)]
    pub subjects: Vec<SubjectSchedule>,
    /// Hours to lay out, defaults to 8..=18
    pub hours: Option<Vec<u32>>,
    /// Day keys to lay out, defaults to Mon..Fri
    pub days: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapsRequest {
    #[serde(default)]
    pub subjects: Vec<SubjectSchedule>,
    pub weekday: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapsResponse {
    pub gaps: Vec<Gap>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    #[serde(default)]
    pub subjects: Vec<SubjectAttendance>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub alerts: Vec<ForecastAlert>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceStatusRequest {
    pub attended: u32,
    pub total_classes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceStatusResponse {
    pub percentage: f64,
    pub status: BunkStatus,
    pub message: String,
}
