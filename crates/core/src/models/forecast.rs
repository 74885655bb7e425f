use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{PlanError, PlanResult};

/// Inclusive range of calendar dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Builds a range, rejecting one that ends before it starts
    pub fn new(start: NaiveDate, end: NaiveDate) -> PlanResult<Self> {
        if end < start {
            return Err(PlanError::Validation(format!(
                "Date range ends ({}) before it starts ({})",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Every date of the range in order. Yields nothing when `end < start`.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }
}

/// Projection of one subject's attendance over a forecast window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub label: String,
    /// Classes held in the window, all assumed missed
    pub upcoming_classes: u32,
    pub future_total: u32,
    pub projected_percentage: f64,
}

/// A subject projected to fall below the attendance threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastAlert {
    pub label: String,
    pub projected_percentage: f64,
    pub upcoming_classes: u32,
}

/// A free interval between two consecutive classes of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    pub start: u32,
    pub end: u32,
}
