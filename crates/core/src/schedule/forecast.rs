//! # Attendance Forecast Engine
//!
//! Projects each subject's attendance to the end of a future window under the
//! worst case: every class held in the window is counted as missed. Subjects
//! whose projected percentage falls under [`ATTENDANCE_THRESHOLD`] are
//! reported.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::models::{
    forecast::{DateRange, ForecastAlert, Projection},
    slot::ScheduleSlot,
    subject::{ATTENDANCE_THRESHOLD, SubjectAttendance, round_one_decimal},
};

use super::parser::parse_schedule;

/// Reports every subject projected to drop below the threshold over
/// `start..=end`, in subject order. An empty window (`end < start`) yields no
/// alerts.
pub fn forecast_attendance(
    subjects: &[SubjectAttendance],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<ForecastAlert> {
    let range = DateRange { start, end };

    subjects
        .iter()
        .filter_map(|subject| project_subject(subject, &range))
        .filter(|projection| projection.projected_percentage < ATTENDANCE_THRESHOLD)
        .map(|projection| ForecastAlert {
            label: projection.label,
            projected_percentage: projection.projected_percentage,
            upcoming_classes: projection.upcoming_classes,
        })
        .collect()
}

/// Worst-case projection for one subject.
///
/// Returns `None` when no class of the subject falls inside the window, since
/// its percentage would not change, or when the class counts overflow `u32`.
pub fn project_subject(subject: &SubjectAttendance, range: &DateRange) -> Option<Projection> {
    let slots = parse_schedule(&subject.schedule);
    let Some(upcoming_classes) = count_classes(&slots, range) else {
        warn!(label = %subject.label, "Too many classes in forecast window, skipping");
        return None;
    };
    if upcoming_classes == 0 {
        return None;
    }
    let Some(future_total) = subject.total_classes.checked_add(upcoming_classes) else {
        warn!(
            label = %subject.label,
            total_classes = subject.total_classes,
            upcoming_classes,
            "Class total overflows, skipping"
        );
        return None;
    };

    let projected_percentage =
        round_one_decimal(f64::from(subject.attended) / f64::from(future_total) * 100.0);

    debug!(
        label = %subject.label,
        upcoming_classes,
        future_total,
        projected_percentage,
        "Projected attendance"
    );

    Some(Projection {
        label: subject.label.clone(),
        upcoming_classes,
        future_total,
        projected_percentage,
    })
}

/// Number of slot occurrences on the dates of `range`, or `None` when it does
/// not fit a `u32`.
///
/// Every full week holds each slot once, so only the trailing partial week is
/// walked day by day.
fn count_classes(slots: &[ScheduleSlot], range: &DateRange) -> Option<u32> {
    if range.end < range.start || slots.is_empty() {
        return Some(0);
    }

    let days = u64::try_from((range.end - range.start).num_days()).ok()? + 1;
    let full_weeks = days / 7;
    let remainder: u64 = std::iter::successors(Some(range.start.weekday()), |day| Some(day.succ()))
        .take((days % 7) as usize)
        .map(|weekday| slots.iter().filter(|slot| slot.day == weekday).count() as u64)
        .sum();

    let total = full_weeks
        .checked_mul(slots.len() as u64)?
        .checked_add(remainder)?;
    u32::try_from(total).ok()
}
