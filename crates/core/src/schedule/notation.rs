use chrono::Weekday;

use crate::errors::{PlanError, PlanResult};
use crate::models::slot::{ScheduleSlot, SlotKind};

/// Appends a ranged slot descriptor to a raw schedule.
///
/// The existing text is kept exactly as it is and the new descriptor is
/// joined with `", "`, so slots written earlier keep parsing the same way.
///
/// # Errors
///
/// * `PlanError::Validation` - `start > end` or `end` past hour 23
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use classplan_core::models::slot::SlotKind;
/// use classplan_core::schedule::append_slot;
///
/// let raw = append_slot("MON 9-11:L", Weekday::Wed, 14, 15, SlotKind::Theory).unwrap();
/// assert_eq!(raw, "MON 9-11:L, WED 14-15:T");
/// ```
pub fn append_slot(
    raw: &str,
    day: Weekday,
    start: u32,
    end: u32,
    kind: SlotKind,
) -> PlanResult<String> {
    if start > end {
        return Err(PlanError::Validation(format!(
            "Slot starts at {} but ends at {}",
            start, end
        )));
    }
    if end > 23 {
        return Err(PlanError::Validation(format!(
            "Slot end hour {} is past 23",
            end
        )));
    }

    let descriptor = ScheduleSlot::ranged(day, start, end, kind).to_string();
    if raw.trim().is_empty() {
        Ok(descriptor)
    } else {
        Ok(format!("{}, {}", raw, descriptor))
    }
}
