//! # Schedule Notation Parser
//!
//! A subject's schedule is a comma-separated list of slot descriptors written
//! in one of two notations:
//!
//! - **Ranged**: `DAY START-END[:KIND]` with 24-hour hours and an optional kind
//!   code (`T` for theory, `L` for lab), e.g. `MON 9-11:L`
//! - **Legacy**: `DAY HH[AM|PM]`, a single starting hour, e.g. `WED 2PM`
//!
//! Parsing never fails. A segment that matches neither notation produces no
//! slot and the rest of the schedule is still read.

use std::sync::LazyLock;

use chrono::Weekday;
use regex::Regex;
use tracing::debug;

use crate::models::{
    slot::{NOTATION_DAYS, ScheduleSlot, SlotKind, TaggedSlot, day_code},
    subject::SubjectSchedule,
};

static RE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*-\s*(\d+)(?:\s*:\s*([A-Z]+))?").expect("valid range regex")
});
static RE_HOUR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid hour regex"));

/// Latest hour a ranged descriptor may name
const LAST_HOUR: u32 = 23;

/// Parses a raw schedule string into its slots, in input order
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use classplan_core::models::slot::{ScheduleSlot, SlotKind};
/// use classplan_core::schedule::parse_schedule;
///
/// let slots = parse_schedule("MON 9-11:L, WED 2PM");
/// assert_eq!(
///     slots,
///     vec![
///         ScheduleSlot::ranged(Weekday::Mon, 9, 11, SlotKind::Lab),
///         ScheduleSlot::single(Weekday::Wed, 14),
///     ]
/// );
/// ```
pub fn parse_schedule(raw: &str) -> Vec<ScheduleSlot> {
    raw.split(',').filter_map(parse_segment).collect()
}

/// Parses one subject's schedule and tags every slot with the subject label
pub fn parse_subject(subject: &SubjectSchedule) -> Vec<TaggedSlot> {
    parse_schedule(&subject.schedule)
        .into_iter()
        .map(|slot| TaggedSlot {
            label: subject.label.clone(),
            slot,
        })
        .collect()
}

/// Parses every subject, keeping subject order and then slot order
pub fn parse_subjects(subjects: &[SubjectSchedule]) -> Vec<TaggedSlot> {
    subjects.iter().flat_map(parse_subject).collect()
}

/// Reads a single comma-delimited segment
pub fn parse_segment(segment: &str) -> Option<ScheduleSlot> {
    let segment = segment.trim().to_uppercase();
    if segment.is_empty() {
        return None;
    }

    let Some(day) = find_day(&segment) else {
        debug!(segment = %segment, "Dropping schedule segment without a day");
        return None;
    };

    if let Some(captures) = RE_RANGE.captures(&segment) {
        return parse_range(&segment, day, &captures);
    }

    let slot = parse_legacy(&segment, day);
    if slot.is_none() {
        debug!(segment = %segment, "Dropping schedule segment without an hour");
    }
    slot
}

/// First notation day whose code appears anywhere in the segment
fn find_day(segment: &str) -> Option<Weekday> {
    NOTATION_DAYS
        .into_iter()
        .find(|day| segment.contains(day_code(*day)))
}

fn parse_range(segment: &str, day: Weekday, captures: &regex::Captures<'_>) -> Option<ScheduleSlot> {
    let start = captures[1].parse::<u32>().ok();
    let end = captures[2].parse::<u32>().ok();
    let kind = captures
        .get(3)
        .map(|code| SlotKind::from_code(code.as_str()))
        .unwrap_or_default();

    match (start, end) {
        (Some(start), Some(end)) if start <= end && end <= LAST_HOUR => {
            Some(ScheduleSlot::ranged(day, start, end, kind))
        }
        _ => {
            debug!(segment = %segment, "Dropping malformed hour range");
            None
        }
    }
}

fn parse_legacy(segment: &str, day: Weekday) -> Option<ScheduleSlot> {
    let hour = RE_HOUR.find(segment)?.as_str().parse::<u32>().ok()?;
    let hour = if segment.contains("PM") && hour != 12 {
        hour.checked_add(12)?
    } else {
        hour
    };
    Some(ScheduleSlot::single(day, hour))
}
