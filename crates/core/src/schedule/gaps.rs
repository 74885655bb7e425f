//! # Daily Gap Finder
//!
//! Reports the free intervals between one day's classes. Only ranged slots
//! take part, since a legacy single-hour slot has no end to measure from.

use crate::models::{
    forecast::Gap,
    slot::{SlotTime, day_key_matches},
    subject::SubjectSchedule,
};

use super::parser::parse_subjects;

/// Finds the gaps between consecutive classes on `weekday`.
///
/// `weekday` is matched loosely, so `"Mon"`, `"MONDAY"` and `"mo"` all select
/// Monday. Classes are ordered by start hour (ties keep input order) and a gap
/// is reported whenever the next class starts strictly after the current one
/// ends. Time before the first class and after the last is not a gap.
pub fn find_gaps(subjects: &[SubjectSchedule], weekday: &str) -> Vec<Gap> {
    let mut ranges: Vec<(u32, u32)> = parse_subjects(subjects)
        .into_iter()
        .filter(|tagged| day_key_matches(weekday, tagged.slot.day))
        .filter_map(|tagged| match tagged.slot.time {
            SlotTime::Ranged { start, end } => Some((start, end)),
            SlotTime::Single { .. } => None,
        })
        .collect();

    // stable: equal starts keep schedule order
    ranges.sort_by_key(|&(start, _)| start);

    ranges
        .windows(2)
        .filter_map(|pair| {
            let (_, current_end) = pair[0];
            let (next_start, _) = pair[1];
            (next_start > current_end).then_some(Gap {
                start: current_end,
                end: next_start,
            })
        })
        .collect()
}
