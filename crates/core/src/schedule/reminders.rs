use chrono::Weekday;

use crate::models::{slot::TaggedSlot, subject::SubjectSchedule};

use super::parser::parse_subjects;

/// Slots of any subject that start on `weekday` at `hour`, in subject order
pub fn classes_starting_at(subjects: &[SubjectSchedule], weekday: Weekday, hour: u32) -> Vec<TaggedSlot> {
    parse_subjects(subjects)
        .into_iter()
        .filter(|tagged| tagged.slot.day == weekday && tagged.slot.start_hour() == hour)
        .collect()
}
