//! # Weekly Timetable Projector
//!
//! Lays every subject's slots onto two day x hour grids, one for theory
//! classes and one for labs. Grids are built fresh on every call.
//!
//! Cells are assigned in subject order and then slot order, and a later
//! assignment silently replaces an earlier one. Clashing classes are not
//! reported; the grid just shows whichever subject came last.

use tracing::trace;

use crate::models::{
    slot::{SlotKind, day_key_matches},
    subject::SubjectSchedule,
    timetable::{Timetable, Timetables},
};

use super::parser::parse_subjects;

/// Day keys used when the caller does not choose any
pub const DEFAULT_DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

/// 8:00 through the 18:00 row
pub fn default_hours() -> Vec<u32> {
    (8..=18).collect()
}

pub fn default_days() -> Vec<String> {
    DEFAULT_DAYS.iter().map(|day| day.to_string()).collect()
}

/// Builds the theory and lab grids for `subjects` over `hours` x `days`
pub fn project_timetable(subjects: &[SubjectSchedule], hours: &[u32], days: &[String]) -> Timetables {
    let mut theory = Timetable::empty(hours, days);
    let mut lab = Timetable::empty(hours, days);

    for tagged in parse_subjects(subjects) {
        let grid = match tagged.slot.kind {
            SlotKind::Theory => &mut theory,
            SlotKind::Lab => &mut lab,
        };

        let columns: Vec<usize> = days
            .iter()
            .enumerate()
            .filter(|(_, key)| day_key_matches(key, tagged.slot.day))
            .map(|(column, _)| column)
            .collect();

        for hour in tagged.slot.time.occupied_hours() {
            if !hours.contains(&hour) {
                continue;
            }
            for &column in &columns {
                trace!(label = %tagged.label, hour, day = %days[column], "Assigning timetable cell");
                grid.assign(hour, column, &tagged.label);
            }
        }
    }

    Timetables { theory, lab }
}
