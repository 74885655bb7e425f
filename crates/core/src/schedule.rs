pub mod forecast;
pub mod gaps;
pub mod notation;
pub mod parser;
pub mod reminders;
pub mod timetable;

pub use forecast::{forecast_attendance, project_subject};
pub use gaps::find_gaps;
pub use notation::append_slot;
pub use parser::{parse_schedule, parse_subject, parse_subjects};
pub use reminders::classes_starting_at;
pub use timetable::{DEFAULT_DAYS, default_days, default_hours, project_timetable};
