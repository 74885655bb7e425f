pub mod attendance;
pub mod schedule;
pub mod timetable;
