pub mod api;
pub mod forecast;
pub mod slot;
pub mod subject;
pub mod timetable;
