mod attendance_test;
mod middleware_test;
mod schedule_test;
mod test_utils;
mod timetable_test;
