//! # ClassPlan Reminders
//!
//! Background task that tells the student when a class is starting. On every
//! tick it takes one snapshot of all subjects from a [`source::SubjectSource`],
//! finds the classes starting at the current weekday and hour, and sends a
//! [`scheduler::ClassReminder`] for each of them over a channel. Delivering the
//! notification is up to whoever holds the receiving end.
//!
//! Ticks are best effort. A tick that runs late is skipped rather than
//! replayed, and a failed snapshot only costs that tick.

/// Configuration loaded from the environment
pub mod config;
/// Timer loop, reminder checks and the task handle
pub mod scheduler;
/// Where subject schedules are read from
pub mod source;

pub use scheduler::{ClassReminder, Clock, LocalClock, ReminderChecker, ReminderHandle, spawn_reminders};
pub use source::{FileSubjectSource, SubjectSource};
