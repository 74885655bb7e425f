//! # ClassPlan Core
//!
//! The core crate holds the schedule engine of the ClassPlan academic planner.
//! Every subject carries a compact, error-tolerant schedule string such as
//! `"MON 9-11:L, WED 14-15, FRI 2PM"`. This crate turns those strings into
//! structured slots and derives everything the planner shows from them.
//!
//! ## Components
//!
//! - **Parser** ([`schedule::parser`]): raw schedule text into [`models::slot::ScheduleSlot`]s
//! - **Timetable** ([`schedule::timetable`]): day x hour grids for theory and lab classes
//! - **Gaps** ([`schedule::gaps`]): free intervals between the classes of one day
//! - **Forecast** ([`schedule::forecast`]): worst-case attendance over a future window
//! - **Notation** ([`schedule::notation`]): appending new slot descriptors to a schedule
//! - **Reminders** ([`schedule::reminders`]): which classes start at a given hour
//!
//! Every operation is a pure function of its inputs. Nothing is cached and
//! nothing is persisted here; the raw schedule string owned by the caller is
//! the single source of truth.

/// Error types shared across the workspace
pub mod errors;
/// Domain and request/response types
pub mod models;
/// Schedule parsing and the derived views
pub mod schedule;
