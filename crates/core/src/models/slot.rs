use std::fmt;
use std::ops::Range;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Category of a class, deciding which timetable grid it lands in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    #[default]
    Theory,
    Lab,
}

impl SlotKind {
    /// Reads the `:KIND` suffix of a ranged descriptor. Unknown codes fall back to theory.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "L" | "LAB" => SlotKind::Lab,
            _ => SlotKind::Theory,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            SlotKind::Theory => "T",
            SlotKind::Lab => "L",
        }
    }
}

/// When a slot happens within its day.
///
/// The legacy notation (`MON 2PM`) only names a starting hour and has no
/// duration, while the ranged notation (`MON 14-16`) names a half-open hour
/// range. Keeping both as distinct variants means consumers that need a
/// duration, like the gap finder, have to say so explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "notation", rename_all = "snake_case")]
pub enum SlotTime {
    /// Legacy `DAY HH(AM|PM)` slot, occupying exactly one hour cell
    Single { hour: u32 },
    /// Ranged `DAY HH-HH` slot covering `[start, end)`
    Ranged { start: u32, end: u32 },
}

impl SlotTime {
    pub fn start_hour(&self) -> u32 {
        match *self {
            SlotTime::Single { hour } => hour,
            SlotTime::Ranged { start, .. } => start,
        }
    }

    /// Explicit end hour, absent for legacy slots
    pub fn end_hour(&self) -> Option<u32> {
        match *self {
            SlotTime::Single { .. } => None,
            SlotTime::Ranged { end, .. } => Some(end),
        }
    }

    /// Hours whose grid cell this slot occupies
    pub fn occupied_hours(&self) -> Range<u32> {
        match *self {
            SlotTime::Single { hour } => hour..hour.saturating_add(1),
            SlotTime::Ranged { start, end } => start..end,
        }
    }
}

/// One recurring weekly class occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub day: Weekday,
    #[serde(flatten)]
    pub time: SlotTime,
    #[serde(default)]
    pub kind: SlotKind,
}

impl ScheduleSlot {
    pub fn single(day: Weekday, hour: u32) -> Self {
        Self {
            day,
            time: SlotTime::Single { hour },
            kind: SlotKind::Theory,
        }
    }

    pub fn ranged(day: Weekday, start: u32, end: u32, kind: SlotKind) -> Self {
        Self {
            day,
            time: SlotTime::Ranged { start, end },
            kind,
        }
    }

    pub fn start_hour(&self) -> u32 {
        self.time.start_hour()
    }

    pub fn end_hour(&self) -> Option<u32> {
        self.time.end_hour()
    }

    /// Upper-case three letter code used by the notation, e.g. `MON`
    pub fn day_code(&self) -> &'static str {
        day_code(self.day)
    }
}

/// Renders the slot back into schedule notation
impl fmt::Display for ScheduleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time {
            SlotTime::Single { hour } => write!(f, "{} {}", self.day_code(), hour),
            SlotTime::Ranged { start, end } => write!(
                f,
                "{} {}-{}:{}",
                self.day_code(),
                start,
                end,
                self.kind.code()
            ),
        }
    }
}

/// A parsed slot together with the label of the subject it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSlot {
    pub label: String,
    #[serde(flatten)]
    pub slot: ScheduleSlot,
}

/// Days recognized by the notation, in the order the parser tries them
pub const NOTATION_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn day_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}

/// Loose day-key comparison used by the grid and gap views.
///
/// A key matches when it contains the slot's code (`"Mon"`, `"MONDAY"`) or is
/// a shorter prefix of it naming no other day (`"MO"`, `"TH"`). Ambiguous
/// prefixes such as `"T"` or `"S"` match nothing.
pub fn day_key_matches(key: &str, day: Weekday) -> bool {
    let key = key.trim().to_uppercase();
    if key.is_empty() {
        return false;
    }
    let code = day_code(day);
    if key.contains(code) {
        return true;
    }
    code.starts_with(&key)
        && NOTATION_DAYS
            .iter()
            .filter(|other| day_code(**other).starts_with(&key))
            .count()
            == 1
}
