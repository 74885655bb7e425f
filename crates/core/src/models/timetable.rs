use serde::{Deserialize, Serialize};

/// One hour of the week grid, with a cell per configured day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableRow {
    pub hour: u32,
    pub cells: Vec<Option<String>>,
}

/// A day x hour grid mapping each cell to the subject occupying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    pub days: Vec<String>,
    pub rows: Vec<TimetableRow>,
}

impl Timetable {
    /// Creates an empty grid for the given hours and day keys
    pub fn empty(hours: &[u32], days: &[String]) -> Self {
        Self {
            days: days.to_vec(),
            rows: hours
                .iter()
                .map(|&hour| TimetableRow {
                    hour,
                    cells: vec![None; days.len()],
                })
                .collect(),
        }
    }

    /// Label in the cell at `hour` for the day key `day`
    pub fn cell(&self, hour: u32, day: &str) -> Option<&str> {
        let column = self.days.iter().position(|d| d == day)?;
        self.rows
            .iter()
            .find(|row| row.hour == hour)
            .and_then(|row| row.cells[column].as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.rows
            .iter()
            .all(|row| row.cells.iter().all(Option::is_none))
    }

    pub(crate) fn assign(&mut self, hour: u32, column: usize, label: &str) {
        for row in self.rows.iter_mut().filter(|row| row.hour == hour) {
            row.cells[column] = Some(label.to_string());
        }
    }
}

/// The two grids of the week, split by class kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetables {
    pub theory: Timetable,
    pub lab: Timetable,
}
