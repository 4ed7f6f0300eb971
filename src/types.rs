//! Shared types passed from the scan stage to rendering and CLI output.

use serde::Serialize;

/// A puzzle directory parsed from its `day_<n>_<words>` name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PuzzleRecord {
    /// Day number from the second name component
    pub day: u32,
    /// Remaining name components joined with spaces
    pub name: String,
    /// Original directory name, used for filesystem and link paths
    pub dirname: String,
}

/// A puzzle record joined with the languages found on disk for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
    #[serde(flatten)]
    pub record: PuzzleRecord,
    /// Recognized language subdirectories, ascending
    pub languages: Vec<String>,
}

/// Every puzzle day found under the calendar root, ascending by day number.
#[derive(Debug, Clone, Serialize)]
pub struct Calendar {
    pub days: Vec<Day>,
}

impl Calendar {
    /// Number of completed puzzle days.
    pub fn completed(&self) -> usize {
        self.days.len()
    }
}
