//! Calendar root scanning.
//!
//! The calendar root holds one directory per solved puzzle, next to whatever
//! tooling and documentation the repository carries:
//!
//! ```text
//! advent-of-code-2023/             # Calendar root
//! ├── index.toml                   # Index config (optional)
//! ├── README.md                    # Generated index (overwritten)
//! ├── docs/                        # Not a puzzle: ignored
//! ├── day_1_trebuchet/
//! │   └── python/                  # Recognized language → badge
//! │       └── main.py
//! └── day_2_cube_conundrum/
//!     ├── go/
//!     │   └── main.go
//!     ├── rust/
//!     │   └── src/main.rs
//!     └── notes/                   # Unrecognized subdirectory: ignored
//! ```
//!
//! ## Rules
//!
//! - Only directories are considered; files at the root are skipped.
//! - Directory names are parsed with [`naming::parse_and_sort`].
//! - Two directories with the same day number are an error.
//! - A puzzle's languages are its subdirectories named after a configured
//!   language id, sorted ascending. Entry point files are not checked.

use crate::config::IndexConfig;
use crate::naming;
use crate::types::{Calendar, Day};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Duplicate day number {0}: {1} and {2}")]
    DuplicateDay(u32, String, String),
}

/// Scan the calendar at `root` into ascending puzzle days.
pub fn scan(root: &Path, config: &IndexConfig) -> Result<Calendar, ScanError> {
    let dirnames = list_subdirs(root)?;
    let records = naming::parse_and_sort(&dirnames);

    let mut seen: BTreeMap<u32, &str> = BTreeMap::new();
    for record in &records {
        if let Some(first) = seen.insert(record.day, &record.dirname) {
            return Err(ScanError::DuplicateDay(
                record.day,
                first.to_string(),
                record.dirname.clone(),
            ));
        }
    }

    let days = records
        .into_iter()
        .map(|record| {
            let languages = detect_languages(&root.join(&record.dirname), config)?;
            Ok(Day { record, languages })
        })
        .collect::<Result<Vec<_>, ScanError>>()?;

    Ok(Calendar { days })
}

/// Recognized language ids among the subdirectories of `puzzle_dir`, ascending.
///
/// A missing puzzle directory has no languages.
pub fn detect_languages(
    puzzle_dir: &Path,
    config: &IndexConfig,
) -> Result<Vec<String>, ScanError> {
    if !puzzle_dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut languages: Vec<String> = list_subdirs(puzzle_dir)?
        .into_iter()
        .filter(|name| config.languages.contains_key(name))
        .collect();
    languages.sort();
    Ok(languages)
}

/// Names of the immediate subdirectories of `path`, sorted.
///
/// Names that aren't valid UTF-8 can't be puzzle or language directories
/// and are skipped.
fn list_subdirs(path: &Path) -> Result<Vec<String>, ScanError> {
    let mut names = Vec::new();
    for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}
