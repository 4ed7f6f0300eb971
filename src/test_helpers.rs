//! Shared test utilities for the advent-index test suite.
//!
//! Builds calendar trees in temp directories and looks up days in a scanned
//! [`Calendar`].
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_calendar(&[
//!     ("day_1_trebuchet", &["python"]),
//!     ("day_2_cube_conundrum", &["go", "rust"]),
//! ]);
//! let calendar = scan(tmp.path(), &IndexConfig::default()).unwrap();
//!
//! assert_eq!(day_numbers(&calendar), vec![1, 2]);
//! assert_eq!(find_day(&calendar, 2).languages, vec!["go", "rust"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{Calendar, Day};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/calendar/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/calendar");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Build a calendar root from `(directory, subdirectories)` pairs.
///
/// Each subdirectory is created empty; entry point files are never checked.
pub fn setup_calendar(puzzles: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (dirname, subdirs) in puzzles {
        let puzzle_dir = tmp.path().join(dirname);
        std::fs::create_dir_all(&puzzle_dir).unwrap();
        for sub in *subdirs {
            std::fs::create_dir_all(puzzle_dir.join(sub)).unwrap();
        }
    }
    tmp
}

// =========================================================================
// Calendar lookups
// =========================================================================

/// Find a day by number. Panics if not found.
pub fn find_day(calendar: &Calendar, day: u32) -> &Day {
    calendar
        .days
        .iter()
        .find(|d| d.record.day == day)
        .unwrap_or_else(|| panic!("day {day} not found. Available: {:?}", day_numbers(calendar)))
}

/// All day numbers in calendar order.
pub fn day_numbers(calendar: &Calendar) -> Vec<u32> {
    calendar.days.iter().map(|d| d.record.day).collect()
}
