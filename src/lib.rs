//! # Advent Index
//!
//! Generates the `README.md` index of an Advent of Code solutions repository.
//! The filesystem is the data source: every `day_<n>_<title>` directory at the
//! calendar root is a solved puzzle, and every language subdirectory inside it
//! (`go/`, `python/`, `rust/`) is a solution that gets a badge.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan     calendar root  →  Calendar   (directory names → sorted days + languages)
//! 2. Render   Calendar       →  String     (markdown document)
//! 3. Write    String         →  README.md  (full overwrite)
//! ```
//!
//! Scanning and rendering are independent so rendering can be tested on
//! hand-built calendars, and so `check` can compare a fresh render against
//! the committed README without writing it.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `day_<n>_<words>` directory name parser and day sort |
//! | [`scan`] | Lists puzzle directories, detects languages, rejects duplicate days |
//! | [`render`] | Progress percentage, markdown document, output file |
//! | [`config`] | `index.toml` loading over stock defaults (year, badges, entry points) |
//! | [`types`] | `PuzzleRecord`, `Day`, `Calendar` |
//! | [`output`] | CLI report formatting |
//!
//! # Design Decisions
//!
//! ## Duplicate Days Are Errors
//!
//! Two directories parsing to the same day number (`day_4_a`, `Day_4_b`)
//! stop the scan with [`scan::ScanError::DuplicateDay`]. Picking one of them
//! would make the README depend on directory listing order.
//!
//! ## Half-to-Even Progress
//!
//! [`render::compute_progress`] rounds exact halves to the even neighbour.
//! With the stock 25-day calendar every percentage is an integer, so the rule
//! only matters for custom `total_days`.

pub mod config;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
