//! CLI output formatting.
//!
//! Every command reports on stdout. Each report has a pure `format_*`
//! function returning lines (for testability) and a `print_*` wrapper.
//!
//! ## Scan
//!
//! ```text
//! Days
//! 001 trebuchet
//!     Source: day_1_trebuchet/
//!     Solutions: python
//! 002 cube conundrum
//!     Source: day_2_cube_conundrum/
//!     Solutions: go, rust
//!
//! Completed 2 of 25 (8%)
//! ```
//!
//! ## Build
//!
//! ```text
//! Wrote ../README.md (2 days, 3 solutions)
//! ```

use crate::config::IndexConfig;
use crate::render::compute_progress;
use crate::types::Calendar;
use std::path::Path;

/// Format a day number as 3-digit zero-padded.
fn format_index(day: u32) -> String {
    format!("{:0>3}", day)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Total number of language solutions across all days.
fn solution_count(calendar: &Calendar) -> usize {
    calendar.days.iter().map(|d| d.languages.len()).sum()
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Scan report: one entry per day with its source directory and languages.
pub fn format_scan_output(calendar: &Calendar, config: &IndexConfig) -> Vec<String> {
    let mut lines = vec!["Days".to_string()];
    for day in &calendar.days {
        let title = if day.record.name.is_empty() {
            "(untitled)"
        } else {
            day.record.name.as_str()
        };
        lines.push(format!("{} {}", format_index(day.record.day), title));
        lines.push(format!("{}Source: {}/", indent(1), day.record.dirname));
        if day.languages.is_empty() {
            lines.push(format!("{}Solutions: none", indent(1)));
        } else {
            lines.push(format!(
                "{}Solutions: {}",
                indent(1),
                day.languages.join(", ")
            ));
        }
    }
    lines.push(String::new());
    lines.push(format_progress(calendar, config));
    lines
}

fn format_progress(calendar: &Calendar, config: &IndexConfig) -> String {
    let completed = calendar.completed();
    let total = config.total_days as usize;
    format!(
        "Completed {} of {} ({}%)",
        completed,
        total,
        compute_progress(completed, total)
    )
}

/// One-line build summary.
pub fn format_build_output(calendar: &Calendar, output: &Path) -> Vec<String> {
    vec![format!(
        "Wrote {} ({}, {})",
        output.display(),
        plural(calendar.completed(), "day"),
        plural(solution_count(calendar), "solution")
    )]
}

/// Drift check result.
pub fn format_check_output(output: &Path, current: bool) -> Vec<String> {
    if current {
        vec![format!("{} is up to date", output.display())]
    } else {
        vec![
            format!("{} is stale", output.display()),
            format!("{}Run `advent-index build` to regenerate it", indent(1)),
        ]
    }
}

pub fn print_scan_output(calendar: &Calendar, config: &IndexConfig) {
    for line in format_scan_output(calendar, config) {
        println!("{}", line);
    }
}

pub fn print_build_output(calendar: &Calendar, output: &Path) {
    for line in format_build_output(calendar, output) {
        println!("{}", line);
    }
}

pub fn print_check_output(output: &Path, current: bool) {
    for line in format_check_output(output, current) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Day, PuzzleRecord};

    fn day(n: u32, name: &str, languages: &[&str]) -> Day {
        Day {
            record: PuzzleRecord {
                day: n,
                name: name.to_string(),
                dirname: format!("day_{n}_{}", name.replace(' ', "_")),
            },
            languages: languages.iter().map(|l| l.to_string()).collect(),
        }
    }

    fn calendar() -> Calendar {
        Calendar {
            days: vec![
                day(1, "trebuchet", &["python"]),
                day(2, "cube conundrum", &["go", "rust"]),
            ],
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(25), "025");
    }

    #[test]
    fn scan_output_lists_days() {
        let lines = format_scan_output(&calendar(), &IndexConfig::default());
        assert_eq!(
            lines,
            vec![
                "Days",
                "001 trebuchet",
                "    Source: day_1_trebuchet/",
                "    Solutions: python",
                "002 cube conundrum",
                "    Source: day_2_cube_conundrum/",
                "    Solutions: go, rust",
                "",
                "Completed 2 of 25 (8%)",
            ]
        );
    }

    #[test]
    fn scan_output_untitled_day_without_solutions() {
        let calendar = Calendar {
            days: vec![Day {
                record: PuzzleRecord {
                    day: 7,
                    name: String::new(),
                    dirname: "day_7".to_string(),
                },
                languages: vec![],
            }],
        };
        let lines = format_scan_output(&calendar, &IndexConfig::default());
        assert_eq!(lines[1], "007 (untitled)");
        assert_eq!(lines[2], "    Source: day_7/");
        assert_eq!(lines[3], "    Solutions: none");
    }

    #[test]
    fn build_output_counts() {
        let lines = format_build_output(&calendar(), Path::new("../README.md"));
        assert_eq!(lines, vec!["Wrote ../README.md (2 days, 3 solutions)"]);
    }

    #[test]
    fn build_output_singular() {
        let calendar = Calendar {
            days: vec![day(1, "trebuchet", &["python"])],
        };
        let lines = format_build_output(&calendar, Path::new("README.md"));
        assert_eq!(lines, vec!["Wrote README.md (1 day, 1 solution)"]);
    }

    #[test]
    fn check_output_current() {
        let lines = format_check_output(Path::new("README.md"), true);
        assert_eq!(lines, vec!["README.md is up to date"]);
    }

    #[test]
    fn check_output_stale() {
        let lines = format_check_output(Path::new("README.md"), false);
        assert_eq!(lines[0], "README.md is stale");
        assert!(lines[1].contains("advent-index build"));
    }
}
