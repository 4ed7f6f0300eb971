//! README rendering.
//!
//! Turns a scanned [`Calendar`] into the markdown index shown on the
//! repository front page:
//!
//! ```text
//! <p align="center">
//! <img alt="Advent of Code 2023 Logo" src="docs/img/logo.png" width=600 />
//! </p>
//!
//! # Advent of Code 2023
//!
//! [Advent of Code](https://adventofcode.com) is an Advent calendar ...
//!
//! Completed **2** out of **25** advent day puzzles.
//!
//! ![Progress Bar](https://progress-bar.dev/8)
//!
//! Day | Puzzle | Solutions
//! --- | --- | ---
//! 1 | [trebuchet](https://adventofcode.com/2023/day/1) | [![](...)](day_1_trebuchet/...)
//! ```
//!
//! The document is consumed by a hosted markdown renderer, so the exact
//! heading levels, table delimiter row and link syntax are part of the
//! contract. Rendering is pure; [`write_index`] is the only side effect.

use crate::config::IndexConfig;
use crate::types::{Calendar, Day};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Completion percentage, rounded half to even.
///
/// # Panics
///
/// If `total` is zero. Config validation rejects `total_days = 0`, so this
/// only fires on a caller bug.
pub fn compute_progress(completed: usize, total: usize) -> usize {
    assert!(total > 0, "progress total must be non-zero");
    let scaled = completed * 100;
    let quotient = scaled / total;
    let twice_remainder = (scaled % total) * 2;
    if twice_remainder > total || (twice_remainder == total && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

/// Render the full README document.
pub fn render(calendar: &Calendar, config: &IndexConfig) -> String {
    let year = config.year;
    let completed = calendar.completed();
    let total = config.total_days as usize;
    let progress = compute_progress(completed, total);

    let mut lines = vec![
        "<p align=\"center\">".to_string(),
        format!(
            "<img alt=\"Advent of Code {year} Logo\" src=\"{}\" width=600 />",
            config.logo
        ),
        "</p>".to_string(),
        String::new(),
        format!("# Advent of Code {year}"),
        String::new(),
        format!(
            "[Advent of Code]({}) is an Advent calendar of small programming puzzles for a \
             variety of skill sets and skill levels that can be solved in any programming \
             language you like. This repository contains solutions to the {year} Advent of \
             Code calendar.",
            config.site_url
        ),
        String::new(),
        format!("Completed **{completed}** out of **{total}** advent day puzzles."),
        String::new(),
        format!("![Progress Bar]({}/{progress})", config.progress_bar_url),
        String::new(),
        "Day | Puzzle | Solutions".to_string(),
        "--- | --- | ---".to_string(),
    ];
    lines.extend(calendar.days.iter().map(|day| table_row(day, config)));

    let mut doc = lines.join("\n");
    doc.push('\n');
    doc
}

/// One table row: day number, linked puzzle name, language badges.
fn table_row(day: &Day, config: &IndexConfig) -> String {
    let record = &day.record;
    format!(
        "{} | [{}]({}/{}/day/{}) | {}",
        record.day,
        record.name,
        config.site_url,
        config.year,
        record.day,
        language_badges(day, config)
    )
}

/// Space-joined badge links for every detected language of `day`.
///
/// Languages missing from the config table are skipped.
fn language_badges(day: &Day, config: &IndexConfig) -> String {
    day.languages
        .iter()
        .filter_map(|lang| {
            let entry = config.languages.get(lang)?;
            Some(format!(
                "[![]({}/{})]({}/{}/{})",
                config.badge_url, entry.badge, day.record.dirname, lang, entry.entry_point
            ))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write the rendered document to `path`, replacing any previous content.
pub fn write_index(path: &Path, document: &str) -> Result<(), RenderError> {
    fs::write(path, document).map_err(|source| RenderError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Whether the file at `path` already holds exactly `document`.
///
/// A missing file is stale.
pub fn is_current(path: &Path, document: &str) -> Result<bool, RenderError> {
    match fs::read_to_string(path) {
        Ok(existing) => Ok(existing == document),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(RenderError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}
