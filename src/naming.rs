//! Directory name parsing for the `day_<n>_<words>` convention.
//!
//! Every puzzle lives in a directory at the calendar root whose name is an
//! underscore-separated `day` token, the day number, and the puzzle title:
//!
//! - `day_1_trebuchet` → day 1, "trebuchet"
//! - `Day_2_Cube_Conundrum` → day 2, "Cube Conundrum"
//! - `day_7` → day 7, "" (title-less)
//!
//! Anything else (`docs`, `scripts`, `Day0x01`, `day_one_x`) is not a puzzle
//! directory and parses to `None`. That is a filter, not an error.

use crate::types::PuzzleRecord;

/// Parse a single directory name into a [`PuzzleRecord`].
///
/// Returns `None` when the name has fewer than two underscore-separated
/// components, the first component is not `day` (any case), or the second
/// is not a positive integer.
pub fn parse_day_name(name: &str) -> Option<PuzzleRecord> {
    let mut tokens = name.split('_');
    let prefix = tokens.next()?;
    if !prefix.eq_ignore_ascii_case("day") {
        return None;
    }
    let day = tokens.next()?.parse::<u32>().ok().filter(|&n| n > 0)?;
    let words: Vec<&str> = tokens.collect();

    Some(PuzzleRecord {
        day,
        name: words.join(" "),
        dirname: name.to_string(),
    })
}

/// Parse every puzzle directory out of `dirnames` and sort by day number.
///
/// Non-puzzle names are dropped. The sort is stable: records sharing a day
/// number keep their input order. Duplicates are kept here; rejecting them
/// is the caller's policy (see [`crate::scan::scan`]).
pub fn parse_and_sort<I, S>(dirnames: I) -> Vec<PuzzleRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records: Vec<PuzzleRecord> = dirnames
        .into_iter()
        .filter_map(|name| parse_day_name(name.as_ref()))
        .collect();
    records.sort_by_key(|r| r.day);
    records
}
