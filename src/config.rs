//! Index configuration.
//!
//! Every constant the generated README depends on (calendar year, number of
//! puzzle days, badge and progress-bar services, per-language badges and
//! entry points) lives in [`IndexConfig`]. The stock defaults describe the
//! 2023 calendar with Go, Python and Rust solutions; an optional
//! `index.toml` at the calendar root overrides any subset of them.
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! year = 2023
//! total_days = 25
//! logo = "docs/img/logo.png"
//! site_url = "https://adventofcode.com"
//! badge_url = "https://img.shields.io/badge"
//! progress_bar_url = "https://progress-bar.dev"
//!
//! [languages.go]
//! badge = "go-00ADD8?style=for-the-badge&logo=go&logoColor=FFFFFF"
//! entry_point = "main.go"
//!
//! [languages.python]
//! badge = "python-3670A0?style=for-the-badge&logo=python&logoColor=FFDD54"
//! entry_point = "main.py"
//!
//! [languages.rust]
//! badge = "rust-000000?style=for-the-badge&logo=rust&logoColor=FFFFFF"
//! entry_point = "src/main.rs"
//! ```
//!
//! ## Partial Configuration
//!
//! The file is merged on top of the defaults table by table, so adding a
//! language only needs its own section:
//!
//! ```toml
//! [languages.zig]
//! badge = "zig-F7A41D?style=for-the-badge&logo=zig&logoColor=FFFFFF"
//! entry_point = "src/main.zig"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the optional config file at the calendar root.
pub const CONFIG_FILE: &str = "index.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// README index configuration.
///
/// All fields have defaults; a user file only names what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Calendar year, used in the heading, intro, logo alt text and puzzle links.
    pub year: u32,
    /// Number of puzzle days in the calendar (the progress denominator).
    pub total_days: u32,
    /// Path of the centered logo image, relative to the README.
    pub logo: String,
    /// Puzzle site base URL; puzzle links are `{site_url}/{year}/day/{n}`.
    pub site_url: String,
    /// Badge service base URL; badge images are `{badge_url}/{badge}`.
    pub badge_url: String,
    /// Progress bar service base URL; the bar is `{progress_bar_url}/{percent}`.
    pub progress_bar_url: String,
    /// Recognized solution languages, keyed by subdirectory name.
    pub languages: BTreeMap<String, LanguageEntry>,
}

/// Badge and entry point for one solution language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageEntry {
    /// Badge path fragment: label, color, style and logo query.
    pub badge: String,
    /// Main source file, relative to the language subdirectory.
    pub entry_point: String,
}

impl LanguageEntry {
    fn new(badge: &str, entry_point: &str) -> Self {
        Self {
            badge: badge.to_string(),
            entry_point: entry_point.to_string(),
        }
    }
}

/// Built-in languages: `(id, badge, entry_point)`.
const STOCK_LANGUAGES: &[(&str, &str, &str)] = &[
    (
        "go",
        "go-00ADD8?style=for-the-badge&logo=go&logoColor=FFFFFF",
        "main.go",
    ),
    (
        "python",
        "python-3670A0?style=for-the-badge&logo=python&logoColor=FFDD54",
        "main.py",
    ),
    (
        "rust",
        "rust-000000?style=for-the-badge&logo=rust&logoColor=FFFFFF",
        "src/main.rs",
    ),
];

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            year: 2023,
            total_days: 25,
            logo: "docs/img/logo.png".to_string(),
            site_url: "https://adventofcode.com".to_string(),
            badge_url: "https://img.shields.io/badge".to_string(),
            progress_bar_url: "https://progress-bar.dev".to_string(),
            languages: STOCK_LANGUAGES
                .iter()
                .map(|(id, badge, entry)| (id.to_string(), LanguageEntry::new(badge, entry)))
                .collect(),
        }
    }
}

impl IndexConfig {
    /// Validate config values are usable for rendering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_days == 0 {
            return Err(ConfigError::Validation(
                "total_days must be non-zero".into(),
            ));
        }
        for (id, lang) in &self.languages {
            if id.is_empty() {
                return Err(ConfigError::Validation(
                    "language ids must not be empty".into(),
                ));
            }
            if lang.badge.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "languages.{id}.badge must not be empty"
                )));
            }
            if lang.entry_point.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "languages.{id}.entry_point must not be empty"
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(IndexConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `index.toml` from `root` as a raw TOML value, `None` if absent.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<IndexConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: IndexConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config for the calendar at `root`.
///
/// Uses stock defaults when `index.toml` doesn't exist.
pub fn load_config(root: &Path) -> Result<IndexConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(root)?)
}

/// Returns a fully-commented stock `index.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Advent Index Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the calendar root as index.toml.
# Unknown keys will cause an error.

# Calendar year: heading, intro text, logo alt text and puzzle links.
year = 2023

# Number of puzzle days in the calendar. Completion percentage is
# completed / total_days. Must be non-zero.
total_days = 25

# Logo shown centered above the heading, relative to the README.
logo = "docs/img/logo.png"

# Puzzle links point at {site_url}/{year}/day/{day}.
site_url = "https://adventofcode.com"

# Badge images are {badge_url}/{badge}.
badge_url = "https://img.shields.io/badge"

# Progress bar image is {progress_bar_url}/{percent}.
progress_bar_url = "https://progress-bar.dev"

# ---------------------------------------------------------------------------
# Solution languages
# ---------------------------------------------------------------------------
# A puzzle directory subfolder named after a language id gets a badge
# linking to {puzzle_dir}/{id}/{entry_point}. Add a [languages.<id>]
# section to recognize another language.

[languages.go]
badge = "go-00ADD8?style=for-the-badge&logo=go&logoColor=FFFFFF"
entry_point = "main.go"

[languages.python]
badge = "python-3670A0?style=for-the-badge&logo=python&logoColor=FFDD54"
entry_point = "main.py"

[languages.rust]
badge = "rust-000000?style=for-the-badge&logo=rust&logoColor=FFFFFF"
entry_point = "src/main.rs"
"##
}
