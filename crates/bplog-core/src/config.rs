//! Conversion constants for bplogrestore.
//!
//! The timestamp formats, the timezone offset and the CSV column layout are
//! fixed. The embedded TOML document is authoritative and [`Config::defaults`]
//! is the only constructor the CLI uses. The per-field serde defaults mirror
//! it for sections left out of a document; a test keeps the two in step.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[time]
source_format = "%b %d, %Y @ %H:%M:%S%.3f"
target_format = "%Y/%m/%d %H:%M:%S%.3f"
offset_hours  = 3

[columns]
timestamp = 0
level     = 6
message   = 12
fraction  = 13
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level conversion configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub time: TimeConfig,
    #[serde(default)]
    pub columns: ColumnsConfig,
}

/// `[time]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimeConfig {
    /// chrono format of the export's timestamp column.
    #[serde(default = "default_source_format")]
    pub source_format: String,
    /// chrono format of the target log's timestamp, before the suffix.
    #[serde(default = "default_target_format")]
    pub target_format: String,
    /// Hours added to every parsed timestamp.
    #[serde(default = "default_offset_hours")]
    pub offset_hours: i64,
}

fn default_source_format() -> String { "%b %d, %Y @ %H:%M:%S%.3f".to_string() }
fn default_target_format() -> String { "%Y/%m/%d %H:%M:%S%.3f".to_string() }
fn default_offset_hours() -> i64 { 3 }

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            source_format: default_source_format(),
            target_format: default_target_format(),
            offset_hours: default_offset_hours(),
        }
    }
}

/// `[columns]` section. Zero-based indices into each CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnsConfig {
    #[serde(default = "default_timestamp_column")]
    pub timestamp: usize,
    #[serde(default = "default_level_column")]
    pub level: usize,
    #[serde(default = "default_message_column")]
    pub message: usize,
    /// Sub-millisecond suffix, appended verbatim.
    #[serde(default = "default_fraction_column")]
    pub fraction: usize,
}

fn default_timestamp_column() -> usize { 0 }
fn default_level_column() -> usize { 6 }
fn default_message_column() -> usize { 12 }
fn default_fraction_column() -> usize { 13 }

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            timestamp: default_timestamp_column(),
            level: default_level_column(),
            message: default_message_column(),
            fraction: default_fraction_column(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Return the built-in constants.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
