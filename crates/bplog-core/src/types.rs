//! Core types for bplog-core.
//!
//! This module defines the one domain entity, the normalised [`Record`], and
//! [`LevelLabel`], which owns the level padding table of the target log format.

/// A normalised log entry ready to be written to the target log.
///
/// Records are built once by the normalizer and never mutated afterwards;
/// sorting only reorders the sequence that holds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Level label, already padded for the target format (see [`LevelLabel`]).
    pub level: String,
    /// Timezone-corrected timestamp in the target format, with the
    /// sub-millisecond suffix appended. Lexically sortable.
    pub timestamp: String,
    /// Message body, copied verbatim from the export.
    pub message: String,
}

impl Record {
    pub fn new(
        level: impl Into<String>,
        timestamp: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level: level.into(),
            timestamp: timestamp.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Record {
    /// Renders the record as one target log line, without the trailing newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.level, self.timestamp, self.message)
    }
}

/// Level label as it appears in the export, classified against the padding table.
///
/// The target viewer aligns labels to five columns. `ERROR` and `DEBUG` are
/// already five wide; anything not in the table is passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelLabel<'a> {
    Info,
    Warn,
    Log,
    Other(&'a str),
}

impl<'a> LevelLabel<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw {
            "INFO" => LevelLabel::Info,
            "WARN" => LevelLabel::Warn,
            "LOG" => LevelLabel::Log,
            other => LevelLabel::Other(other),
        }
    }
}

impl std::fmt::Display for LevelLabel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelLabel::Info => write!(f, "INFO "),
            LevelLabel::Warn => write!(f, "WARN "),
            LevelLabel::Log => write!(f, "LOG  "),
            LevelLabel::Other(raw) => write!(f, "{raw}"),
        }
    }
}
