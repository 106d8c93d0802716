//! Error taxonomy for the conversion pipeline.
//!
//! Every variant is fatal: the pipeline has no per-row recovery, so the first
//! error stops the run and is reported by the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout bplog-core.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that abort a conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("cannot open source {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed CSV in {} at line {line}: {reason}", .path.display())]
    Quote {
        path: PathBuf,
        line: u64,
        reason: &'static str,
    },

    /// `line` is the physical CSV line the record starts on.
    #[error("line {line}: column {index} is missing (row has {len} columns)")]
    MissingColumn { line: u64, index: usize, len: usize },

    #[error("line {line}: cannot parse timestamp {value:?}: {source}")]
    Timestamp {
        line: u64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Parsed, but not in the exact export layout (padding, spacing, fraction width).
    #[error("line {line}: cannot parse timestamp {value:?}: expected the layout of {expected:?}")]
    TimestampLayout {
        line: u64,
        value: String,
        expected: String,
    },

    #[error("line {line}: timestamp {value:?} is out of range after timezone correction")]
    TimestampOutOfRange { line: u64, value: String },

    #[error("line {line}: target timestamp format is invalid")]
    Format { line: u64 },

    #[error("cannot create target {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write target {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
