//! bplog-core — restores contact-center platform logs from log-search CSV exports.
//!
//! # Pipeline
//!
//! ```text
//! CSV export ──► Reader ──► Normalizer ──► sort ──► Writer ──► target log
//! ```
//!
//! The stages run once, in sequence, on the calling thread. The reader
//! materialises and sorts every record before the writer opens the target, so
//! a bad row aborts the run before any output file exists.

pub mod config;
pub mod error;
pub mod normalizer;
pub mod reader;
pub mod types;
pub mod writer;

use std::path::Path;

pub use config::Config;
pub use error::{ConvertError, Result};
pub use types::{LevelLabel, Record};

/// Outcome of a successful [`convert`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of records written to the target.
    pub records: usize,
}

/// Convert the CSV export at `source` into a target log at `target`.
pub fn convert(source: &Path, target: &Path, config: &Config) -> Result<Summary> {
    let records = reader::read_records(source, config)?;
    writer::write_log(target, &records)?;
    tracing::info!(
        source = %source.display(),
        target = %target.display(),
        records = records.len(),
        "conversion complete"
    );
    Ok(Summary {
        records: records.len(),
    })
}
