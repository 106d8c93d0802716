//! Test builders — ergonomic constructors for export rows and CSV files.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on I/O failure rather than returning `Result`.

use std::path::{Path, PathBuf};

use super::fixtures::HEADER;

// ---------------------------------------------------------------------------
// RowBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for one export row. Unused columns are filled with `-`.
///
/// ```rust
/// let row = RowBuilder::new("Jan 02, 2006 @ 15:04:05.000")
///     .level("WARN")
///     .message("hello world")
///     .fraction("456")
///     .build();
/// ```
pub struct RowBuilder {
    fields: Vec<String>,
}

impl RowBuilder {
    pub fn new(timestamp: impl Into<String>) -> Self {
        let mut fields = vec!["-".to_string(); HEADER.len()];
        fields[0] = timestamp.into();
        fields[6] = "INFO".to_string();
        fields[12] = String::new();
        fields[13] = "000".to_string();
        Self { fields }
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.fields[6] = level.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.fields[12] = message.into();
        self
    }

    pub fn fraction(mut self, fraction: impl Into<String>) -> Self {
        self.fields[13] = fraction.into();
        self
    }

    /// Drop trailing columns so the row has exactly `width` fields.
    pub fn truncate(mut self, width: usize) -> Self {
        self.fields.truncate(width);
        self
    }

    pub fn build(self) -> Vec<String> {
        self.fields
    }
}

/// Build a row from a `(timestamp, level, message, fraction)` corpus tuple.
pub fn row_from(tuple: &(&str, &str, &str, &str)) -> Vec<String> {
    let (ts, level, message, fraction) = *tuple;
    RowBuilder::new(ts)
        .level(level)
        .message(message)
        .fraction(fraction)
        .build()
}

// ---------------------------------------------------------------------------
// CSV documents
// ---------------------------------------------------------------------------

/// Render a header plus `rows` as CSV text, quoting where needed.
pub fn export_csv(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(Vec::new());
    wtr.write_record(header).unwrap();
    for row in rows {
        wtr.write_record(row).unwrap();
    }
    String::from_utf8(wtr.into_inner().unwrap()).unwrap()
}

/// Write a standard-header export with `rows` to `dir/name` and return its path.
pub fn write_export(dir: &Path, name: &str, rows: &[Vec<String>]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, export_csv(&HEADER, rows)).unwrap();
    path
}
