//! Reader — loads a log-search CSV export into a sorted `Vec<Record>`.
//!
//! The whole export is materialised before anything is written. The first
//! row is a header and never becomes a record; it still counts towards the
//! CSV layer's equal-width check.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, trace};

use crate::config::Config;
use crate::error::{ConvertError, Result};
use crate::normalizer::normalize_row;
use crate::types::Record;

/// Open `path` and read every data row. The file handle is dropped before
/// this returns, on both the success and the error path.
pub fn read_records(path: &Path, config: &Config) -> Result<Vec<Record>> {
    let file = File::open(path).map_err(|source| ConvertError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "reading export");
    read_records_from(file, path, config)
}

/// Read and normalise rows from any byte source. `origin` is only used to
/// label CSV errors.
pub fn read_records_from<R: io::Read>(
    mut input: R,
    origin: &Path,
    config: &Config,
) -> Result<Vec<Record>> {
    let mut bytes = Vec::new();
    input
        .read_to_end(&mut bytes)
        .map_err(|source| ConvertError::Csv {
            path: origin.to_path_buf(),
            source: csv::Error::from(source),
        })?;
    check_quotes(&bytes).map_err(|(line, reason)| ConvertError::Quote {
        path: origin.to_path_buf(),
        line,
        reason,
    })?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(|source| ConvertError::Csv {
            path: origin.to_path_buf(),
            source,
        })?;
        let record = normalize_row(&row, config)?;
        trace!(timestamp = %record.timestamp, level = %record.level, "normalised row");
        records.push(record);
    }

    sort_records(&mut records);
    debug!(count = records.len(), "export loaded and sorted");
    Ok(records)
}

#[derive(Clone, Copy)]
enum QuoteState {
    FieldStart,
    Bare,
    Quoted,
    QuoteInQuoted,
}

/// Strict RFC 4180 quoting, which the `csv` crate does not enforce: a quote
/// may only open a field, a closing quote must be followed by a delimiter or
/// line end, and the input may not end inside a quoted field. Returns the
/// 1-based line and a reason on the first violation.
fn check_quotes(bytes: &[u8]) -> std::result::Result<(), (u64, &'static str)> {
    use QuoteState::*;

    let mut line = 1u64;
    let mut opened_on = 1u64;
    let mut state = FieldStart;
    for &b in bytes {
        state = match (state, b) {
            (Quoted, b'"') => QuoteInQuoted,
            (Quoted, _) => Quoted,
            (QuoteInQuoted, b'"') => Quoted,
            (FieldStart, b'"') => {
                opened_on = line;
                Quoted
            }
            (Bare, b'"') => return Err((line, "bare quote in unquoted field")),
            (FieldStart | Bare | QuoteInQuoted, b',' | b'\n' | b'\r') => FieldStart,
            (QuoteInQuoted, _) => return Err((line, "extraneous quote in quoted field")),
            (FieldStart | Bare, _) => Bare,
        };
        if b == b'\n' {
            line += 1;
        }
    }

    match state {
        Quoted => Err((opened_on, "quoted field is never closed")),
        _ => Ok(()),
    }
}

/// Stable ascending sort on the rendered timestamp, compared as plain bytes.
/// Rows sharing a timestamp keep their input order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
