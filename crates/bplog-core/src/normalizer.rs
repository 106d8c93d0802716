//! Normalizer — turns one raw CSV row into a [`Record`](crate::Record).
//!
//! Per row: parse the export timestamp, shift it by the fixed timezone offset,
//! render it in the target format with the sub-millisecond suffix appended
//! verbatim, pad the level label, and copy the message as-is.

use std::fmt::Write as _;

use chrono::{Duration, NaiveDateTime};
use csv::StringRecord;

use crate::config::{Config, TimeConfig};
use crate::error::{ConvertError, Result};
use crate::types::{LevelLabel, Record};

/// Normalise a single data row.
pub fn normalize_row(row: &StringRecord, config: &Config) -> Result<Record> {
    let line = row.position().map_or(0, |pos| pos.line());
    let columns = &config.columns;

    let raw_ts = column(row, columns.timestamp, line)?;
    let timestamp = restamp(raw_ts, column(row, columns.fraction, line)?, &config.time, line)?;
    let level = LevelLabel::parse(column(row, columns.level, line)?).to_string();
    let message = column(row, columns.message, line)?;

    Ok(Record {
        level,
        timestamp,
        message: message.to_string(),
    })
}

/// Parse `raw` in the source format, apply the offset, and render it in the
/// target format followed by `.` and `suffix`.
///
/// `raw` must match the source layout exactly, ignoring ASCII case: chrono's
/// parser tolerates missing padding, spaces and fractions, so the parsed value
/// is rendered back and compared. The suffix is never parsed, so leading zeros
/// and non-digits survive.
pub fn restamp(raw: &str, suffix: &str, time: &TimeConfig, line: u64) -> Result<String> {
    let parsed = NaiveDateTime::parse_from_str(raw, &time.source_format).map_err(|source| {
        ConvertError::Timestamp {
            line,
            value: raw.to_string(),
            source,
        }
    })?;

    let mut canonical = String::with_capacity(raw.len());
    write!(canonical, "{}", parsed.format(&time.source_format))
        .map_err(|_| ConvertError::Format { line })?;
    if !canonical.eq_ignore_ascii_case(raw) {
        return Err(ConvertError::TimestampLayout {
            line,
            value: raw.to_string(),
            expected: canonical,
        });
    }

    let corrected = parsed
        .checked_add_signed(Duration::hours(time.offset_hours))
        .ok_or_else(|| ConvertError::TimestampOutOfRange {
            line,
            value: raw.to_string(),
        })?;

    let mut out = String::with_capacity(24 + suffix.len());
    write!(out, "{}", corrected.format(&time.target_format))
        .map_err(|_| ConvertError::Format { line })?;
    out.push('.');
    out.push_str(suffix);
    Ok(out)
}

fn column(row: &StringRecord, index: usize, line: u64) -> Result<&str> {
    row.get(index).ok_or(ConvertError::MissingColumn {
        line,
        index,
        len: row.len(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
