//! Writer — serialises sorted records into the target log format.
//!
//! One `<level> <timestamp> <message>\n` line per record. Messages are written
//! as-is: an embedded newline yields a multi-line entry, exactly as the
//! target platform writes them.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::types::Record;

/// Create or truncate `path`, write every record, then flush and fsync.
///
/// A failure part-way through leaves whatever was already written in place.
pub fn write_log(path: &Path, records: &[Record]) -> Result<()> {
    let file = File::create(path).map_err(|source| ConvertError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), count = records.len(), "writing target log");

    let write_err = |source| ConvertError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(file);
    write_records(&mut out, records).map_err(write_err)?;
    out.flush().map_err(write_err)?;
    out.get_ref().sync_all().map_err(write_err)?;
    Ok(())
}

/// Write records to any sink, in sequence order.
pub fn write_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{record}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
