//! Stream and file level load/save
//!
//! Handles writing a collection out and reading it back, stopping at the
//! first corrupt line.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::collection::Collection;
use crate::error::{Result, RosterError};

use super::line::decode_record;

/// Outcome of a load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of records appended to the collection
    pub records_loaded: usize,

    /// Lines consumed, including blank lines and the line that ended the read
    pub lines_read: usize,

    /// 1-based line number of the first corrupt line, if the load stopped early
    pub truncated_at: Option<usize>,
}

impl LoadReport {
    /// Whether the load stopped at a corrupt line
    pub fn was_truncated(&self) -> bool {
        self.truncated_at.is_some()
    }
}

// =============================================================================
// Stream-based I/O
// =============================================================================

/// Write every record, in current order, one per line
pub fn write_records<W: Write>(writer: &mut W, collection: &Collection) -> Result<()> {
    for record in collection {
        writeln!(writer, "{}", record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read records from `reader`, appending them to `collection`
///
/// The first line that does not decode (wrong token count, bad integer,
/// bad date, invalid UTF-8, or a blank line followed by more input) ends
/// the read: nothing after it is looked at and no error is returned for it.
/// Blank lines at the very end of the input are not treated as corrupt.
///
/// I/O errors from the reader and allocation failures are returned as
/// errors, and in that case `collection` is rolled back to exactly what it
/// held before the call.
pub fn read_into<R: BufRead>(reader: R, collection: &mut Collection) -> Result<LoadReport> {
    let (len, capacity) = (collection.len(), collection.capacity());

    let result = read_lines_into(reader, collection);
    if result.is_err() {
        collection.restore(len, capacity);
    }
    result
}

fn read_lines_into<R: BufRead>(mut reader: R, collection: &mut Collection) -> Result<LoadReport> {
    let mut report = LoadReport::default();
    let mut buf = Vec::new();
    // First blank line of the current run; only corrupt if more input follows
    let mut blank_at: Option<usize> = None;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        report.lines_read += 1;

        let line = std::str::from_utf8(&buf);
        if matches!(line, Ok(l) if l.trim().is_empty()) {
            blank_at.get_or_insert(report.lines_read);
            continue;
        }

        if let Some(line_no) = blank_at {
            stop_at(&mut report, line_no, &RosterError::Parse("blank line".to_string()));
            break;
        }

        let decoded = line
            .map_err(|e| RosterError::Parse(format!("invalid UTF-8: {}", e)))
            .and_then(decode_record);

        match decoded {
            Ok(record) => {
                collection.append(record)?;
                report.records_loaded += 1;
            }
            Err(e) => {
                let line_no = report.lines_read;
                stop_at(&mut report, line_no, &e);
                break;
            }
        }
    }

    Ok(report)
}

fn stop_at(report: &mut LoadReport, line_no: usize, cause: &RosterError) {
    tracing::warn!(
        "Stopped reading at corrupt line {} ({}); kept {} records",
        line_no,
        cause,
        report.records_loaded
    );
    report.truncated_at = Some(line_no);
}

/// Read records from `reader` into a fresh collection
pub fn read_records<R: BufRead>(reader: R) -> Result<(Collection, LoadReport)> {
    let mut collection = Collection::new();
    let report = read_into(reader, &mut collection)?;
    Ok((collection, report))
}

// =============================================================================
// File-based I/O
// =============================================================================

/// Save a collection to `path`, replacing any existing file
///
/// Fails with `RosterError::Open` if the file cannot be created.
pub fn save(collection: &Collection, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| RosterError::open(path, e))?;

    let mut writer = BufWriter::new(file);
    write_records(&mut writer, collection)?;

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    tracing::debug!("Saved {} records to {}", collection.len(), path.display());
    Ok(())
}

/// Load a collection from `path`
///
/// Fails with `RosterError::Open` if the file cannot be opened. An empty
/// file, or one whose first line is corrupt, yields an empty collection.
pub fn load(path: impl AsRef<Path>) -> Result<Collection> {
    load_with_report(path).map(|(collection, _)| collection)
}

/// Load a collection from `path` and report how far the read got
pub fn load_with_report(path: impl AsRef<Path>) -> Result<(Collection, LoadReport)> {
    let mut collection = Collection::new();
    let report = load_into(path, &mut collection)?;
    Ok((collection, report))
}

/// Load records from `path`, appending them to `collection`
///
/// On any error `collection` is left exactly as it was.
pub fn load_into(path: impl AsRef<Path>, collection: &mut Collection) -> Result<LoadReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| RosterError::open(path, e))?;

    let report = read_into(BufReader::new(file), collection)?;

    tracing::debug!(
        "Loaded {} records from {} ({} lines read)",
        report.records_loaded,
        path.display(),
        report.lines_read
    );
    Ok(report)
}
