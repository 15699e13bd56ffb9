//! Record CSV export and parsing
//!
//! The exported column set `index,prime,gap,motif,run,domain` is the
//! downstream contract (plotting, statistics); names and order are
//! fixed.

use primelaw_types::PrimeRecord;
use std::path::Path;
use tracing::info;

use crate::errors::{StoreError, StoreResult};

const HEADER: &str = "index,prime,gap,motif,run,domain";

/// Render records as CSV, header first, one row per record.
pub fn records_to_csv(records: &[PrimeRecord]) -> String {
    let mut out = String::with_capacity(32 * (records.len() + 1));
    out.push_str(HEADER);
    out.push('\n');
    for r in records {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            r.index, r.prime, r.gap, r.motif, r.run, r.domain
        ));
    }
    out
}

/// Write the record stream to `path` as CSV.
pub fn write_records(path: &Path, records: &[PrimeRecord]) -> StoreResult<()> {
    std::fs::write(path, records_to_csv(records)).map_err(|e| StoreError::io(path, e))?;
    info!(path = %path.display(), records = records.len(), "record CSV written");
    Ok(())
}

/// Read a record CSV written by [`write_records`].
pub fn read_records(path: &Path) -> StoreResult<Vec<PrimeRecord>> {
    let text = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
    records_from_csv(&text, path)
}

/// Parse record CSV; `path` is used for error reporting only.
pub fn records_from_csv(text: &str, path: &Path) -> StoreResult<Vec<PrimeRecord>> {
    let mut lines = text.lines().enumerate();
    let (_, header) = lines
        .next()
        .ok_or_else(|| StoreError::malformed(path, 1, "empty file"))?;
    if header.trim() != HEADER {
        return Err(StoreError::malformed(
            path,
            1,
            format!("header must be '{HEADER}', found '{header}'"),
        ));
    }

    let mut records = Vec::new();
    for (at, line) in lines {
        let line_no = at + 1;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != 6 {
            return Err(StoreError::malformed(
                path,
                line_no,
                format!("expected 6 columns, found {}", fields.len()),
            ));
        }
        let int = |name: &str, raw: &str| -> StoreResult<u64> {
            raw.parse().map_err(|_| {
                StoreError::malformed(path, line_no, format!("{name} '{raw}' is not an integer"))
            })
        };
        records.push(PrimeRecord {
            index: int("index", fields[0])?,
            prime: int("prime", fields[1])?,
            gap: int("gap", fields[2])?,
            motif: fields[3].parse().map_err(|_| {
                StoreError::malformed(path, line_no, format!("invalid motif '{}'", fields[3]))
            })?,
            run: int("run", fields[4])?,
            domain: fields[5].parse().map_err(|_| {
                StoreError::malformed(path, line_no, format!("invalid domain '{}'", fields[5]))
            })?,
        });
    }
    Ok(records)
}
