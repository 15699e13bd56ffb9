//! Gap-sequence cache files
//!
//! A cache file is plain CSV with header `index,prime,gap` (extra
//! columns are ignored), one row per prime index, contiguous from
//! index 1. Loading validates the file's internal structure; whether
//! its primes agree with the law is the engine's call, made per step.

use primelaw_types::GapRow;
use std::path::Path;
use tracing::info;

use crate::errors::{StoreError, StoreResult};

/// A loaded, structurally validated gap-sequence cache.
#[derive(Clone, Debug)]
pub struct SequenceCache {
    rows: Vec<GapRow>,
}

impl SequenceCache {
    /// Load and validate a cache file.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let cache = Self::from_csv(&text, path)?;
        info!(path = %path.display(), rows = cache.rows.len(), "gap cache loaded");
        Ok(cache)
    }

    /// Parse cache CSV; `path` is used for error reporting only.
    pub fn from_csv(text: &str, path: &Path) -> StoreResult<Self> {
        let mut lines = text.lines().enumerate();
        let (_, header) = lines
            .next()
            .ok_or_else(|| StoreError::malformed(path, 1, "empty file"))?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        if columns.len() < 3 || columns[..3] != ["index", "prime", "gap"] {
            return Err(StoreError::malformed(
                path,
                1,
                format!("header must start with 'index,prime,gap', found '{header}'"),
            ));
        }

        let mut rows: Vec<GapRow> = Vec::new();
        for (at, line) in lines {
            let line_no = at + 1;
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split(',').map(str::trim);
            let mut field = |name: &str| -> StoreResult<u64> {
                let raw = fields
                    .next()
                    .ok_or_else(|| StoreError::malformed(path, line_no, format!("missing {name}")))?;
                raw.parse().map_err(|_| {
                    StoreError::malformed(path, line_no, format!("{name} '{raw}' is not an integer"))
                })
            };
            let row = GapRow {
                index: field("index")?,
                prime: field("prime")?,
                gap: field("gap")?,
            };

            let expected_index = rows.len() as u64 + 1;
            if row.index != expected_index {
                return Err(StoreError::malformed(
                    path,
                    line_no,
                    format!("index {} breaks contiguity (expected {expected_index})", row.index),
                ));
            }
            match rows.last() {
                None => {
                    if row.gap != 0 {
                        return Err(StoreError::malformed(
                            path,
                            line_no,
                            format!("first row must have gap 0, found {}", row.gap),
                        ));
                    }
                }
                Some(prev) => {
                    if row.prime <= prev.prime {
                        return Err(StoreError::malformed(
                            path,
                            line_no,
                            format!("prime {} is not above predecessor {}", row.prime, prev.prime),
                        ));
                    }
                    if row.gap != row.prime - prev.prime {
                        return Err(StoreError::malformed(
                            path,
                            line_no,
                            format!(
                                "gap {} does not equal {} - {}",
                                row.gap, row.prime, prev.prime
                            ),
                        ));
                    }
                }
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(StoreError::malformed(path, 1, "cache has no data rows"));
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[GapRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<GapRow> {
        self.rows
    }

    /// Number of covered indices (1..=len).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
