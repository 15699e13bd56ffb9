//! Prime Law Store
//!
//! File-shaped collaborators around the engine: the gap-sequence cache
//! loader, record CSV export and parsing, and snapshot persistence.
//!
//! All structural validation of cache files happens here at load time
//! (header shape, contiguous indices, monotonic primes, internal gap
//! arithmetic). The engine re-verifies each consumed row against its
//! own state; the store guarantees only that the file is well-formed.

#![deny(unsafe_code)]

mod cache;
mod errors;
mod records;
mod snapshot;

pub use cache::SequenceCache;
pub use errors::{StoreError, StoreResult};
pub use records::{records_from_csv, records_to_csv, read_records, write_records};
pub use snapshot::{load_snapshot, save_snapshot};
