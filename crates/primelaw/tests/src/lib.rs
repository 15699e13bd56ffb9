//! Prime Law test suites
//!
//! This crate carries no library code; it exists to host the property
//! suites and the reference-trace integration tests under `tests/`.
//!
//! - `property_tests` — proptest suites for the law's invariants:
//!   determinism, gap arithmetic, run-length behavior, motif/domain
//!   consistency, innovation ordering, snapshot resume, and cache
//!   verification.
//! - `reference_trace` — the published first-20 trace, checked record
//!   by record.
//! - `csv_round_trip` — store-level CSV and snapshot file behavior.
