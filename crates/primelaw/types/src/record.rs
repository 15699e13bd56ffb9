//! Emitted records
//!
//! One `PrimeRecord` per generated prime, in index order. The record is the
//! unit everything downstream consumes: table output, CSV export, snapshot
//! resume checks, and the property suites.

use serde::{Deserialize, Serialize};

use crate::{Domain, Motif};

/// One step of the law: a prime, the gap that produced it, and the symbolic
/// description of that gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimeRecord {
    /// 1-based position in the sequence.
    pub index: u64,
    /// The prime at this index. Strictly increasing across records.
    pub prime: u64,
    /// `prime - previous prime`; 0 for the seed record at index 1.
    pub gap: u64,
    /// Canonical motif classifying the gap.
    pub motif: Motif,
    /// Length of the current run of this exact motif, inclusive.
    pub run: u64,
    /// The motif's domain.
    pub domain: Domain,
}

impl PrimeRecord {
    /// Whether this is the seed record (prime 2, gap 0).
    pub fn is_seed(&self) -> bool {
        self.index == 1
    }
}

/// One row of a precomputed gap-sequence cache (`index,prime,gap`).
///
/// The generator checks every consumed row against direct computation;
/// a disagreeing row fails the run rather than steering it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapRow {
    pub index: u64,
    pub prime: u64,
    pub gap: u64,
}
