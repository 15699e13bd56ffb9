//! Resumable generator state
//!
//! A snapshot carries everything a generator needs to continue from a
//! record boundary: the previous prime, the motif alphabet, the run
//! tracker, the innovation log, and the recent gap history. It does NOT
//! carry the emitted records; the record history artifact is the
//! exported CSV.
//!
//! Snapshots are validated on restore. Every label must re-derive
//! canonically from its gap, so a hand-edited or corrupted file cannot
//! smuggle an inconsistent alphabet into a run.

use primelaw_types::{LawError, Motif, RegimeInnovation};
use serde::{Deserialize, Serialize};

use crate::config::LawConfig;
use crate::classifier::AlphabetEntry;
use crate::runs::RunState;
use crate::witness;

/// Bumped whenever the snapshot layout changes incompatibly.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable generator state, taken and restored at record boundaries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawSnapshot {
    pub version: u32,
    pub config: LawConfig,
    /// Prime of the last emitted record.
    pub previous_prime: u64,
    /// Index the next emitted record will carry.
    pub next_index: u64,
    /// Motif alphabet in first-seen order.
    pub alphabet: Vec<AlphabetEntry>,
    /// Run tracker state; absent only before the seed record.
    pub run: Option<RunState>,
    /// Full innovation log, ordered by index ascending.
    pub innovations: Vec<RegimeInnovation>,
    /// Recent (gap, motif) pairs, oldest first.
    pub history: Vec<(u64, Motif)>,
}

impl LawSnapshot {
    /// Structural validation, run before any state is rebuilt.
    pub fn validate(&self) -> Result<(), LawError> {
        let reject = |reason: &str| Err(LawError::InvalidSnapshot(reason.to_string()));

        if self.version != SNAPSHOT_VERSION {
            return Err(LawError::InvalidSnapshot(format!(
                "version {} (supported: {SNAPSHOT_VERSION})",
                self.version
            )));
        }
        if self.next_index == 0 {
            return reject("next_index must be at least 1");
        }
        if self.next_index == 1 {
            // Pre-seed snapshot: nothing may have been observed yet.
            if self.run.is_some() || !self.alphabet.is_empty() || !self.innovations.is_empty() {
                return reject("pre-seed snapshot carries observed state");
            }
            return Ok(());
        }
        if !witness::is_prime(self.previous_prime) {
            return Err(LawError::InvalidSnapshot(format!(
                "previous_prime {} is not prime",
                self.previous_prime
            )));
        }
        if self.run.is_none() {
            return reject("run state missing after the seed record");
        }

        for entry in &self.alphabet {
            if Motif::from_gap(entry.gap) != Some(entry.motif) {
                return Err(LawError::InvalidSnapshot(format!(
                    "alphabet entry {} does not re-derive from gap {}",
                    entry.motif, entry.gap
                )));
            }
            if entry.first_index >= self.next_index {
                return Err(LawError::InvalidSnapshot(format!(
                    "alphabet entry {} first seen at future index {}",
                    entry.motif, entry.first_index
                )));
            }
        }
        for (gap, motif) in &self.history {
            if Motif::from_gap(*gap) != Some(*motif) {
                return Err(LawError::InvalidSnapshot(format!(
                    "history pair ({gap}, {motif}) does not re-derive"
                )));
            }
        }
        let indices_ordered = self
            .innovations
            .windows(2)
            .all(|w| w[0].index <= w[1].index);
        if !indices_ordered {
            return reject("innovation log is not ordered by index");
        }
        if let Some(last) = self.innovations.last() {
            if last.index >= self.next_index {
                return reject("innovation log references a future index");
            }
        }
        Ok(())
    }
}
