//! Run tracking
//!
//! The run tracker is the sole holder of "last motif" state. It is
//! advanced exactly once per emitted record, in record order.

use primelaw_types::Motif;
use serde::{Deserialize, Serialize};

/// Saved run-tracker state for snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    pub motif: Motif,
    pub length: u64,
}

/// Counts consecutive repeats of the current motif.
#[derive(Debug, Default)]
pub struct RunTracker {
    current: Option<RunState>,
}

impl RunTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn rebuild(state: Option<RunState>) -> Self {
        Self { current: state }
    }

    /// Advance by one record: same motif extends the run, a different
    /// motif starts a new run of length 1.
    pub fn update(&mut self, motif: Motif) -> u64 {
        let length = match self.current {
            Some(state) if state.motif == motif => state.length + 1,
            _ => 1,
        };
        self.current = Some(RunState { motif, length });
        length
    }

    /// Current run, if any record has been observed.
    pub fn state(&self) -> Option<RunState> {
        self.current
    }
}
