//! Generator configuration

use serde::{Deserialize, Serialize};

/// Candidates examined per step before the search is declared exhausted.
///
/// Far above any known prime gap in `u64` range (the walk advances two per
/// candidate, so this reaches 8192 past the previous prime).
pub const DEFAULT_SEARCH_SPAN: u64 = 4_096;

/// How many recent (gap, motif) pairs the classifier keeps as context.
pub const DEFAULT_HISTORY_WINDOW: usize = 8;

/// Configuration for a generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawConfig {
    /// Number of records `generate` targets.
    pub n_primes: u64,
    /// Candidates examined per step before giving up.
    pub search_span: u64,
    /// Size of the classifier's context window. Never below 1: an empty
    /// window is what marks the seed position.
    pub history_window: usize,
    /// Emit a progress event every this many records (0 disables).
    pub progress_every: u64,
}

impl LawConfig {
    pub fn new(n_primes: u64) -> Self {
        Self {
            n_primes,
            search_span: DEFAULT_SEARCH_SPAN,
            history_window: DEFAULT_HISTORY_WINDOW,
            progress_every: 0,
        }
    }

    pub fn with_search_span(mut self, span: u64) -> Self {
        self.search_span = span;
        self
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window.max(1);
        self
    }

    pub fn with_progress_every(mut self, every: u64) -> Self {
        self.progress_every = every;
        self
    }
}

impl Default for LawConfig {
    fn default() -> Self {
        Self::new(100)
    }
}
