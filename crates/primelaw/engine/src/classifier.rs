//! Gap classification and the motif alphabet
//!
//! The classifier owns the two pieces of per-run context the canonical
//! motif rule needs: the append-only `MotifTable` (the "alphabet") and a
//! bounded window of recent gaps. Classification itself is pure — the
//! only mutation is registering a gap's label the first time the gap is
//! seen, and registered entries never change afterwards.

use primelaw_types::{ClassifyError, Motif};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// One entry of the motif alphabet, in first-seen order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetEntry {
    /// The gap this entry labels.
    pub gap: u64,
    /// The canonical motif assigned to the gap.
    pub motif: Motif,
    /// Record index at which the gap first appeared.
    pub first_index: u64,
}

/// Append-only registry mapping gaps to their motif labels.
///
/// Insertion order is preserved so alphabet-growth reports are
/// reproducible across runs.
#[derive(Debug, Default)]
pub struct MotifTable {
    by_gap: HashMap<u64, usize>,
    entries: Vec<AlphabetEntry>,
}

impl MotifTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the registered motif for a gap.
    pub fn get(&self, gap: u64) -> Option<Motif> {
        self.by_gap.get(&gap).map(|&i| self.entries[i].motif)
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[AlphabetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, entry: AlphabetEntry) {
        self.by_gap.insert(entry.gap, self.entries.len());
        self.entries.push(entry);
    }
}

/// Bounded window of recent (gap, motif) pairs.
///
/// The window is the classifier's only view of the past. Its one load-
/// bearing signal is emptiness: the degenerate gap 0 is legal only at
/// the seed position, i.e. while the history is still empty.
#[derive(Debug)]
pub struct GapHistory {
    window: usize,
    recent: VecDeque<(u64, Motif)>,
}

impl GapHistory {
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            recent: VecDeque::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    /// Pairs oldest-first, at most `window` of them.
    pub fn pairs(&self) -> impl Iterator<Item = (u64, Motif)> + '_ {
        self.recent.iter().copied()
    }

    fn push(&mut self, gap: u64, motif: Motif) {
        if self.recent.len() == self.window {
            self.recent.pop_front();
        }
        self.recent.push_back((gap, motif));
    }
}

/// Classifies gaps into canonical motif labels.
#[derive(Debug)]
pub struct GapClassifier {
    table: MotifTable,
    history: GapHistory,
}

impl GapClassifier {
    pub fn new(history_window: usize) -> Self {
        Self {
            table: MotifTable::new(),
            history: GapHistory::new(history_window),
        }
    }

    /// Rebuild a classifier from a saved alphabet and history window.
    ///
    /// The caller has already validated that every entry's motif
    /// re-derives from its gap.
    pub(crate) fn rebuild(
        history_window: usize,
        alphabet: Vec<AlphabetEntry>,
        recent: Vec<(u64, Motif)>,
    ) -> Self {
        let mut classifier = Self::new(history_window);
        for entry in alphabet {
            classifier.table.insert(entry);
        }
        for (gap, motif) in recent {
            classifier.history.push(gap, motif);
        }
        classifier
    }

    /// Classify the gap observed at `index` and record it in the history.
    ///
    /// Identical (gap, history) always yields the identical label. A gap
    /// whose derived label contradicts the registered one is a fatal
    /// classification error, as is any gap the canonical rule cannot
    /// label (gap 0 off the seed, odd gaps above 1).
    pub fn classify(&mut self, index: u64, gap: u64) -> Result<Motif, ClassifyError> {
        if gap == 0 && !self.history.is_empty() {
            return Err(ClassifyError::UnclassifiableGap {
                index,
                gap,
                reason: "gap 0 is only legal at the seed position".to_string(),
            });
        }
        let derived = Motif::from_gap(gap).ok_or_else(|| ClassifyError::UnclassifiableGap {
            index,
            gap,
            reason: "odd gaps above 1 cannot occur between odd primes".to_string(),
        })?;

        match self.table.get(gap) {
            Some(registered) if registered != derived => {
                return Err(ClassifyError::MotifConflict {
                    index,
                    gap,
                    registered,
                    derived,
                });
            }
            Some(_) => {}
            None => {
                debug!(%derived, gap, index, alphabet_size = self.table.len() + 1,
                    "new motif registered");
                self.table.insert(AlphabetEntry {
                    gap,
                    motif: derived,
                    first_index: index,
                });
            }
        }

        self.history.push(gap, derived);
        Ok(derived)
    }

    /// The alphabet in first-seen order.
    pub fn alphabet(&self) -> &[AlphabetEntry] {
        self.table.entries()
    }

    pub(crate) fn history(&self) -> &GapHistory {
        &self.history
    }
}
