//! The recursive core
//!
//! `PrimeLaw` derives each prime from its predecessor and describes the
//! step symbolically: witness walk to the next prime, gap, motif, run,
//! domain, regime innovations, one `PrimeRecord` out. Generation is
//! strictly sequential — every step depends on the previous prime and
//! on the mutable classifier and tracker state.
//!
//! The generator does no I/O. Caches arrive as already-parsed rows,
//! snapshots leave as values; files are the store crate's business.

use primelaw_types::{GapRow, LawError, LawResult, PrimeRecord, RegimeInnovation};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::classifier::{AlphabetEntry, GapClassifier};
use crate::config::LawConfig;
use crate::domains::DomainMapper;
use crate::innovations::RegimeInnovationDetector;
use crate::runs::RunTracker;
use crate::snapshot::{LawSnapshot, SNAPSHOT_VERSION};
use crate::witness;

/// How a bounded generation run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// All `n_primes` records have been emitted.
    Completed,
    /// The cancellation flag was observed at a record boundary.
    Cancelled { emitted: u64 },
}

/// The Prime Law generator.
///
/// Owns all mutable state of one run: the motif alphabet, domain table,
/// run tracker, innovation detector, and gap history. Independent
/// generators never share state.
pub struct PrimeLaw {
    config: LawConfig,
    previous_prime: u64,
    next_index: u64,
    classifier: GapClassifier,
    domains: DomainMapper,
    runs: RunTracker,
    innovations: RegimeInnovationDetector,
    records: Vec<PrimeRecord>,
    cache: Option<Vec<GapRow>>,
    cancel: Option<Arc<AtomicBool>>,
}

impl PrimeLaw {
    /// Fresh generator at the seed state; the first emitted record is
    /// `{1, 2, 0, U0, 1, U0}`.
    pub fn new(config: LawConfig) -> Self {
        let history_window = config.history_window;
        Self {
            config,
            previous_prime: 0,
            next_index: 1,
            classifier: GapClassifier::new(history_window),
            domains: DomainMapper::new(),
            runs: RunTracker::new(),
            innovations: RegimeInnovationDetector::new(),
            records: Vec::new(),
            cache: None,
            cancel: None,
        }
    }

    /// Replay against a precomputed gap cache.
    ///
    /// Rows must be sorted by index; the store loader guarantees this.
    /// Every consumed row is checked against direct computation and
    /// still flows through the full classification pipeline; any
    /// disagreement raises [`LawError::CacheMismatch`].
    pub fn with_cache(mut self, rows: Vec<GapRow>) -> Self {
        self.cache = Some(rows);
        self
    }

    /// Cooperative cancellation flag, checked once per emitted record.
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &LawConfig {
        &self.config
    }

    /// Records emitted by `generate` so far, in index order.
    pub fn records(&self) -> &[PrimeRecord] {
        &self.records
    }

    /// The primes of the emitted records, ascending.
    pub fn primes(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.prime).collect()
    }

    /// Regime innovations observed so far, ordered by index.
    pub fn innovations(&self) -> &[RegimeInnovation] {
        self.innovations.log()
    }

    /// The motif alphabet in first-seen order.
    pub fn alphabet(&self) -> &[AlphabetEntry] {
        self.classifier.alphabet()
    }

    /// Run generation up to `n_primes` records.
    ///
    /// Returns `Cancelled` if the cancellation flag was raised; calling
    /// `generate` again resumes from the last emitted record.
    pub fn generate(&mut self) -> LawResult<RunStatus> {
        self.generate_with(|_| ())
    }

    /// Like [`generate`](Self::generate), invoking `on_record` after
    /// each emitted record (progress bars, incremental export).
    pub fn generate_with(
        &mut self,
        mut on_record: impl FnMut(&PrimeRecord),
    ) -> LawResult<RunStatus> {
        while self.next_index <= self.config.n_primes {
            if self.is_cancelled() {
                let emitted = self.next_index - 1;
                info!(emitted, n_primes = self.config.n_primes, "generation cancelled");
                return Ok(RunStatus::Cancelled { emitted });
            }
            let record = self.step()?;
            self.records.push(record);
            on_record(&record);
        }
        Ok(RunStatus::Completed)
    }

    /// Unbounded lazy variant: yields records indefinitely, consumer
    /// controls termination. Restart means building a new generator.
    pub fn into_stream(self) -> LawStream {
        LawStream {
            law: self,
            done: false,
        }
    }

    /// Snapshot the resumable state at the current record boundary.
    pub fn snapshot(&self) -> LawSnapshot {
        LawSnapshot {
            version: SNAPSHOT_VERSION,
            config: self.config.clone(),
            previous_prime: self.previous_prime,
            next_index: self.next_index,
            alphabet: self.classifier.alphabet().to_vec(),
            run: self.runs.state(),
            innovations: self.innovations.log().to_vec(),
            history: self.classifier.history().pairs().collect(),
        }
    }

    /// Rebuild a generator from a snapshot, validating every label.
    ///
    /// The restored generator continues at `next_index`; its `records`
    /// cover only what it emits from here on.
    pub fn restore(snapshot: LawSnapshot) -> LawResult<Self> {
        snapshot.validate()?;
        let LawSnapshot {
            config,
            previous_prime,
            next_index,
            alphabet,
            run,
            innovations,
            history,
            ..
        } = snapshot;

        let mut domains = DomainMapper::new();
        for entry in &alphabet {
            domains.domain_of(entry.first_index, entry.motif)?;
        }
        let innovations = RegimeInnovationDetector::rebuild(innovations).ok_or_else(|| {
            LawError::InvalidSnapshot("innovation log repeats a label".to_string())
        })?;
        let classifier = GapClassifier::rebuild(config.history_window, alphabet, history);

        info!(next_index, previous_prime, "generator restored from snapshot");
        Ok(Self {
            config,
            previous_prime,
            next_index,
            classifier,
            domains,
            runs: RunTracker::rebuild(run),
            innovations,
            records: Vec::new(),
            cache: None,
            cancel: None,
        })
    }

    /// Advance exactly one record.
    fn step(&mut self) -> LawResult<PrimeRecord> {
        let index = self.next_index;
        let (prime, gap) = self.advance(index)?;
        let motif = self.classifier.classify(index, gap)?;
        let run = self.runs.update(motif);
        let domain = self.domains.domain_of(index, motif)?;
        self.innovations.observe(index, motif, domain);

        self.previous_prime = prime;
        self.next_index += 1;
        if self.config.progress_every > 0 && index % self.config.progress_every == 0 {
            debug!(index, prime, alphabet = self.classifier.alphabet().len(), "progress");
        }
        Ok(PrimeRecord {
            index,
            prime,
            gap,
            motif,
            run,
            domain,
        })
    }

    /// Produce (prime, gap) for `index`: cache row if one covers it,
    /// otherwise the witness walk.
    fn advance(&mut self, index: u64) -> LawResult<(u64, u64)> {
        if let Some(row) = self.cached_row(index) {
            return match self.verify_cached(index, row) {
                Ok(pair) => Ok(pair),
                Err(err) => {
                    warn!(index, "cache disagrees with direct computation, discarding cache");
                    self.cache = None;
                    Err(err)
                }
            };
        }
        self.compute(index)
    }

    fn compute(&self, index: u64) -> LawResult<(u64, u64)> {
        if index == 1 {
            return Ok((2, 0));
        }
        let after = self.previous_prime;
        let span = self.config.search_span;
        let prime = witness::next_prime_after(after, span)
            .ok_or(LawError::Exhausted { index, after, span })?;
        Ok((prime, prime - after))
    }

    /// A cached row is trusted only if it equals direct computation.
    ///
    /// A row that skips a prime passes every local check (monotonic,
    /// witness-prime, gap arithmetic), so nothing short of the walk
    /// itself can vouch for it. Covered steps therefore recompute and
    /// compare, and any disagreement raises `CacheMismatch` — the run
    /// never silently prefers either source.
    fn verify_cached(&self, index: u64, row: GapRow) -> LawResult<(u64, u64)> {
        let (computed_prime, computed_gap) = self.compute(index)?;
        if row.prime == computed_prime && row.gap == computed_gap {
            return Ok((row.prime, row.gap));
        }
        Err(LawError::CacheMismatch {
            index,
            cached_prime: row.prime,
            cached_gap: row.gap,
            computed_prime,
            computed_gap,
        })
    }

    fn cached_row(&self, index: u64) -> Option<GapRow> {
        let rows = self.cache.as_deref()?;
        let at = rows.binary_search_by_key(&index, |r| r.index).ok()?;
        Some(rows[at])
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Unbounded record iterator over a consumed generator.
///
/// Yields `Err` at most once, then fuses.
pub struct LawStream {
    law: PrimeLaw,
    done: bool,
}

impl LawStream {
    /// The generator's state, for snapshotting mid-stream.
    pub fn law(&self) -> &PrimeLaw {
        &self.law
    }
}

impl Iterator for LawStream {
    type Item = LawResult<PrimeRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.law.is_cancelled() {
            self.done = true;
            return None;
        }
        match self.law.step() {
            Ok(record) => Some(Ok(record)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
