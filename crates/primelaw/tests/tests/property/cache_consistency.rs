//! Property tests: caches accelerate but never alter or silently
//! override generation.

use primelaw_engine::{LawConfig, PrimeLaw, RunStatus};
use primelaw_types::{GapRow, LawError};
use proptest::prelude::*;

fn rows_for(n: u64) -> Vec<GapRow> {
    let mut law = PrimeLaw::new(LawConfig::new(n));
    law.generate().unwrap();
    law.records()
        .iter()
        .map(|r| GapRow {
            index: r.index,
            prime: r.prime,
            gap: r.gap,
        })
        .collect()
}

proptest! {
    /// A faithful cache yields records identical to direct computation,
    /// including runs and innovations (cached steps still classify).
    #[test]
    fn faithful_cache_changes_nothing(n in 1u64..120) {
        let mut direct = PrimeLaw::new(LawConfig::new(n));
        direct.generate().unwrap();

        let mut cached = PrimeLaw::new(LawConfig::new(n)).with_cache(rows_for(n));
        prop_assert_eq!(cached.generate().unwrap(), RunStatus::Completed);
        prop_assert_eq!(cached.records(), direct.records());
        prop_assert_eq!(cached.innovations(), direct.innovations());
    }

    /// A partial cache covers a prefix; the rest is computed directly.
    #[test]
    fn partial_cache_changes_nothing(n in 2u64..120, covered in 1u64..119) {
        let covered = covered.min(n);
        let mut direct = PrimeLaw::new(LawConfig::new(n));
        direct.generate().unwrap();

        let mut rows = rows_for(n);
        rows.truncate(covered as usize);
        let mut cached = PrimeLaw::new(LawConfig::new(n)).with_cache(rows);
        cached.generate().unwrap();
        prop_assert_eq!(cached.records(), direct.records());
    }

    /// A corrupted row raises CacheMismatch at exactly the corrupted
    /// index; neither source is silently preferred.
    #[test]
    fn corrupted_cache_is_rejected(n in 3u64..100, at in 1usize..99) {
        let mut rows = rows_for(n);
        let at = at.min(rows.len() - 1).max(1);
        // An off-by-one prime is even, hence composite, and breaks gap
        // arithmetic as well.
        rows[at].prime += 1;

        let mut law = PrimeLaw::new(LawConfig::new(n)).with_cache(rows.clone());
        let err = law.generate().unwrap_err();
        match err {
            LawError::CacheMismatch { index, cached_prime, .. } => {
                prop_assert_eq!(index, at as u64 + 1);
                prop_assert_eq!(cached_prime, rows[at].prime);
            }
            other => return Err(TestCaseError::fail(format!("expected CacheMismatch, got {other}"))),
        }

        // The failed step mutated no state and the cache is discarded;
        // the same generator finishes the run by direct computation.
        prop_assert_eq!(law.generate().unwrap(), RunStatus::Completed);
        let mut direct = PrimeLaw::new(LawConfig::new(n));
        direct.generate().unwrap();
        prop_assert_eq!(law.records(), direct.records());
    }

    /// A row that skips a prime is locally flawless (prime, monotonic,
    /// consistent gap) and can only be caught by comparing against the
    /// walk; the generator must still raise CacheMismatch.
    #[test]
    fn skipping_cache_is_rejected(n in 3u64..100, at in 1usize..99) {
        let beyond = rows_for(n + 1);
        let mut rows = beyond[..n as usize].to_vec();
        let at = at.min(rows.len() - 2).max(1);
        // Replace the row with its successor's prime, keeping gap
        // arithmetic against the predecessor intact.
        rows[at].prime = beyond[at + 1].prime;
        rows[at].gap = rows[at].prime - rows[at - 1].prime;

        let mut law = PrimeLaw::new(LawConfig::new(n)).with_cache(rows.clone());
        match law.generate().unwrap_err() {
            LawError::CacheMismatch { index, cached_prime, computed_prime, .. } => {
                prop_assert_eq!(index, at as u64 + 1);
                prop_assert_eq!(cached_prime, rows[at].prime);
                prop_assert_eq!(computed_prime, beyond[at].prime);
            }
            other => return Err(TestCaseError::fail(format!("expected CacheMismatch, got {other}"))),
        }

        // Never a silent preference: nothing from the corrupt row was
        // emitted, and the discarded cache plays no further part.
        prop_assert_eq!(law.generate().unwrap(), RunStatus::Completed);
        let mut direct = PrimeLaw::new(LawConfig::new(n));
        direct.generate().unwrap();
        prop_assert_eq!(law.records(), direct.records());
    }
}
