//! Property tests: generation is a pure function of its configuration.
//!
//! Two fresh generators with the same target must produce identical
//! records, and the shape invariants (index sequence, prime
//! monotonicity, gap arithmetic) hold for every prefix length.

use primelaw_engine::{LawConfig, PrimeLaw, RunStatus};
use primelaw_types::PrimeRecord;
use proptest::prelude::*;

fn generate(n: u64) -> Vec<PrimeRecord> {
    let mut law = PrimeLaw::new(LawConfig::new(n));
    assert_eq!(law.generate().unwrap(), RunStatus::Completed);
    law.records().to_vec()
}

proptest! {
    /// Two fresh runs are byte-for-byte identical.
    #[test]
    fn generation_is_deterministic(n in 1u64..150) {
        prop_assert_eq!(generate(n), generate(n));
    }

    /// Exactly n records, index 1..=n, primes strictly increasing.
    #[test]
    fn records_are_shaped_correctly(n in 1u64..150) {
        let records = generate(n);
        prop_assert_eq!(records.len() as u64, n);
        for (at, record) in records.iter().enumerate() {
            prop_assert_eq!(record.index, at as u64 + 1);
        }
        for pair in records.windows(2) {
            prop_assert!(pair[0].prime < pair[1].prime);
        }
    }

    /// gap[i] == prime[i] - prime[i-1] for i > 1; the seed gap is 0.
    #[test]
    fn gap_arithmetic_holds(n in 1u64..150) {
        let records = generate(n);
        prop_assert_eq!(records[0].gap, 0);
        prop_assert_eq!(records[0].prime, 2);
        for pair in records.windows(2) {
            prop_assert_eq!(pair[1].gap, pair[1].prime - pair[0].prime);
        }
    }

    /// A longer run is an extension of a shorter one, never a rewrite.
    #[test]
    fn prefixes_are_stable(n in 2u64..100, extra in 1u64..50) {
        let short = generate(n);
        let long = generate(n + extra);
        prop_assert_eq!(&short[..], &long[..n as usize]);
    }

    /// The bounded stream and generate agree.
    #[test]
    fn stream_matches_generate(n in 1u64..100) {
        let streamed: Vec<PrimeRecord> = PrimeLaw::new(LawConfig::new(n))
            .into_stream()
            .take(n as usize)
            .map(|r| r.unwrap())
            .collect();
        prop_assert_eq!(streamed, generate(n));
    }
}
