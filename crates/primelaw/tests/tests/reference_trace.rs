//! The published reference trace, checked record by record.
//!
//! The first 20 records pin down the whole symbolic layer: the seed
//! policy, the canonical motif rule, run lengths, domains, and the
//! exact innovation log.

use primelaw_engine::{LawConfig, PrimeLaw, RunStatus};
use primelaw_types::{InnovationLabel, RegimeInnovation};

const PRIMES: [u64; 20] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71,
];
const GAPS: [u64; 20] = [0, 1, 2, 2, 4, 2, 4, 2, 4, 6, 2, 6, 4, 2, 4, 6, 6, 2, 6, 4];
const MOTIFS: [&str; 20] = [
    "U0", "U1", "E1.0", "E1.0", "E1.1", "E1.0", "E1.1", "E1.0", "E1.1", "E2.0", "E1.0", "E2.0",
    "E1.1", "E1.0", "E1.1", "E2.0", "E2.0", "E1.0", "E2.0", "E1.1",
];
const RUNS: [u64; 20] = [1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1];

fn generate_20() -> PrimeLaw {
    let mut law = PrimeLaw::new(LawConfig::new(20));
    assert_eq!(law.generate().unwrap(), RunStatus::Completed);
    law
}

#[test]
fn first_twenty_records_match_the_trace() {
    let law = generate_20();
    let records = law.records();
    assert_eq!(records.len(), 20);

    for (at, record) in records.iter().enumerate() {
        assert_eq!(record.index, at as u64 + 1);
        assert_eq!(record.prime, PRIMES[at], "prime at index {}", at + 1);
        assert_eq!(record.gap, GAPS[at], "gap at index {}", at + 1);
        assert_eq!(
            record.motif.to_string(),
            MOTIFS[at],
            "motif at index {}",
            at + 1
        );
        assert_eq!(record.run, RUNS[at], "run at index {}", at + 1);
        assert_eq!(
            record.domain,
            record.motif.domain(),
            "domain at index {}",
            at + 1
        );
    }
}

#[test]
fn index_ten_is_e2_0() {
    let law = generate_20();
    let record = law.records()[9];
    assert_eq!(record.prime, 29);
    assert_eq!(record.motif.to_string(), "E2.0");
    assert_eq!(record.domain.to_string(), "E2");
}

#[test]
fn primes_accessor_returns_the_ordered_primes() {
    let law = generate_20();
    assert_eq!(law.primes(), PRIMES);
}

#[test]
fn innovation_log_matches_the_trace() {
    let law = generate_20();
    let expected = vec![
        RegimeInnovation::motif(1, "U0".parse().unwrap()),
        RegimeInnovation::domain(1, "U0".parse().unwrap()),
        RegimeInnovation::motif(2, "U1".parse().unwrap()),
        RegimeInnovation::domain(2, "U1".parse().unwrap()),
        RegimeInnovation::motif(3, "E1.0".parse().unwrap()),
        RegimeInnovation::domain(3, "E1".parse().unwrap()),
        RegimeInnovation::motif(5, "E1.1".parse().unwrap()),
        RegimeInnovation::motif(10, "E2.0".parse().unwrap()),
        RegimeInnovation::domain(10, "E2".parse().unwrap()),
    ];
    assert_eq!(law.innovations(), expected);
}

#[test]
fn alphabet_grows_in_trace_order() {
    let law = generate_20();
    let alphabet: Vec<(String, u64, u64)> = law
        .alphabet()
        .iter()
        .map(|e| (e.motif.to_string(), e.gap, e.first_index))
        .collect();
    assert_eq!(
        alphabet,
        vec![
            ("U0".to_string(), 0, 1),
            ("U1".to_string(), 1, 2),
            ("E1.0".to_string(), 2, 3),
            ("E1.1".to_string(), 4, 5),
            ("E2.0".to_string(), 6, 10),
        ]
    );
}

#[test]
fn innovation_labels_split_by_kind() {
    let law = generate_20();
    let motifs = law
        .innovations()
        .iter()
        .filter(|i| matches!(i.label, InnovationLabel::Motif(_)))
        .count();
    let domains = law
        .innovations()
        .iter()
        .filter(|i| matches!(i.label, InnovationLabel::Domain(_)))
        .count();
    assert_eq!(motifs, 5);
    assert_eq!(domains, 4);
}
