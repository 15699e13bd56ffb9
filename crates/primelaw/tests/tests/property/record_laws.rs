//! Property tests: per-record symbolic invariants.
//!
//! Motifs re-derive from their gaps, domains re-derive from their
//! motifs, run lengths follow the consecutive-repeat law, and the
//! innovation log is ordered with each label appearing exactly once.

use primelaw_engine::{LawConfig, PrimeLaw};
use primelaw_types::{InnovationLabel, Motif};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    /// Every stored motif is the canonical label for its gap, and every
    /// stored domain is the motif's family prefix.
    #[test]
    fn labels_re_derive(n in 1u64..200) {
        let mut law = PrimeLaw::new(LawConfig::new(n));
        law.generate().unwrap();
        for record in law.records() {
            prop_assert_eq!(Motif::from_gap(record.gap), Some(record.motif));
            prop_assert_eq!(record.motif.domain(), record.domain);
            prop_assert_eq!(record.motif.gap(), Some(record.gap));
        }
    }

    /// run[i] == run[i-1] + 1 when the motif repeats, else 1.
    #[test]
    fn run_length_law(n in 1u64..200) {
        let mut law = PrimeLaw::new(LawConfig::new(n));
        law.generate().unwrap();
        let records = law.records();
        prop_assert_eq!(records[0].run, 1);
        for pair in records.windows(2) {
            if pair[0].motif == pair[1].motif {
                prop_assert_eq!(pair[1].run, pair[0].run + 1);
            } else {
                prop_assert_eq!(pair[1].run, 1);
            }
        }
    }

    /// Innovations are ordered by index, each label exactly once, and
    /// every innovation points at the record that introduced its label.
    #[test]
    fn innovation_log_is_well_formed(n in 1u64..200) {
        let mut law = PrimeLaw::new(LawConfig::new(n));
        law.generate().unwrap();
        let innovations = law.innovations();

        for pair in innovations.windows(2) {
            prop_assert!(pair[0].index <= pair[1].index);
        }
        let labels: HashSet<InnovationLabel> = innovations.iter().map(|i| i.label).collect();
        prop_assert_eq!(labels.len(), innovations.len());

        // First occurrence in the records matches the logged index.
        for innovation in innovations {
            let first = law
                .records()
                .iter()
                .find(|r| match innovation.label {
                    InnovationLabel::Motif(m) => r.motif == m,
                    InnovationLabel::Domain(d) => r.domain == d,
                })
                .expect("innovated label never appears in records");
            prop_assert_eq!(first.index, innovation.index);
        }
    }

    /// The alphabet lists each motif once, at the index of its debut.
    #[test]
    fn alphabet_matches_records(n in 1u64..200) {
        let mut law = PrimeLaw::new(LawConfig::new(n));
        law.generate().unwrap();

        let mut seen = HashSet::new();
        let mut debuts = Vec::new();
        for record in law.records() {
            if seen.insert(record.motif) {
                debuts.push((record.gap, record.motif, record.index));
            }
        }
        let alphabet: Vec<_> = law
            .alphabet()
            .iter()
            .map(|e| (e.gap, e.motif, e.first_index))
            .collect();
        prop_assert_eq!(alphabet, debuts);
    }
}
