//! Domain mapping
//!
//! Domains are motifs with their sub-index stripped. The mapping is a
//! fixed deterministic rule, but the mapper still keeps an explicit
//! table so the one-domain-per-motif invariant is checked on every
//! lookup instead of assumed.

use primelaw_types::{ClassifyError, Domain, Motif};
use std::collections::HashMap;

/// Maps motifs to their domains, enforcing stability across the run.
#[derive(Debug, Default)]
pub struct DomainMapper {
    table: HashMap<Motif, Domain>,
}

impl DomainMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// The domain for `motif`, registering it on first sight.
    ///
    /// A table entry that disagrees with the freshly derived domain
    /// means the mapping has drifted mid-run, which the law forbids.
    pub fn domain_of(&mut self, index: u64, motif: Motif) -> Result<Domain, ClassifyError> {
        let expected = motif.domain();
        match self.table.get(&motif) {
            Some(&found) if found != expected => Err(ClassifyError::DomainConflict {
                index,
                motif,
                expected,
                found,
            }),
            Some(&found) => Ok(found),
            None => {
                self.table.insert(motif, expected);
                Ok(expected)
            }
        }
    }

    /// Number of distinct motifs mapped so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
