//! Regime innovation detection
//!
//! An innovation is the first sighting of a motif or a domain. A single
//! index can contribute up to two innovations: a new motif whose domain
//! is also new. The detector keeps the full ordered log so replaying a
//! prefix reproduces the identical list.

use primelaw_types::{Domain, InnovationLabel, Motif, RegimeInnovation};
use std::collections::HashSet;
use tracing::info;

/// Detects first occurrences of motifs and domains.
#[derive(Debug, Default)]
pub struct RegimeInnovationDetector {
    seen_motifs: HashSet<Motif>,
    seen_domains: HashSet<Domain>,
    log: Vec<RegimeInnovation>,
}

impl RegimeInnovationDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the detector from a saved innovation log.
    ///
    /// Returns `None` if the log repeats a label; each label innovates
    /// at most once per run.
    pub(crate) fn rebuild(log: Vec<RegimeInnovation>) -> Option<Self> {
        let mut detector = Self::new();
        for innovation in &log {
            let fresh = match innovation.label {
                InnovationLabel::Motif(m) => detector.seen_motifs.insert(m),
                InnovationLabel::Domain(d) => detector.seen_domains.insert(d),
            };
            if !fresh {
                return None;
            }
        }
        detector.log = log;
        Some(detector)
    }

    /// Record the (motif, domain) pair emitted at `index`; returns the
    /// innovations it introduced, motif-level before domain-level.
    pub fn observe(&mut self, index: u64, motif: Motif, domain: Domain) -> Vec<RegimeInnovation> {
        let mut novel = Vec::new();
        if self.seen_motifs.insert(motif) {
            let innovation = RegimeInnovation::motif(index, motif);
            info!(index, label = %motif, "regime innovation: new motif");
            self.log.push(innovation);
            novel.push(innovation);
        }
        if self.seen_domains.insert(domain) {
            let innovation = RegimeInnovation::domain(index, domain);
            info!(index, label = %domain, "regime innovation: new domain");
            self.log.push(innovation);
            novel.push(innovation);
        }
        novel
    }

    /// All innovations so far, ordered by index ascending.
    pub fn log(&self) -> &[RegimeInnovation] {
        &self.log
    }
}
