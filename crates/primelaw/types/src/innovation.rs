//! Regime innovations
//!
//! An innovation marks the first time a motif or a domain appears in the
//! sequence. Each label innovates exactly once per run; a single index can
//! contribute up to two innovations (a new motif whose domain is also new).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Domain, Motif};

/// The label that innovated: either a motif or a domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InnovationLabel {
    Motif(Motif),
    Domain(Domain),
}

impl InnovationLabel {
    /// Short tag used in output columns.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Motif(_) => "motif",
            Self::Domain(_) => "domain",
        }
    }
}

impl fmt::Display for InnovationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Motif(m) => m.fmt(f),
            Self::Domain(d) => d.fmt(f),
        }
    }
}

/// First sighting of a motif or domain, at the record index where it
/// entered the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeInnovation {
    /// Index of the record that introduced the label.
    pub index: u64,
    /// The label seen for the first time.
    pub label: InnovationLabel,
}

impl RegimeInnovation {
    pub fn motif(index: u64, motif: Motif) -> Self {
        Self {
            index,
            label: InnovationLabel::Motif(motif),
        }
    }

    pub fn domain(index: u64, domain: Domain) -> Self {
        Self {
            index,
            label: InnovationLabel::Domain(domain),
        }
    }
}
