//! Error types for the Prime Law

use crate::{Domain, Motif};

/// A motif or domain label that does not follow the canonical scheme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid label: '{0}'")]
pub struct ParseLabelError(pub String);

/// Violations of the classification invariants.
///
/// These are fatal: they mean either an impossible gap was observed or a
/// registry was asked to contradict an existing entry.
#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    #[error("Gap {gap} at index {index} has no motif: {reason}")]
    UnclassifiableGap {
        index: u64,
        gap: u64,
        reason: String,
    },

    #[error("Motif table conflict for gap {gap} at index {index}: registered {registered}, derived {derived}")]
    MotifConflict {
        index: u64,
        gap: u64,
        registered: Motif,
        derived: Motif,
    },

    #[error("Domain conflict for motif {motif} at index {index}: table has {found}, derived {expected}")]
    DomainConflict {
        index: u64,
        motif: Motif,
        expected: Domain,
        found: Domain,
    },
}

/// Errors surfaced by the generator.
#[derive(Debug, thiserror::Error)]
pub enum LawError {
    #[error("No prime within {span} candidates after {after} (index {index})")]
    Exhausted { index: u64, after: u64, span: u64 },

    #[error("Classification error: {0}")]
    Classification(#[from] ClassifyError),

    #[error(
        "Cache mismatch at index {index}: cached prime {cached_prime} (gap {cached_gap}), \
         computed prime {computed_prime} (gap {computed_gap})"
    )]
    CacheMismatch {
        index: u64,
        cached_prime: u64,
        cached_gap: u64,
        computed_prime: u64,
        computed_gap: u64,
    },

    #[error("Snapshot rejected: {0}")]
    InvalidSnapshot(String),
}

/// Result type alias for law operations
pub type LawResult<T> = Result<T, LawError>;
