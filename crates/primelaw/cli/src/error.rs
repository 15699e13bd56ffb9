//! CLI error type

use primelaw_store::StoreError;
use primelaw_types::LawError;

/// Errors surfaced to the terminal.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Law(#[from] LawError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No prime within {span} candidates after {after}")]
    Exhausted { after: u64, span: u64 },

    #[error(
        "Cache verification failed at index {index}: cache has prime {cached_prime} \
         (gap {cached_gap}), computed prime {computed_prime} (gap {computed_gap})"
    )]
    Verification {
        index: u64,
        cached_prime: u64,
        cached_gap: u64,
        computed_prime: u64,
        computed_gap: u64,
    },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Internal(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;
