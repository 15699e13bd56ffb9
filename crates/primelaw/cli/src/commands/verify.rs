//! Verify command
//!
//! Replays generation and compares every covered index against the
//! cache rows, reporting the first divergence as an error through the
//! normal exit path.

use crate::error::{CliError, CliResult};
use crate::output::{print_success, OutputFormat};
use clap::Args;
use primelaw_engine::{LawConfig, PrimeLaw};
use primelaw_store::SequenceCache;
use std::path::PathBuf;

/// Verify arguments
#[derive(Args)]
pub struct VerifyArgs {
    /// Gap cache CSV to verify
    #[arg(long)]
    cache: PathBuf,

    /// Verify only the first N rows (default: the whole file)
    #[arg(short, long)]
    n_primes: Option<u64>,
}

/// Execute the verify command
pub fn execute(args: VerifyArgs, _format: OutputFormat) -> CliResult<()> {
    let cache = SequenceCache::load(&args.cache)?;
    let covered = cache.len() as u64;
    let n = args.n_primes.unwrap_or(covered).min(covered);

    let mut law = PrimeLaw::new(LawConfig::new(n));
    law.generate()?;

    for (record, row) in law.records().iter().zip(cache.rows()) {
        if record.prime != row.prime || record.gap != row.gap {
            return Err(CliError::Verification {
                index: record.index,
                cached_prime: row.prime,
                cached_gap: row.gap,
                computed_prime: record.prime,
                computed_gap: record.gap,
            });
        }
    }

    print_success(&format!(
        "{} agrees with direct computation for {n} records",
        args.cache.display()
    ));
    Ok(())
}
