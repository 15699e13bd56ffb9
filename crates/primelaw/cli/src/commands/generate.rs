//! Generate command

use crate::error::{CliError, CliResult};
use crate::output::{self, print_success, print_warning, OutputFormat};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use primelaw_engine::{LawConfig, PrimeLaw, RunStatus, DEFAULT_SEARCH_SPAN};
use primelaw_store::{records_to_csv, save_snapshot, write_records, SequenceCache};
use primelaw_types::{GapRow, LawError, PrimeRecord};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tabled::Tabled;
use tracing::warn;

/// Generate arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Number of records to generate
    #[arg(short, long, env = "PRIMELAW_N_PRIMES", default_value_t = 20)]
    n_primes: u64,

    /// Gap-sequence cache CSV consulted before each witness walk
    #[arg(long)]
    cache: Option<PathBuf>,

    /// Export the record stream as CSV to this path
    #[arg(long)]
    export: Option<PathBuf>,

    /// Save a resumable snapshot when the run stops
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Candidates examined per step before the search is exhausted
    #[arg(long, default_value_t = DEFAULT_SEARCH_SPAN)]
    search_span: u64,

    /// Show a progress bar
    #[arg(long)]
    progress: bool,
}

/// Table row for record display
#[derive(Debug, Serialize, Tabled)]
struct RecordRow {
    index: u64,
    prime: u64,
    gap: u64,
    motif: String,
    run: u64,
    domain: String,
}

impl From<&PrimeRecord> for RecordRow {
    fn from(r: &PrimeRecord) -> Self {
        Self {
            index: r.index,
            prime: r.prime,
            gap: r.gap,
            motif: r.motif.to_string(),
            run: r.run,
            domain: r.domain.to_string(),
        }
    }
}

/// Execute the generate command
pub async fn execute(args: GenerateArgs, format: OutputFormat) -> CliResult<()> {
    let cache_rows = match &args.cache {
        Some(path) => Some(SequenceCache::load(path)?.into_rows()),
        None => None,
    };

    // Ctrl-C raises the cooperative cancellation flag; the generator
    // checks it once per emitted record.
    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.store(true, Ordering::Relaxed);
            }
        });
    }

    let config = LawConfig::new(args.n_primes).with_search_span(args.search_span);
    let outcome = run(config.clone(), cache_rows, cancel.clone(), args.progress).await;
    let (law, status) = match outcome {
        Ok(done) => done,
        Err(CliError::Law(LawError::CacheMismatch { index, .. })) if args.cache.is_some() => {
            // Retry exactly once, without the cache.
            warn!(index, "cache mismatch, rerunning without cache");
            print_warning(&format!(
                "cache disagrees with direct computation at index {index}; retrying without cache"
            ));
            run(config, None, cancel, args.progress).await?
        }
        Err(e) => return Err(e),
    };

    if let RunStatus::Cancelled { emitted } = status {
        print_warning(&format!(
            "cancelled after {emitted} of {} records",
            args.n_primes
        ));
    }

    match format {
        OutputFormat::Csv => print!("{}", records_to_csv(law.records())),
        _ => {
            let rows: Vec<RecordRow> = law.records().iter().map(RecordRow::from).collect();
            output::print_output(rows, format);
        }
    }

    if let Some(path) = &args.export {
        write_records(path, law.records())?;
        print_success(&format!("Exported {} records to {}", law.records().len(), path.display()));
    }
    if let Some(path) = &args.snapshot {
        save_snapshot(path, &law.snapshot())?;
        print_success(&format!("Snapshot saved to {}", path.display()));
    }
    if matches!(format, OutputFormat::Table) {
        print_success(&format!(
            "Generated {} records ({} innovations, alphabet size {})",
            law.records().len(),
            law.innovations().len(),
            law.alphabet().len(),
        ));
    }
    Ok(())
}

/// Run generation on a blocking worker that owns the whole state.
async fn run(
    config: LawConfig,
    cache: Option<Vec<GapRow>>,
    cancel: Arc<AtomicBool>,
    progress: bool,
) -> CliResult<(PrimeLaw, RunStatus)> {
    let n_primes = config.n_primes;
    tokio::task::spawn_blocking(move || {
        let mut law = PrimeLaw::new(config).with_cancel(cancel);
        if let Some(rows) = cache {
            law = law.with_cache(rows);
        }

        let bar = progress.then(|| {
            let bar = ProgressBar::new(n_primes);
            if let Ok(style) =
                ProgressStyle::default_bar().template("{bar:40.green} {pos}/{len} {msg}")
            {
                bar.set_style(style);
            }
            bar
        });
        let status = match &bar {
            Some(bar) => law.generate_with(|record| {
                bar.set_position(record.index);
                bar.set_message(record.motif.to_string());
            })?,
            None => law.generate()?,
        };
        if let Some(bar) = bar {
            bar.finish_and_clear();
        }
        Ok((law, status))
    })
    .await
    .map_err(|e| CliError::Internal(format!("generation worker failed: {e}")))?
}
