//! Alphabet command

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use clap::Args;
use primelaw_engine::{LawConfig, PrimeLaw};
use serde::Serialize;
use tabled::Tabled;

/// Alphabet arguments
#[derive(Args)]
pub struct AlphabetArgs {
    /// Number of records to generate before reporting the alphabet
    #[arg(short, long, env = "PRIMELAW_N_PRIMES", default_value_t = 100)]
    n_primes: u64,
}

/// Table row for alphabet display
#[derive(Debug, Serialize, Tabled)]
struct AlphabetRow {
    position: usize,
    motif: String,
    domain: String,
    gap: u64,
    first_index: u64,
}

/// Execute the alphabet command
pub fn execute(args: AlphabetArgs, format: OutputFormat) -> CliResult<()> {
    let mut law = PrimeLaw::new(LawConfig::new(args.n_primes));
    law.generate()?;

    let rows: Vec<AlphabetRow> = law
        .alphabet()
        .iter()
        .enumerate()
        .map(|(at, entry)| AlphabetRow {
            position: at + 1,
            motif: entry.motif.to_string(),
            domain: entry.motif.domain().to_string(),
            gap: entry.gap,
            first_index: entry.first_index,
        })
        .collect();

    if matches!(format, OutputFormat::Csv) {
        println!("position,motif,domain,gap,first_index");
        for row in &rows {
            println!(
                "{},{},{},{},{}",
                row.position, row.motif, row.domain, row.gap, row.first_index
            );
        }
        return Ok(());
    }
    output::print_output(rows, format);
    Ok(())
}
