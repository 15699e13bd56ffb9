//! Innovations command

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use clap::Args;
use primelaw_engine::{LawConfig, PrimeLaw};
use serde::Serialize;
use tabled::Tabled;

/// Innovations arguments
#[derive(Args)]
pub struct InnovationsArgs {
    /// Number of records to generate before listing innovations
    #[arg(short, long, env = "PRIMELAW_N_PRIMES", default_value_t = 100)]
    n_primes: u64,
}

/// Table row for innovation display
#[derive(Debug, Serialize, Tabled)]
struct InnovationRow {
    index: u64,
    prime: u64,
    kind: &'static str,
    label: String,
}

/// Execute the innovations command
pub fn execute(args: InnovationsArgs, format: OutputFormat) -> CliResult<()> {
    let mut law = PrimeLaw::new(LawConfig::new(args.n_primes));
    law.generate()?;

    let rows: Vec<InnovationRow> = law
        .innovations()
        .iter()
        .map(|innovation| InnovationRow {
            index: innovation.index,
            prime: law.records()[(innovation.index - 1) as usize].prime,
            kind: innovation.label.kind(),
            label: innovation.label.to_string(),
        })
        .collect();

    if matches!(format, OutputFormat::Csv) {
        println!("index,prime,kind,label");
        for row in &rows {
            println!("{},{},{},{}", row.index, row.prime, row.kind, row.label);
        }
        return Ok(());
    }
    output::print_output(rows, format);
    Ok(())
}
