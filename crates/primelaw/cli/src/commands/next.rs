//! Next-prime command

use crate::error::{CliError, CliResult};
use crate::output::{print_success, OutputFormat};
use clap::Args;
use primelaw_engine::{witness, DEFAULT_SEARCH_SPAN};
use serde::Serialize;

/// Next arguments
#[derive(Args)]
pub struct NextArgs {
    /// Advance from this number
    #[arg(long, conflicts_with = "exp", required_unless_present = "exp")]
    prime: Option<u64>,

    /// Mersenne form: advance from 2^EXP - 1
    #[arg(long)]
    exp: Option<u32>,

    /// Candidates examined before the search is exhausted
    #[arg(long, default_value_t = DEFAULT_SEARCH_SPAN)]
    search_span: u64,
}

#[derive(Serialize)]
struct NextOutput {
    after: u64,
    next: u64,
    gap: u64,
}

/// Execute the next command
pub fn execute(args: NextArgs, format: OutputFormat) -> CliResult<()> {
    let after = match (args.prime, args.exp) {
        (Some(p), None) => p,
        (None, Some(exp)) => {
            if exp == 0 || exp >= 64 {
                return Err(CliError::InvalidArgument(format!(
                    "--exp must be between 1 and 63, got {exp}"
                )));
            }
            (1u64 << exp) - 1
        }
        // clap enforces exactly one of the two.
        _ => unreachable!("clap guarantees exactly one of --prime/--exp"),
    };

    let next = witness::next_prime_after(after, args.search_span).ok_or(CliError::Exhausted {
        after,
        span: args.search_span,
    })?;
    let out = NextOutput {
        after,
        next,
        gap: next - after,
    };

    match format {
        OutputFormat::Table => {
            print_success(&format!(
                "next prime after {} is {} (gap {})",
                out.after, out.next, out.gap
            ));
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&out)
                    .map_err(|e| CliError::Internal(e.to_string()))?
            );
        }
        OutputFormat::Csv => {
            println!("after,next,gap");
            println!("{},{},{}", out.after, out.next, out.gap);
        }
    }
    Ok(())
}
