//! Prime Law CLI - terminal interface to the law generator
//!
//! Thin wrappers around `primelaw-engine` and `primelaw-store`:
//! - Generate the first N records (table, JSON, or CSV, optional export)
//! - Compute the single next prime after a given prime
//! - List regime innovations and the motif alphabet
//! - Verify a precomputed gap cache against direct computation

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

use commands::{alphabet, generate, innovations, next, verify};
use error::CliResult;
use output::print_error;

/// Prime Law CLI application
#[derive(Parser)]
#[command(name = "primelaw")]
#[command(about = "Prime Law - deterministic recursive prime-gap motif engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Generate the first N prime records
    Generate(generate::GenerateArgs),

    /// Compute the single next prime after a given prime
    Next(next::NextArgs),

    /// List regime innovations over the first N records
    Innovations(innovations::InnovationsArgs),

    /// Show the motif alphabet in first-seen order
    Alphabet(alphabet::AlphabetArgs),

    /// Check a gap cache against direct computation
    Verify(verify::VerifyArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let result: CliResult<()> = match cli.command {
        Commands::Generate(args) => generate::execute(args, cli.output).await,
        Commands::Next(args) => next::execute(args, cli.output),
        Commands::Innovations(args) => innovations::execute(args, cli.output),
        Commands::Alphabet(args) => alphabet::execute(args, cli.output),
        Commands::Verify(args) => verify::execute(args, cli.output),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
