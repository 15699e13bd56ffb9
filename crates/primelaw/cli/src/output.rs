//! Output formatting utilities

use colored::*;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    Table,
    /// JSON format
    Json,
    /// CSV rows, header first
    Csv,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}

/// Print a vector of rows as a table or JSON.
///
/// CSV is column-set specific; commands render it themselves before
/// reaching for this helper.
pub fn print_output<T: Serialize + Tabled>(data: Vec<T>, format: OutputFormat) {
    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            if data.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                let table = Table::new(data).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&data) {
            Ok(json) => println!("{}", json),
            Err(e) => print_error(&format!("serialization failed: {e}")),
        },
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}
