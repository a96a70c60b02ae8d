//! # tally
//!
//! Prints a sales tax receipt for a purchase table.
//!
//! ```text
//! $ tally basket.csv
//! 1, book, 12.49
//! 1, music cd, 16.49
//!
//! Sales Taxes: 1.50
//! Total: 28.98
//! ```

mod config;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tally_core::{FileSink, ReceiptSink, SalesTax};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Calculate sales tax and print a receipt.")]
struct CommandLine {
    /// Purchase table to read, or `-` for stdin
    input: PathBuf,

    /// Write the receipt here instead of stdout (overwrites)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format [env: TALLY_FORMAT]
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    let args = CommandLine::parse();
    let config = CliConfig::load()?;
    init_tracing(&config);

    let input = read_input(&args.input)?;
    let computation = SalesTax::new().for_input(&input)?;

    let text = match args.format.unwrap_or(config.format) {
        OutputFormat::Text => computation.render()?,
        OutputFormat::Json => serde_json::to_string_pretty(computation.receipt())?,
    };

    match args.output {
        Some(path) => {
            FileSink::new(&path).write_receipt(&text)?;
            info!(path = %path.display(), "Receipt written");
        }
        None => println!("{text}"),
    }

    Ok(())
}

/// Initializes the tracing subscriber on stderr.
///
/// `RUST_LOG` wins over `TALLY_LOG`.
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
