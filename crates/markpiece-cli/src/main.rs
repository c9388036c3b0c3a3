mod commands;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;

/// Boundary-marker BPE tokenizer command line.
///
/// Trains tokenizers from text corpora, and encodes/decodes against a
/// saved tokenizer snapshot.
#[derive(clap::Parser, Debug)]
#[command(name = "markpiece", version)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    Args::parse().command.run()
}
