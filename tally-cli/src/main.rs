//! Command-line entry point for tally

use std::process::ExitCode;

use clap::Parser;
use tally_cli::commands::Commands;

/// Streaming text statistics: words, sentences, paragraphs and characters
#[derive(Debug, Parser)]
#[command(name = "tally", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
