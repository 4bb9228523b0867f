//! pubtidy command-line entry point

use clap::Parser;
use pubtidy_cli::commands::Commands;

/// Reconstruct and clean line-oriented bibliographic exports
#[derive(Debug, Parser)]
#[command(name = "pubtidy", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
