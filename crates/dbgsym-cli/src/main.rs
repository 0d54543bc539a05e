//! Dbgsym CLI - Utility for downloading and extracting debug symbols
//! for Ubuntu kernels.

mod cli;
mod commands;
mod error;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    match &cli.command {
        cli::Commands::List(args) => commands::list::execute(args, &*formatter),
        cli::Commands::Fetch(args) => commands::fetch::execute(args, &*formatter, cli.quiet),
        cli::Commands::Extract(args) => commands::extract::execute(args, &*formatter),
        cli::Commands::Completion(args) => {
            commands::completion::execute(args.shell);
            Ok(())
        }
    }
}
