//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::add_symbol_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use dbgsym_core::extract_symbols;
use std::env;
use std::fs;

pub fn execute(args: &ExtractArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let ddeb = fs::read(&args.ddeb)
        .with_context(|| format!("failed to read '{}'", args.ddeb.display()))?;

    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let subject = args.ddeb.display().to_string();
    let report = add_symbol_context(extract_symbols(&ddeb, &output_dir), &subject)?;

    formatter.format_extraction_result(&report)?;

    Ok(())
}
