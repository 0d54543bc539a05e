//! Fetch command implementation.

use crate::cli::FetchArgs;
use crate::error::add_symbol_context;
use crate::output::OutputFormatter;
use crate::progress::DownloadProgress;
use anyhow::Context;
use anyhow::Result;
use dbgsym_core::extract_symbols;
use dbgsym_core::load_index;
use dbgsym_core::net::MirrorClient;
use std::env;

pub fn execute(args: &FetchArgs, formatter: &dyn OutputFormatter, quiet: bool) -> Result<()> {
    let source = args.source.to_source();

    let index = add_symbol_context(load_index(&source, args.source.refresh), &source.mirror_url)?;
    let file_name = add_symbol_context(
        index.resolve(&args.version).map(str::to_string),
        &source.mirror_url,
    )?;

    let client = MirrorClient::new(source.mirror_url.clone());

    // Show a progress bar only on an interactive terminal.
    let ddeb = if !quiet && DownloadProgress::should_show() {
        let mut progress = DownloadProgress::new(&file_name);
        add_symbol_context(
            client.download_with_progress(&file_name, |bytes, total| progress.update(bytes, total)),
            &file_name,
        )?
    } else {
        add_symbol_context(client.download(&file_name), &file_name)?
    };

    let output_dir = match &args.output_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let report = add_symbol_context(extract_symbols(&ddeb, &output_dir), &file_name)?;

    formatter.format_extraction_result(&report)?;

    Ok(())
}
