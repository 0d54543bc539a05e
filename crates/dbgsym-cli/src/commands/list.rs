//! List command implementation

use crate::cli::ListArgs;
use crate::error::add_symbol_context;
use crate::output::OutputFormatter;
use anyhow::Result;
use dbgsym_core::load_index;

pub fn execute(args: &ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let source = args.source.to_source();

    let index = add_symbol_context(load_index(&source, args.source.refresh), &source.mirror_url)?;

    let versions: Vec<&str> = index.versions().collect();
    formatter.format_version_list(&versions)?;

    Ok(())
}
