//! High-level public API for symbol extraction and index management.

use std::path::Path;

use crate::ExtractionReport;
use crate::Result;
use crate::SymbolSource;
use crate::VersionIndex;
use crate::cache;
use crate::extraction::selector;
use crate::formats::ar;
use crate::formats::codec;
use crate::net::MirrorClient;

/// Extracts the kernel debug-symbol file out of an in-memory ddeb.
///
/// Runs the whole pipeline: parse the ar envelope, locate the data
/// member, normalize its compression, select the unique symbol file in
/// the data tar, and write it to `dest_dir` under its base name.
///
/// # Errors
///
/// Propagates the first failure of any stage unchanged: a malformed
/// envelope, a corrupt zstd payload, an ambiguous symbol-file match,
/// or an I/O failure during the final write.
///
/// # Examples
///
/// ```no_run
/// use dbgsym_core::extract_symbols;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let ddeb = std::fs::read("linux-image-5.15.0-76-generic-dbgsym.ddeb")?;
/// let report = extract_symbols(&ddeb, std::path::Path::new("."))?;
/// println!("wrote {}", report.file_name);
/// # Ok(())
/// # }
/// ```
pub fn extract_symbols(ddeb: &[u8], dest_dir: &Path) -> Result<ExtractionReport> {
    let members = ar::parse(ddeb)?;
    let data_member = ar::find_data_member(&members)?;

    let payload = codec::normalize(data_member, data_member.data(ddeb).to_vec())?;
    let selection = selector::select(&payload)?;
    let bytes_written = selector::extract_to(&payload, &selection, dest_dir)?;

    Ok(ExtractionReport {
        file_name: selection.output_name,
        source_member: data_member.name.clone(),
        bytes_written,
    })
}

/// Loads the version index from the source's cache file, or scrapes
/// the mirror and rebuilds it.
///
/// The mirror is consulted when `refresh` is set or no cache file
/// exists; a rebuilt index is stored back to the cache path before it
/// is returned.
///
/// # Errors
///
/// Returns listing, transfer, or duplicate-version errors from a
/// rebuild, and cache decode or I/O errors from a cache load.
pub fn load_index(source: &SymbolSource, refresh: bool) -> Result<VersionIndex> {
    if !refresh && source.cache_path.exists() {
        tracing::debug!(path = %source.cache_path.display(), "using cached package list");
        return cache::load(&source.cache_path);
    }

    tracing::info!(url = %source.mirror_url, "scraping package list from mirror");
    let client = MirrorClient::new(source.mirror_url.clone());
    let names = client.list_file_names()?;
    let index = VersionIndex::build(names, &source.arch)?;
    cache::store(&source.cache_path, &index)?;
    Ok(index)
}
