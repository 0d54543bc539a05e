//! On-disk cache for the version index.
//!
//! The cache is a flat JSON object mapping lowercase kernel versions to
//! package file names. Load and store only; rebuilding is the caller's
//! decision.

use std::fs;
use std::path::Path;

use crate::Result;
use crate::VersionIndex;

/// Loads a version index from a cache file.
pub fn load(path: &Path) -> Result<VersionIndex> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Stores a version index to a cache file, replacing any previous one.
pub fn store(path: &Path, index: &VersionIndex) -> Result<()> {
    let data = serde_json::to_string(index)?;
    fs::write(path, data)?;
    Ok(())
}
