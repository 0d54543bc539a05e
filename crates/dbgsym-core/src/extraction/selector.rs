//! Symbol-file selection and extraction from a tar stream.
//!
//! A kernel ddeb's data tar contains the debug image somewhere under
//! `usr/lib/debug/boot/`, alongside empty directories and metadata.
//! The selection heuristic keeps entries whose base name ends in
//! `generic` and that carry actual content, and insists on exactly one
//! survivor: guessing between several symbol files would silently hand
//! the debugger the wrong kernel.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::Result;
use crate::SymbolError;
use crate::formats::detect::TarFraming;

/// Base-name suffix identifying the generic kernel symbol file.
const SYMBOL_SUFFIX: &str = "generic";

/// Summary of one tar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarMember {
    /// Entry path as recorded in the archive, possibly nested.
    pub path: String,
    /// Declared content size in bytes.
    pub size: u64,
}

/// The single chosen tar entry plus its flattened output name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The entry that matched the heuristic.
    pub member: TarMember,
    /// Base name the file will be written under; every directory
    /// component of the archive path is discarded.
    pub output_name: String,
}

/// Enumerates the tar stream and selects the unique symbol file.
///
/// Framing (gzip, xz, bzip2, plain) is sniffed from the leading bytes,
/// so callers hand over the data member's payload as-is.
///
/// # Errors
///
/// Returns [`SymbolError::AmbiguousMember`] carrying all candidate
/// paths when zero or several entries match.
pub fn select(data: &[u8]) -> Result<Selection> {
    let framing = TarFraming::sniff(data);
    tracing::debug!(framing = framing.name(), "scanning data tar for symbol file");

    let mut archive = tar::Archive::new(framing.reader(data));
    let mut candidates = Vec::new();

    for entry in archive.entries()? {
        let entry = entry?;
        let path = entry.path()?.to_string_lossy().into_owned();
        let size = entry.size();
        if base_name(&path).ends_with(SYMBOL_SUFFIX) && size > 0 {
            candidates.push(TarMember { path, size });
        }
    }

    if candidates.len() != 1 {
        return Err(SymbolError::AmbiguousMember {
            candidates: candidates.into_iter().map(|m| m.path).collect(),
        });
    }

    let member = candidates.remove(0);
    let output_name = base_name(&member.path).to_string();
    Ok(Selection {
        member,
        output_name,
    })
}

/// Writes the selected entry's content to `dest_dir`, named by its base
/// name only, and returns the number of bytes written.
///
/// An existing file of the same name is overwritten. The content is
/// read fully before the write, so a failure earlier in the stream
/// leaves no partial file behind.
///
/// # Errors
///
/// Returns [`SymbolError::MalformedContainer`] if the selected entry is
/// no longer present in the stream, or an I/O error from reading or
/// writing.
pub fn extract_to(data: &[u8], selection: &Selection, dest_dir: &Path) -> Result<u64> {
    let framing = TarFraming::sniff(data);
    let mut archive = tar::Archive::new(framing.reader(data));

    for entry in archive.entries()? {
        let mut entry = entry?;
        let path = entry.path()?.to_string_lossy().into_owned();
        if path == selection.member.path {
            let mut content = Vec::with_capacity(selection.member.size as usize);
            entry.read_to_end(&mut content)?;

            let out_path = dest_dir.join(&selection.output_name);
            tracing::info!(path = %out_path.display(), "writing symbol file");
            fs::write(&out_path, &content)?;
            return Ok(content.len() as u64);
        }
    }

    Err(SymbolError::MalformedContainer(format!(
        "selected entry {} vanished from stream",
        selection.member.path
    )))
}

/// Final path segment of a tar entry path.
fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}
