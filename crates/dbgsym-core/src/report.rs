//! Extraction result reporting.

use serde::Serialize;

/// Outcome of a successful symbol extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    /// Name of the file written to the destination directory.
    pub file_name: String,

    /// Envelope member the symbol file came out of.
    pub source_member: String,

    /// Bytes written to disk.
    pub bytes_written: u64,
}
