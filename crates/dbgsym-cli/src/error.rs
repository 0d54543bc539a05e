//! Error conversion utilities for CLI.
//!
//! Converts dbgsym-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use dbgsym_core::SymbolError;

/// Converts `SymbolError` to a user-friendly anyhow error with context
pub fn convert_symbol_error(err: SymbolError, subject: &str) -> anyhow::Error {
    match err {
        SymbolError::UnknownVersion { version } => {
            anyhow!(
                "No debug symbol package found for kernel '{version}'\n\
                 HINT: Run 'dbgsym list' to see available versions, or\n\
                 'dbgsym list --refresh' to re-scrape the mirror listing."
            )
        }
        SymbolError::AmbiguousMember { candidates } if candidates.is_empty() => {
            anyhow!(
                "No kernel symbol file found inside '{subject}'\n\
                 HINT: This does not look like a generic kernel ddeb."
            )
        }
        SymbolError::AmbiguousMember { candidates } => {
            anyhow!(
                "Several entries in '{subject}' look like kernel symbol files: {candidates:?}\n\
                 HINT: Refusing to guess; the package layout is unexpected."
            )
        }
        SymbolError::MalformedContainer(reason) => {
            anyhow!(
                "Cannot read '{subject}' as a Debian package: {reason}\n\
                 HINT: The file may be truncated or not a ddeb at all."
            )
        }
        SymbolError::UnsupportedCodec { codec, source } => {
            anyhow!(
                "The {codec} data in '{subject}' failed to decode: {source}\n\
                 HINT: The download may be corrupt; try fetching again."
            )
        }
        SymbolError::DuplicateVersion {
            version,
            existing,
            duplicate,
        } => {
            anyhow!(
                "The mirror listing claims kernel {version} twice:\n  {existing}\n  {duplicate}\n\
                 HINT: The listing is inconsistent; try again later or use another mirror."
            )
        }
        SymbolError::Listing(reason) => {
            anyhow!(
                "Could not read the package listing from '{subject}': {reason}\n\
                 HINT: The mirror index page format may have changed."
            )
        }
        SymbolError::Transfer(http_err) => {
            anyhow!(
                "Transfer from '{subject}' failed: {http_err}\n\
                 HINT: Check your network connection and the mirror URL."
            )
        }
        _ => anyhow::Error::from(err).context(format!("Error processing '{subject}'")),
    }
}

/// Adds context to a core result about the file or URL being processed
pub fn add_symbol_context<T>(result: Result<T, SymbolError>, subject: &str) -> anyhow::Result<T> {
    result.map_err(|e| convert_symbol_error(e, subject))
}
