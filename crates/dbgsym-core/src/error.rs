//! Error types for debug-symbol extraction operations.

use thiserror::Error;

/// Result type alias using `SymbolError`.
pub type Result<T> = std::result::Result<T, SymbolError>;

/// Errors that can occur while locating, downloading, or extracting
/// kernel debug symbols.
///
/// Every failure kind is a distinct variant so callers can match on it;
/// no stage retries or recovers silently. Picking the wrong symbol file
/// is worse than failing, so ambiguity is always an error.
#[derive(Error, Debug)]
pub enum SymbolError {
    /// The outer ar envelope could not be parsed, or its data member
    /// could not be identified.
    #[error("malformed package container: {0}")]
    MalformedContainer(String),

    /// A compression codec was recognized by name but its payload did
    /// not decode.
    #[error("unsupported codec {codec}: corrupt stream")]
    UnsupportedCodec {
        /// Name of the codec that failed to decode.
        codec: String,
        /// The underlying decode failure.
        #[source]
        source: std::io::Error,
    },

    /// The symbol-file heuristic matched zero or several tar entries.
    #[error("could not identify a unique symbol file, candidates: {candidates:?}")]
    AmbiguousMember {
        /// Paths of all entries that matched the heuristic.
        candidates: Vec<String>,
    },

    /// Two package names in the listing claim the same kernel version.
    #[error("kernel {version} has multiple debug symbol packages: {existing}, {duplicate}")]
    DuplicateVersion {
        /// The normalized version key claimed twice.
        version: String,
        /// File name already registered for this version.
        existing: String,
        /// File name that collided with it.
        duplicate: String,
    },

    /// The requested kernel version is not present in the index.
    #[error("no debug symbol package known for kernel {version}")]
    UnknownVersion {
        /// The normalized version that missed.
        version: String,
    },

    /// The mirror index page did not contain the expected hyperlink
    /// structure.
    #[error("unusable package listing: {0}")]
    Listing(String),

    /// HTTP transfer failed.
    #[error("transfer failed: {0}")]
    Transfer(#[from] reqwest::Error),

    /// The version cache file could not be decoded.
    #[error("invalid version cache: {0}")]
    Cache(#[from] serde_json::Error),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SymbolError {
    /// Returns `true` if this error came from a collaborator (network,
    /// listing shape, cache file) rather than from the extraction
    /// pipeline itself.
    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(
            self,
            Self::Listing(_) | Self::Transfer(_) | Self::Cache(_) | Self::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SymbolError::MalformedContainer("missing magic".to_string());
        assert_eq!(
            err.to_string(),
            "malformed package container: missing magic"
        );
    }

    #[test]
    fn test_ambiguous_member_lists_candidates() {
        let err = SymbolError::AmbiguousMember {
            candidates: vec!["a/vmlinux-generic".to_string(), "b/vmlinux-generic".to_string()],
        };
        let display = err.to_string();
        assert!(display.contains("a/vmlinux-generic"));
        assert!(display.contains("b/vmlinux-generic"));
    }

    #[test]
    fn test_duplicate_version_names_both_files() {
        let err = SymbolError::DuplicateVersion {
            version: "5.15.0-76".to_string(),
            existing: "first.ddeb".to_string(),
            duplicate: "second.ddeb".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("5.15.0-76"));
        assert!(display.contains("first.ddeb"));
        assert!(display.contains("second.ddeb"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SymbolError = io_err.into();
        assert!(matches!(err, SymbolError::Io(_)));
        assert!(err.is_external());
    }

    #[test]
    fn test_pipeline_errors_are_not_external() {
        let err = SymbolError::UnknownVersion {
            version: "9.9.9-99".to_string(),
        };
        assert!(!err.is_external());

        let err = SymbolError::AmbiguousMember { candidates: vec![] };
        assert!(!err.is_external());
    }

    #[test]
    fn test_unsupported_codec_source_chain() {
        use std::error::Error;

        let err = SymbolError::UnsupportedCodec {
            codec: "zstd".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad frame"),
        };
        assert!(err.to_string().contains("zstd"));
        assert!(err.source().is_some());
    }
}
