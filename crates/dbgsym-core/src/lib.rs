//! Kernel debug-symbol extraction from Debian ddeb packages.
//!
//! `dbgsym-core` locates, downloads, and unpacks the debug-symbol file
//! for a generic Ubuntu kernel. A ddeb is an ar envelope holding a
//! possibly zstd-compressed data tar; somewhere inside that tar sits
//! exactly one `vmlinux-*-generic` image. The pipeline parses the
//! envelope, normalizes the compression, and extracts that one file,
//! flattened, into a destination directory — failing loudly whenever
//! the container or the listing leaves any room for ambiguity.
//!
//! # Examples
//!
//! ```no_run
//! use dbgsym_core::SymbolSource;
//! use dbgsym_core::extract_symbols;
//! use dbgsym_core::load_index;
//! use dbgsym_core::net::MirrorClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = SymbolSource::default();
//! let index = load_index(&source, false)?;
//! let file_name = index.resolve("5.15.0-76")?;
//!
//! let client = MirrorClient::new(source.mirror_url.clone());
//! let ddeb = client.download(file_name)?;
//! let report = extract_symbols(&ddeb, std::path::Path::new("."))?;
//! println!("wrote {}", report.file_name);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod index;
pub mod net;
pub mod report;
pub mod test_utils;

// Re-export main API types
pub use api::extract_symbols;
pub use api::load_index;
pub use config::SymbolSource;
pub use error::Result;
pub use error::SymbolError;
pub use index::VersionIndex;
pub use report::ExtractionReport;
