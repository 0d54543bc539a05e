//! Tar stream framing detection.

use std::io::Read;

use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use xz2::read::XzDecoder;

/// Gzip magic bytes.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Xz magic bytes.
const XZ_MAGIC: [u8; 6] = [0xfd, 0x37, 0x7a, 0x58, 0x5a, 0x00];

/// Bzip2 magic bytes.
const BZIP2_MAGIC: [u8; 3] = [0x42, 0x5a, 0x68]; // "BZh"

/// Compression framing wrapped around a tar stream.
///
/// Detected from magic bytes, not file names, because the stream at
/// this point is an in-memory buffer carved out of a package envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TarFraming {
    /// No compression; bytes are a raw tar stream.
    Plain,
    /// Gzip-compressed tar stream.
    Gzip,
    /// Xz-compressed tar stream.
    Xz,
    /// Bzip2-compressed tar stream.
    Bzip2,
}

impl TarFraming {
    /// Sniffs the framing from the leading magic bytes.
    #[must_use]
    pub fn sniff(data: &[u8]) -> Self {
        if data.starts_with(&GZIP_MAGIC) {
            Self::Gzip
        } else if data.starts_with(&XZ_MAGIC) {
            Self::Xz
        } else if data.starts_with(&BZIP2_MAGIC) {
            Self::Bzip2
        } else {
            Self::Plain
        }
    }

    /// Returns a human-readable name for this framing.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Gzip => "gzip",
            Self::Xz => "xz",
            Self::Bzip2 => "bzip2",
        }
    }

    /// Wraps the byte stream in the matching decoder.
    #[must_use]
    pub fn reader(self, data: &[u8]) -> Box<dyn Read + '_> {
        match self {
            Self::Plain => Box::new(data),
            Self::Gzip => Box::new(GzDecoder::new(data)),
            Self::Xz => Box::new(XzDecoder::new(data)),
            Self::Bzip2 => Box::new(BzDecoder::new(data)),
        }
    }
}
