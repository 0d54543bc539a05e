//! Payload normalization for envelope data members.
//!
//! The data member of a ddeb may be zstd-compressed, which the tar
//! layer cannot read on its own. Zstd is recognized by the member's
//! name suffix and decoded eagerly into a fresh buffer. Every other
//! framing (gzip, xz, bzip2, plain) is passed through untouched and
//! resolved later by magic-byte sniffing in front of the tar reader.

use crate::Result;
use crate::SymbolError;
use crate::formats::ar::ArMember;

/// How a data member's payload is normalized before tar parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadCodec {
    /// Zstandard; decoded eagerly into a new buffer.
    Zstd,
    /// Anything else; bytes are forwarded unchanged.
    Passthrough,
}

impl PayloadCodec {
    /// Selects the codec from a member's trailing name token.
    ///
    /// # Examples
    ///
    /// ```
    /// use dbgsym_core::formats::codec::PayloadCodec;
    ///
    /// assert_eq!(PayloadCodec::for_member_name("data.tar.zst"), PayloadCodec::Zstd);
    /// assert_eq!(PayloadCodec::for_member_name("data.tar.xz"), PayloadCodec::Passthrough);
    /// ```
    #[must_use]
    pub fn for_member_name(name: &str) -> Self {
        if name.ends_with("zst") {
            Self::Zstd
        } else {
            Self::Passthrough
        }
    }

    /// Returns a human-readable name for this codec.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zstd => "zstd",
            Self::Passthrough => "passthrough",
        }
    }

    /// Normalizes a payload, consuming and returning the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::UnsupportedCodec`] when a zstd payload
    /// does not decode.
    pub fn normalize(self, data: Vec<u8>) -> Result<Vec<u8>> {
        match self {
            Self::Zstd => {
                zstd::stream::decode_all(data.as_slice()).map_err(|source| {
                    SymbolError::UnsupportedCodec {
                        codec: "zstd".to_string(),
                        source,
                    }
                })
            }
            Self::Passthrough => Ok(data),
        }
    }
}

/// Normalizes an envelope member's payload into a plain tar byte
/// stream, decompressing when the member name names a codec the tar
/// layer cannot handle itself.
pub fn normalize(member: &ArMember, data: Vec<u8>) -> Result<Vec<u8>> {
    let codec = PayloadCodec::for_member_name(&member.name);
    if codec == PayloadCodec::Zstd {
        tracing::debug!(member = %member.name, "decompressing zstd data member");
    }
    codec.normalize(data)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn member(name: &str, size: u64) -> ArMember {
        ArMember {
            name: name.to_string(),
            size,
            offset: 0,
        }
    }

    #[test]
    fn test_codec_selection() {
        assert_eq!(PayloadCodec::for_member_name("data.tar.zst"), PayloadCodec::Zstd);
        assert_eq!(PayloadCodec::for_member_name("data.tar.gz"), PayloadCodec::Passthrough);
        assert_eq!(PayloadCodec::for_member_name("data.tar.xz"), PayloadCodec::Passthrough);
        assert_eq!(PayloadCodec::for_member_name("data.tar"), PayloadCodec::Passthrough);
    }

    #[test]
    fn test_codec_name() {
        assert_eq!(PayloadCodec::Zstd.name(), "zstd");
        assert_eq!(PayloadCodec::Passthrough.name(), "passthrough");
    }

    #[test]
    fn test_zstd_round_trip() {
        let original = b"tar bytes would go here".to_vec();
        let compressed = zstd::stream::encode_all(original.as_slice(), 0).unwrap();

        let m = member("data.tar.zst", compressed.len() as u64);
        let normalized = normalize(&m, compressed).unwrap();
        assert_eq!(normalized, original);
    }

    #[test]
    fn test_passthrough_is_identity() {
        let data = b"anything".to_vec();
        let m = member("data.tar.xz", data.len() as u64);
        let normalized = normalize(&m, data.clone()).unwrap();
        assert_eq!(normalized, data);
    }

    #[test]
    fn test_corrupt_zstd_is_unsupported_codec() {
        let m = member("data.tar.zst", 9);
        let result = normalize(&m, b"not zstd!".to_vec());
        assert!(matches!(
            result,
            Err(SymbolError::UnsupportedCodec { ref codec, .. }) if codec == "zstd"
        ));
    }

    #[test]
    fn test_unrecognized_suffix_is_not_an_error() {
        let m = member("data.tar.lz4", 5);
        assert!(normalize(&m, b"bytes".to_vec()).is_ok());
    }
}
