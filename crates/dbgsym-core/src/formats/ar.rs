//! Unix ar envelope parsing.
//!
//! Debian packages (and their ddeb debug-symbol variants) are ar
//! containers: the 8-byte `!<arch>\n` magic followed by a sequence of
//! members, each introduced by a 60-byte fixed-layout header. This
//! module parses that framing into named byte ranges without copying
//! member payloads.

use crate::Result;
use crate::SymbolError;

/// Magic bytes every ar container starts with.
pub const AR_MAGIC: &[u8; 8] = b"!<arch>\n";

/// Length of a member header.
const HEADER_LEN: usize = 60;

/// Terminator bytes closing every member header.
const HEADER_END: &[u8; 2] = b"`\n";

/// A single member of an ar container: its name and the byte range of
/// its payload inside the container buffer.
///
/// Immutable once parsed; the payload is borrowed from the container
/// via [`ArMember::data`] rather than copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArMember {
    /// Member name, trimmed of header padding and any trailing `/`.
    pub name: String,
    /// Declared payload size in bytes.
    pub size: u64,
    /// Payload offset into the container buffer.
    pub offset: usize,
}

impl ArMember {
    /// Returns this member's payload slice out of the container buffer
    /// it was parsed from.
    #[must_use]
    pub fn data<'a>(&self, container: &'a [u8]) -> &'a [u8] {
        &container[self.offset..self.offset + self.size as usize]
    }
}

/// Parses an ar container into its members, in container order.
///
/// # Errors
///
/// Returns [`SymbolError::MalformedContainer`] if the magic header is
/// absent, a member header is truncated or badly terminated, a size
/// field is not decimal, or a declared payload overruns the buffer.
pub fn parse(bytes: &[u8]) -> Result<Vec<ArMember>> {
    if bytes.len() < AR_MAGIC.len() || &bytes[..AR_MAGIC.len()] != AR_MAGIC {
        return Err(SymbolError::MalformedContainer(
            "missing !<arch> magic header".to_string(),
        ));
    }

    let mut members = Vec::new();
    let mut pos = AR_MAGIC.len();

    while pos < bytes.len() {
        if bytes.len() - pos < HEADER_LEN {
            return Err(SymbolError::MalformedContainer(format!(
                "truncated member header at offset {pos}"
            )));
        }
        let header = &bytes[pos..pos + HEADER_LEN];
        if &header[58..60] != HEADER_END {
            return Err(SymbolError::MalformedContainer(format!(
                "bad member header terminator at offset {pos}"
            )));
        }

        let name = field_str(&header[0..16])
            .trim_end_matches('/')
            .to_string();
        let size: u64 = field_str(&header[48..58]).parse().map_err(|_| {
            SymbolError::MalformedContainer(format!(
                "non-decimal size field in header of {name}"
            ))
        })?;

        let data_start = pos + HEADER_LEN;
        let data_end = data_start + size as usize;
        if data_end > bytes.len() {
            return Err(SymbolError::MalformedContainer(format!(
                "member {name} overruns container ({size} bytes declared)"
            )));
        }

        members.push(ArMember {
            name,
            size,
            offset: data_start,
        });

        // Payloads are padded to even offsets with a single newline.
        pos = data_end + (size % 2) as usize;
    }

    Ok(members)
}

/// Locates the single data-bearing member of a Debian package envelope.
///
/// A well-formed (d)deb carries exactly one `data.tar.*` member next to
/// `debian-binary` and `control.tar.*`. Anything else means the
/// container cannot be trusted.
///
/// # Errors
///
/// Returns [`SymbolError::MalformedContainer`] naming all members when
/// zero or several data members are present.
pub fn find_data_member(members: &[ArMember]) -> Result<&ArMember> {
    let mut data_members = members.iter().filter(|m| m.name.contains("data"));

    match (data_members.next(), data_members.next()) {
        (Some(member), None) => Ok(member),
        _ => {
            let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
            Err(SymbolError::MalformedContainer(format!(
                "could not identify data member, parts: {names:?}"
            )))
        }
    }
}

/// Decodes a space-padded ASCII header field.
fn field_str(field: &[u8]) -> &str {
    std::str::from_utf8(field)
        .unwrap_or("")
        .trim_end_matches(' ')
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_utils::create_test_ar;

    #[test]
    fn test_parse_members_in_order() {
        let ar = create_test_ar(&[
            ("debian-binary", b"2.0\n"),
            ("control.tar.gz", b"ctrl"),
            ("data.tar.zst", b"payload"),
        ]);

        let members = parse(&ar).unwrap();
        assert_eq!(members.len(), 3);
        assert_eq!(members[0].name, "debian-binary");
        assert_eq!(members[1].name, "control.tar.gz");
        assert_eq!(members[2].name, "data.tar.zst");
        assert_eq!(members[2].size, 7);
        assert_eq!(members[2].data(&ar), b"payload");
    }

    #[test]
    fn test_parse_odd_sized_member_padding() {
        // "2.0\n" is 4 bytes, "odd" is 3: the second member forces a
        // pad byte before the third header.
        let ar = create_test_ar(&[
            ("debian-binary", b"2.0\n"),
            ("control.tar", b"odd"),
            ("data.tar", b"even"),
        ]);

        let members = parse(&ar).unwrap();
        assert_eq!(members[1].data(&ar), b"odd");
        assert_eq!(members[2].data(&ar), b"even");
    }

    #[test]
    fn test_parse_gnu_style_name_slash() {
        // GNU ar terminates names with '/' inside the padding.
        let mut ar = Vec::from(*AR_MAGIC);
        ar.extend(format!("{:<16}", "data.tar.xz/").bytes());
        ar.extend(format!("{:<12}", 0).bytes());
        ar.extend(format!("{:<6}", 0).bytes());
        ar.extend(format!("{:<6}", 0).bytes());
        ar.extend(format!("{:<8}", "100644").bytes());
        ar.extend(format!("{:<10}", 2).bytes());
        ar.extend(b"`\n");
        ar.extend(b"xy");

        let members = parse(&ar).unwrap();
        assert_eq!(members[0].name, "data.tar.xz");
    }

    #[test]
    fn test_parse_empty_container() {
        let members = parse(AR_MAGIC).unwrap();
        assert!(members.is_empty());
    }

    #[test]
    fn test_parse_rejects_missing_magic() {
        let result = parse(b"not an archive at all");
        assert!(matches!(result, Err(SymbolError::MalformedContainer(_))));
    }

    #[test]
    fn test_parse_rejects_truncated_header() {
        let mut ar = Vec::from(*AR_MAGIC);
        ar.extend(b"data.tar");
        let result = parse(&ar);
        assert!(matches!(result, Err(SymbolError::MalformedContainer(_))));
    }

    #[test]
    fn test_parse_rejects_bad_terminator() {
        let mut ar = create_test_ar(&[("data.tar", b"xx")]);
        ar[8 + 58] = b'!';
        let result = parse(&ar);
        assert!(matches!(result, Err(SymbolError::MalformedContainer(_))));
    }

    #[test]
    fn test_parse_rejects_overrunning_member() {
        let mut ar = Vec::from(*AR_MAGIC);
        ar.extend(format!("{:<16}", "data.tar").bytes());
        ar.extend(format!("{:<12}", 0).bytes());
        ar.extend(format!("{:<6}", 0).bytes());
        ar.extend(format!("{:<6}", 0).bytes());
        ar.extend(format!("{:<8}", "100644").bytes());
        ar.extend(format!("{:<10}", 9999).bytes());
        ar.extend(b"`\n");
        ar.extend(b"short");

        let result = parse(&ar);
        assert!(matches!(result, Err(SymbolError::MalformedContainer(_))));
    }

    #[test]
    fn test_parse_rejects_non_decimal_size() {
        let mut ar = Vec::from(*AR_MAGIC);
        ar.extend(format!("{:<16}", "data.tar").bytes());
        ar.extend(format!("{:<12}", 0).bytes());
        ar.extend(format!("{:<6}", 0).bytes());
        ar.extend(format!("{:<6}", 0).bytes());
        ar.extend(format!("{:<8}", "100644").bytes());
        ar.extend(format!("{:<10}", "many").bytes());
        ar.extend(b"`\n");

        let result = parse(&ar);
        assert!(matches!(result, Err(SymbolError::MalformedContainer(_))));
    }

    #[test]
    fn test_find_data_member_single() {
        let ar = create_test_ar(&[
            ("debian-binary", b"2.0\n"),
            ("control.tar.gz", b"ctrl"),
            ("data.tar.zst", b"payload"),
        ]);
        let members = parse(&ar).unwrap();

        let data = find_data_member(&members).unwrap();
        assert_eq!(data.name, "data.tar.zst");
    }

    #[test]
    fn test_find_data_member_none() {
        let ar = create_test_ar(&[("debian-binary", b"2.0\n"), ("control.tar.gz", b"ctrl")]);
        let members = parse(&ar).unwrap();

        let result = find_data_member(&members);
        assert!(matches!(result, Err(SymbolError::MalformedContainer(_))));
        // Diagnostics carry every member name.
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("debian-binary"));
        assert!(msg.contains("control.tar.gz"));
    }

    #[test]
    fn test_find_data_member_multiple() {
        let ar = create_test_ar(&[("data.tar.gz", b"one"), ("data.tar.zst", b"two")]);
        let members = parse(&ar).unwrap();

        let result = find_data_member(&members);
        assert!(matches!(result, Err(SymbolError::MalformedContainer(_))));
    }
}
