//! Test utilities for building in-memory packages.
//!
//! Reusable helpers for constructing tar streams, ar containers, and
//! complete ddeb fixtures, shared by unit, integration, and CLI tests.
//!
//! # Panics
//!
//! All functions in this module may panic on I/O errors since they are
//! designed for test use only where panics are acceptable.

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::io::Write;

/// Creates an in-memory tar stream from a list of entries.
///
/// Each entry is a tuple of (path, content). Files are created with
/// mode 0o644.
///
/// # Examples
///
/// ```
/// use dbgsym_core::test_utils::create_test_tar;
///
/// let tar = create_test_tar(&[("boot/vmlinux-5.15.0-76-generic", b"symbols")]);
/// ```
#[must_use]
pub fn create_test_tar(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (path, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, path, *data).unwrap();
    }
    builder.into_inner().unwrap()
}

/// Creates an in-memory ar container from a list of members.
///
/// Member names must fit the 16-byte header field. Payloads are padded
/// to even offsets as the format requires.
#[must_use]
pub fn create_test_ar(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut out = Vec::from(*b"!<arch>\n");
    for (name, data) in members {
        assert!(name.len() <= 16, "ar member name too long: {name}");
        out.extend(format!("{name:<16}").bytes());
        out.extend(format!("{:<12}", 0).bytes());
        out.extend(format!("{:<6}", 0).bytes());
        out.extend(format!("{:<6}", 0).bytes());
        out.extend(format!("{:<8}", "100644").bytes());
        out.extend(format!("{:<10}", data.len()).bytes());
        out.extend(b"`\n");
        out.extend(*data);
        if data.len() % 2 == 1 {
            out.push(b'\n');
        }
    }
    out
}

/// Creates a complete ddeb fixture: `debian-binary`, a control stub,
/// and the given tar stream as the data member.
///
/// The data member name decides its on-the-wire form: a `zst` suffix
/// zstd-compresses the stream, anything else embeds it verbatim, so
/// pre-compressed gzip/xz streams can be passed directly.
#[must_use]
pub fn create_test_ddeb(data_member_name: &str, data_tar: &[u8]) -> Vec<u8> {
    let data = if data_member_name.ends_with("zst") {
        zstd::stream::encode_all(data_tar, 0).unwrap()
    } else {
        data_tar.to_vec()
    };
    create_test_ar(&[
        ("debian-binary", b"2.0\n"),
        ("control.tar.gz", b"\x1f\x8b"),
        (data_member_name, &data),
    ])
}

/// Gzip-compresses a byte stream.
#[must_use]
pub fn gzip_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Xz-compresses a byte stream.
#[must_use]
pub fn xz_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = xz2::write::XzEncoder::new(Vec::new(), 6);
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Bzip2-compresses a byte stream.
#[must_use]
pub fn bzip2_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}
