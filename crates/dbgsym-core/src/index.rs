//! Kernel-version index over a mirror's package listing.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use crate::Result;
use crate::SymbolError;

/// Pattern matched against every candidate file name: an optional
/// `unsigned-` marker, the version capture, the literal `-generic`
/// marker, and the dbgsym package suffix tagged with the architecture.
const PACKAGE_PATTERN: &str = r"^linux-image-(unsigned-)?(.*)-generic-dbgsym.*{arch}\.ddeb$";

/// Map from normalized kernel version to debug-symbol package name.
///
/// Version keys are stored lowercased and are unique by construction:
/// a listing in which two package names claim the same version fails
/// [`VersionIndex::build`] rather than silently keeping the last one.
///
/// Serializes transparently as a flat JSON object, which is exactly
/// the on-disk cache format.
///
/// # Examples
///
/// ```
/// use dbgsym_core::VersionIndex;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let names = ["linux-image-5.15.0-76-generic-dbgsym_5.15.0-76.83_amd64.ddeb"];
/// let index = VersionIndex::build(names, "amd64")?;
/// assert!(index.resolve("5.15.0-76").is_ok());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionIndex {
    entries: BTreeMap<String, String>,
}

impl VersionIndex {
    /// Builds an index from a package listing for one architecture.
    ///
    /// Names that do not match the package pattern are skipped; names
    /// for other architectures never contribute an entry.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::DuplicateVersion`] when two names
    /// normalize to the same version key.
    pub fn build<I, S>(names: I, arch: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pattern = PACKAGE_PATTERN.replace("{arch}", &regex::escape(arch));
        #[allow(clippy::expect_used)] // escaped arch tag always yields a valid pattern
        let re = Regex::new(&pattern).expect("package pattern is valid");

        let mut entries = BTreeMap::new();
        for name in names {
            let name = name.as_ref();
            let Some(caps) = re.captures(name) else {
                continue;
            };
            let version = caps[2].to_lowercase();
            if let Some(existing) = entries.get(&version) {
                return Err(SymbolError::DuplicateVersion {
                    version,
                    existing: String::clone(existing),
                    duplicate: name.to_string(),
                });
            }
            entries.insert(version, name.to_string());
        }

        Ok(Self { entries })
    }

    /// Resolves a kernel version to its package file name.
    ///
    /// The query is lowercased before lookup, so resolution is
    /// case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::UnknownVersion`] on a miss; callers are
    /// expected to offer [`VersionIndex::versions`] for diagnostics.
    pub fn resolve(&self, version: &str) -> Result<&str> {
        let key = version.to_lowercase();
        self.entries
            .get(&key)
            .map(String::as_str)
            .ok_or(SymbolError::UnknownVersion { version: key })
    }

    /// Iterates known versions in sorted order.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of indexed versions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no version is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SIGNED: &str = "linux-image-5.15.0-76-generic-dbgsym_5.15.0-76.83_amd64.ddeb";
    const UNSIGNED: &str = "linux-image-unsigned-5.15.0-76-generic-dbgsym_5.15.0-76.83_amd64.ddeb";

    #[test]
    fn test_signed_and_unsigned_share_version_key() {
        let signed = VersionIndex::build([SIGNED], "amd64").unwrap();
        assert_eq!(signed.resolve("5.15.0-76").unwrap(), SIGNED);

        let unsigned = VersionIndex::build([UNSIGNED], "amd64").unwrap();
        assert_eq!(unsigned.resolve("5.15.0-76").unwrap(), UNSIGNED);
    }

    #[test]
    fn test_other_architectures_excluded() {
        let names = [
            SIGNED,
            "linux-image-5.15.0-76-generic-dbgsym_5.15.0-76.83_arm64.ddeb",
        ];
        let index = VersionIndex::build(names, "amd64").unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve("5.15.0-76").unwrap(), SIGNED);
    }

    #[test]
    fn test_non_matching_names_skipped() {
        let names = [
            "linux-headers-5.15.0-76_all.deb",
            "Parent Directory",
            SIGNED,
        ];
        let index = VersionIndex::build(names, "amd64").unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_duplicate_version_is_hard_error() {
        let result = VersionIndex::build([SIGNED, UNSIGNED], "amd64");
        match result {
            Err(SymbolError::DuplicateVersion {
                version,
                existing,
                duplicate,
            }) => {
                assert_eq!(version, "5.15.0-76");
                assert_eq!(existing, SIGNED);
                assert_eq!(duplicate, UNSIGNED);
            }
            other => panic!("expected DuplicateVersion, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        // Synthetic name with an uppercase version component.
        let name = "linux-image-5.15.0-76-Hwe-generic-dbgsym_5.15.0-76.83_amd64.ddeb";
        let index = VersionIndex::build([name], "amd64").unwrap();

        assert_eq!(index.resolve("5.15.0-76-hwe").unwrap(), name);
        assert_eq!(index.resolve("5.15.0-76-HWE").unwrap(), name);
    }

    #[test]
    fn test_unknown_version() {
        let index = VersionIndex::build([SIGNED], "amd64").unwrap();
        let result = index.resolve("9.9.9-99");
        assert!(matches!(
            result,
            Err(SymbolError::UnknownVersion { ref version }) if version == "9.9.9-99"
        ));
    }

    #[test]
    fn test_versions_sorted() {
        let names = [
            "linux-image-5.15.0-76-generic-dbgsym_1_amd64.ddeb",
            "linux-image-5.15.0-100-generic-dbgsym_1_amd64.ddeb",
            "linux-image-5.4.0-42-generic-dbgsym_1_amd64.ddeb",
        ];
        let index = VersionIndex::build(names, "amd64").unwrap();
        let versions: Vec<&str> = index.versions().collect();
        let mut sorted = versions.clone();
        sorted.sort_unstable();
        assert_eq!(versions, sorted);
    }

    #[test]
    fn test_empty_listing_builds_empty_index() {
        let index = VersionIndex::build(std::iter::empty::<&str>(), "amd64").unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_arch_tag_is_escaped() {
        // A regex metacharacter in the arch tag must not change the
        // pattern's meaning.
        let index = VersionIndex::build([SIGNED], "amd.4").unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let index = VersionIndex::build([SIGNED], "amd64").unwrap();
        let json = serde_json::to_string(&index).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.contains("\"5.15.0-76\""));

        let back: VersionIndex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, index);
    }
}
