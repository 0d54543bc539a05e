//! Symbol source configuration.

use std::path::PathBuf;

/// Default mirror directory holding Ubuntu kernel ddebs.
pub const DEFAULT_MIRROR_URL: &str = "http://ddebs.ubuntu.com/pool/main/l/linux/";

/// Default architecture tag matched in package file names.
pub const DEFAULT_ARCH: &str = "amd64";

/// Default location of the cached version listing.
pub const DEFAULT_CACHE_FILE: &str = "./ubuntu-generic-kernel-versions.json";

/// Where debug-symbol packages come from and where the version cache
/// lives.
///
/// All knobs that used to be baked-in constants are explicit here, so
/// alternate mirrors, architectures, and cache locations need no
/// global state.
///
/// # Examples
///
/// ```
/// use dbgsym_core::SymbolSource;
///
/// let source = SymbolSource {
///     arch: "arm64".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct SymbolSource {
    /// Mirror directory URL, trailing slash included.
    pub mirror_url: String,

    /// Architecture tag substituted into the package pattern.
    pub arch: String,

    /// Path of the version cache file.
    pub cache_path: PathBuf,
}

impl Default for SymbolSource {
    fn default() -> Self {
        Self {
            mirror_url: DEFAULT_MIRROR_URL.to_string(),
            arch: DEFAULT_ARCH.to_string(),
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source() {
        let source = SymbolSource::default();
        assert_eq!(source.arch, "amd64");
        assert!(source.mirror_url.ends_with('/'));
        assert!(source.cache_path.to_string_lossy().ends_with(".json"));
    }
}
