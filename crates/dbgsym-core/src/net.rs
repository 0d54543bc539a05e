//! Mirror access: package listing scrape and file download.
//!
//! The mirror exposes a plain directory index page. Candidate file
//! names are the `href` values of its links; the version index applies
//! the real package pattern afterwards, so extraction here stays
//! deliberately dumb.

use std::io::Read;
use std::sync::OnceLock;

use regex::Regex;

use crate::Result;
use crate::SymbolError;

/// Chunk size for downloads.
const CHUNK_SIZE: usize = 64 * 1024;

/// Blocking HTTP client bound to one mirror directory.
pub struct MirrorClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl MirrorClient {
    /// Creates a client for the given mirror directory URL.
    ///
    /// The URL is expected to end with `/`; file names are appended to
    /// it verbatim.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Fetches the mirror index page and returns the candidate ddeb
    /// file names found in it.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Listing`] when the page contains no
    /// hyperlinks at all (the index shape changed), or
    /// [`SymbolError::Transfer`] on HTTP failure.
    pub fn list_file_names(&self) -> Result<Vec<String>> {
        tracing::debug!(url = %self.base_url, "fetching package index");
        let body = self
            .http
            .get(&self.base_url)
            .send()?
            .error_for_status()?
            .text()?;

        if extract_hrefs(&body).next().is_none() {
            return Err(SymbolError::Listing(
                "no hyperlinks found in package index page".to_string(),
            ));
        }
        Ok(parse_listing(&body))
    }

    /// Downloads a file from the mirror into memory.
    pub fn download(&self, file_name: &str) -> Result<Vec<u8>> {
        self.download_with_progress(file_name, |_, _| {})
    }

    /// Downloads a file, reporting `(bytes_so_far, total)` to the
    /// observer after every chunk. `total` is `None` when the server
    /// does not announce a content length.
    pub fn download_with_progress<F>(&self, file_name: &str, mut progress: F) -> Result<Vec<u8>>
    where
        F: FnMut(u64, Option<u64>),
    {
        let url = format!("{}{}", self.base_url, file_name);
        tracing::info!(%url, "downloading package");

        let mut response = self.http.get(&url).send()?.error_for_status()?;
        let total = response.content_length();

        let mut body = Vec::new();
        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            let n = response.read(&mut chunk)?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&chunk[..n]);
            progress(body.len() as u64, total);
        }

        tracing::debug!(bytes = body.len(), "download complete");
        Ok(body)
    }
}

/// Extracts ddeb candidate file names from a directory index page.
///
/// Keeps only hrefs that mention `ddeb`; sort links, parent links, and
/// sibling directories fall away here, the package pattern does the
/// precise filtering later.
#[must_use]
pub fn parse_listing(html: &str) -> Vec<String> {
    extract_hrefs(html)
        .filter(|href| href.contains("ddeb"))
        .map(str::to_string)
        .collect()
}

/// Iterates every `href="…"` attribute value in the page.
fn extract_hrefs(html: &str) -> impl Iterator<Item = &str> {
    static HREF_RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)] // static pattern
    let re = HREF_RE.get_or_init(|| Regex::new(r#"href="([^"]+)""#).expect("href pattern is valid"));
    re.captures_iter(html)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const INDEX_PAGE: &str = r#"<html><body><table>
<tr><th><a href="?C=N;O=D">Name</a></th></tr>
<tr><td><a href="/pool/main/l/">Parent Directory</a></td></tr>
<tr><td><a href="linux-image-5.15.0-76-generic-dbgsym_5.15.0-76.83_amd64.ddeb">link</a></td></tr>
<tr><td><a href="linux-image-5.15.0-76-generic-dbgsym_5.15.0-76.83_arm64.ddeb">link</a></td></tr>
<tr><td><a href="linux-headers-5.15.0-76_all.deb">link</a></td></tr>
</table></body></html>"#;

    #[test]
    fn test_parse_listing_keeps_ddeb_links() {
        let names = parse_listing(INDEX_PAGE);
        assert_eq!(
            names,
            vec![
                "linux-image-5.15.0-76-generic-dbgsym_5.15.0-76.83_amd64.ddeb",
                "linux-image-5.15.0-76-generic-dbgsym_5.15.0-76.83_arm64.ddeb",
            ]
        );
    }

    #[test]
    fn test_parse_listing_empty_page() {
        assert!(parse_listing("<html><body>maintenance</body></html>").is_empty());
    }

    #[test]
    fn test_extract_hrefs_finds_non_ddeb_links() {
        // Sort links count as hyperlink structure even though they are
        // not packages.
        let hrefs: Vec<&str> = extract_hrefs(INDEX_PAGE).collect();
        assert!(hrefs.contains(&"?C=N;O=D"));
        assert_eq!(hrefs.len(), 5);
    }
}
