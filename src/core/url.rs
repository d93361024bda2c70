//! Route path type for type-safe route handling.
//!
//! - Internal representation: always decoded (human-readable)
//! - Browser boundary: decode on input, encode on output
//!
//! Route paths follow the route table's key style: a leading `/`, no
//! trailing slash (except the root `/`), no query string or fragment.

use std::borrow::Borrow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Decoded route path
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Never ends with `/` unless it is the root
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoutePath(Arc<str>);

impl RoutePath {
    /// The site root `/`.
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    /// Create from browser URL or CLI input (decode percent-encoding first).
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;
        let path = strip_query_fragment(encoded.trim());
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::new(&decoded)
    }

    /// Create from a decoded path. Normalizes leading/trailing slashes and
    /// strips query string and fragment.
    pub fn new(decoded: &str) -> Self {
        let path = strip_query_fragment(decoded.trim());
        let trimmed = path.trim_matches('/');

        if trimmed.is_empty() {
            return Self::root();
        }

        Self(Arc::from(format!("/{trimmed}")))
    }

    /// Get the decoded route path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty path segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Encode for browser (percent-encode non-ASCII and special characters).
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
        // Keep the unreserved characters route slugs are made of.
        const SEGMENT: &AsciiSet = &CONTROLS
            .add(b' ')
            .add(b'"')
            .add(b'#')
            .add(b'%')
            .add(b'<')
            .add(b'>')
            .add(b'?')
            .add(b'`')
            .add(b'{')
            .add(b'}');
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Output directory for this route under `output_dir`.
    ///
    /// `/` maps to `output_dir` itself, `/colors/picker` to
    /// `output_dir/colors/picker`.
    pub fn output_dir(&self, output_dir: &Path) -> PathBuf {
        self.segments()
            .fold(output_dir.to_path_buf(), |dir, segment| dir.join(segment))
    }
}

/// Drop anything after the first `?` or `#`.
fn strip_query_fragment(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RoutePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RoutePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_variants() {
        for input in ["", "/", "//", "  /  ", "/?q=1", "#top"] {
            assert_eq!(RoutePath::new(input).as_str(), "/", "input: {input:?}");
        }
    }

    #[test]
    fn test_normalizes_slashes() {
        assert_eq!(RoutePath::new("png-to-webp").as_str(), "/png-to-webp");
        assert_eq!(RoutePath::new("/png-to-webp/").as_str(), "/png-to-webp");
        assert_eq!(RoutePath::new("/colors/picker/").as_str(), "/colors/picker");
    }

    #[test]
    fn test_strips_query_and_fragment() {
        assert_eq!(RoutePath::new("/analyze?x=1").as_str(), "/analyze");
        assert_eq!(RoutePath::new("/analyze#exif").as_str(), "/analyze");
    }

    #[test]
    fn test_from_browser_decodes() {
        let path = RoutePath::from_browser("/texts/%E7%AC%A6%E5%8F%B7/?ref=nav");
        assert_eq!(path.as_str(), "/texts/符号");
        assert_eq!(path.to_encoded(), "/texts/%E7%AC%A6%E5%8F%B7");
    }

    #[test]
    fn test_segments() {
        let path = RoutePath::new("/texts/fonts/preview");
        assert_eq!(path.segments().collect::<Vec<_>>(), ["texts", "fonts", "preview"]);
        assert_eq!(RoutePath::root().segments().count(), 0);
    }

    #[test]
    fn test_output_dir() {
        let out = Path::new("/srv/public");
        assert_eq!(RoutePath::root().output_dir(out), PathBuf::from("/srv/public"));
        assert_eq!(
            RoutePath::new("/colors/picker").output_dir(out),
            PathBuf::from("/srv/public/colors/picker")
        );
    }
}
