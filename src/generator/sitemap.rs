//! Sitemap generation.
//!
//! Lists every configured route for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, core::RoutePath, log, utils::date::Date, utils::fs::write_file};
use anyhow::Result;
use std::borrow::Cow;
use std::path::PathBuf;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled. Returns the written path.
pub fn build_sitemap(config: &SiteConfig, lastmod: Date) -> Result<Option<PathBuf>> {
    if !config.build.sitemap.enable {
        return Ok(None);
    }
    let path = config.output_dir().join(&config.build.sitemap.path);
    write_file(&path, Sitemap::build(config, lastmod).into_xml())?;

    log!("sitemap"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(Some(path))
}

pub(crate) struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    pub(crate) fn build(config: &SiteConfig, lastmod: Date) -> Self {
        let base_url = config.site.base_url();
        let lastmod = lastmod.to_string();

        let urls = config
            .routes
            .paths()
            .map(|path| UrlEntry {
                loc: format!("{}{}", base_url, RoutePath::new(path).to_encoded()),
                lastmod: Some(lastmod.clone()),
            })
            .collect();

        Self { urls }
    }

    pub(crate) fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_builtin_config;
    use tempfile::TempDir;

    const DATE: Date = Date::new(2025, 1, 15);

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_lists_every_route() {
        let config = test_builtin_config();
        let xml = Sitemap::build(&config, DATE).into_xml();

        assert_eq!(xml.matches("<url>").count(), config.routes.len());
        assert!(xml.contains("<loc>https://freeconvert.example.com/</loc>"));
        assert!(xml.contains("<loc>https://freeconvert.example.com/colors/picker</loc>"));
        assert_eq!(xml.matches("<lastmod>2025-01-15</lastmod>").count(), config.routes.len());
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let config = crate::config::test_parse_config("[routes.\"/\"]\n[routes.\"/a b\"]\n");
        let xml = Sitemap::build(&config, DATE).into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert_eq!(lines[1], format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        assert_eq!(lines.last().copied(), Some("</urlset>"));
        assert!(xml.contains("<loc>https://example.com/a%20b</loc>"));
    }

    #[test]
    fn test_build_sitemap_respects_enable() {
        let dir = TempDir::new().unwrap();
        let mut config = test_builtin_config();
        config.root = dir.path().to_path_buf();

        let path = build_sitemap(&config, DATE).unwrap().unwrap();
        assert_eq!(path, config.output_dir().join("sitemap.xml"));
        assert!(std::fs::read_to_string(&path).unwrap().contains("<urlset"));

        config.build.sitemap.enable = false;
        assert!(build_sitemap(&config, DATE).unwrap().is_none());
    }
}
