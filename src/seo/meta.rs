//! Page head metadata: title, description, canonical link, Open Graph and
//! Twitter Card tags, search engine verification.
//!
//! Route entries override the site defaults field by field.

use crate::config::SiteConfig;
use crate::utils::html::{escape, escape_attr};
use std::fmt::Write;

/// Resolved `<head>` metadata of one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
    pub site_name: String,
    pub og_image: String,
    pub twitter_image: String,
    pub twitter_creator: Option<String>,
    pub language: String,
    /// `(meta name, code)` pairs.
    pub verification: Vec<(&'static str, String)>,
}

impl PageMeta {
    pub const OG_TYPE: &'static str = "website";
    pub const TWITTER_CARD: &'static str = "summary_large_image";

    /// Resolve metadata for `path` against the route table and site defaults.
    pub fn resolve(path: &str, config: &SiteConfig) -> Self {
        let site = &config.site;
        let route = config.routes.lookup(path);

        let title = route
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&site.title);
        let keywords = route
            .keywords
            .clone()
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| site.keywords_joined());

        Self {
            title: title.to_string(),
            description: route.description().unwrap_or(&site.description).to_string(),
            keywords,
            canonical: format!("{}{}", site.base_url(), canonical_suffix(path)),
            site_name: site.name.clone(),
            og_image: site.absolute_url(&site.og_image),
            twitter_image: site.absolute_url(&site.twitter_image),
            twitter_creator: site.author.twitter.clone(),
            language: site.language.clone(),
            verification: site
                .verification
                .meta_pairs()
                .map(|(name, code)| (name, code.to_string()))
                .collect(),
        }
    }

    /// Render as HTML `<head>` elements, one per line.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(2048);

        let _ = writeln!(out, "<title>{}</title>", escape(&self.title));
        push_name(&mut out, "description", &self.description);
        if !self.keywords.is_empty() {
            push_name(&mut out, "keywords", &self.keywords);
        }
        let _ = writeln!(
            out,
            r#"<link rel="canonical" href="{}">"#,
            escape_attr(&self.canonical)
        );

        push_property(&mut out, "og:type", Self::OG_TYPE);
        push_property(&mut out, "og:site_name", &self.site_name);
        push_property(&mut out, "og:locale", &self.language);
        push_property(&mut out, "og:title", &self.title);
        push_property(&mut out, "og:description", &self.description);
        push_property(&mut out, "og:url", &self.canonical);
        push_property(&mut out, "og:image", &self.og_image);

        push_name(&mut out, "twitter:card", Self::TWITTER_CARD);
        push_name(&mut out, "twitter:title", &self.title);
        push_name(&mut out, "twitter:description", &self.description);
        if let Some(creator) = &self.twitter_creator {
            push_name(&mut out, "twitter:creator", creator);
        }
        push_name(&mut out, "twitter:image", &self.twitter_image);

        for (name, code) in &self.verification {
            push_name(&mut out, name, code);
        }

        out
    }
}

/// Root canonicalizes to the bare site URL.
fn canonical_suffix(path: &str) -> &str {
    if path == "/" { "" } else { path }
}

fn push_name(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta name="{}" content="{}">"#,
        escape_attr(name),
        escape_attr(content)
    );
}

fn push_property(out: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta property="{}" content="{}">"#,
        escape_attr(property),
        escape_attr(content)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_builtin_config;

    #[test]
    fn test_route_overrides() {
        let config = test_builtin_config();
        let meta = PageMeta::resolve("/png-to-webp", &config);
        assert_eq!(meta.title, "PNG to WebP Converter - Convert PNG Images to WebP Format");
        assert!(meta.description.starts_with("Convert PNG images to WebP format"));
        assert!(meta.keywords.starts_with("PNG to WebP,"));
        assert_eq!(meta.canonical, "https://freeconvert.example.com/png-to-webp");
        assert_eq!(meta.og_image, "https://freeconvert.example.com/og-image.webp");
        assert_eq!(meta.twitter_creator.as_deref(), Some("@imageconverter"));
    }

    #[test]
    fn test_unknown_route_uses_root_entry() {
        let config = test_builtin_config();
        let unknown = PageMeta::resolve("/nope", &config);
        let root = PageMeta::resolve("/", &config);
        assert_eq!(unknown.title, root.title);
        assert_eq!(unknown.description, root.description);
        assert_eq!(unknown.keywords, root.keywords);
        assert_eq!(root.canonical, "https://freeconvert.example.com");
        assert_eq!(unknown.canonical, "https://freeconvert.example.com/nope");
    }

    #[test]
    fn test_site_defaults_without_route_fields() {
        let config = crate::config::test_parse_config(
            "[site.verification]\ngoogle = \"g-code\"\n[routes.\"/\"]\n",
        );
        let meta = PageMeta::resolve("/", &config);
        assert_eq!(meta.description, "Test site");
        assert_eq!(meta.verification, [("google-site-verification", "g-code".to_string())]);
    }

    #[test]
    fn test_render_escapes_attributes() {
        let config = test_builtin_config();
        let html = PageMeta::resolve("/", &config).render();
        assert!(html.starts_with("<title>Free Online Tools: Image, Fonts &amp; Colors | FreeConvert</title>\n"));
        assert!(html.contains(r#"<meta property="og:type" content="website">"#));
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://freeconvert.example.com">"#));
        assert!(html.contains(r#"<meta name="yandex-verification" content="your-yandex-verification-code">"#));
        assert!(!html.contains("& "));
    }
}
