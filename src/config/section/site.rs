//! `[site]` section configuration.
//!
//! Site identity used by every generated page: name, canonical URL,
//! default imagery, keyword list, author and search engine verification.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "FreeConvert"
//! title = "Free Online Tools: Image, Fonts & Colors | FreeConvert"
//! description = "Free online image converter & font generator."
//! url = "https://freeconvert.example.com"
//! keywords = ["free image converter", "font generator"]
//!
//! [site.author]
//! name = "FreeConvert"
//! twitter = "@imageconverter"
//!
//! [site.verification]
//! google = "your-google-verification-code"
//! ```

use crate::config::{ConfigDiagnostics, config_fields};
use serde::{Deserialize, Serialize};

/// Site identity and SEO defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site name, used when a route has no title.
    pub name: String,

    /// Default `<title>` for routes without one.
    pub title: String,

    /// Default description for routes without one.
    pub description: String,

    /// Canonical base URL (e.g., "https://example.com").
    pub url: String,

    /// Language code (e.g., "en").
    pub language: String,

    /// Open Graph image (site-relative or absolute URL).
    pub og_image: String,

    /// Twitter card image (site-relative or absolute URL).
    pub twitter_image: String,

    /// Site-wide SEO keywords.
    pub keywords: Vec<String>,

    /// Author / publishing organization identity.
    pub author: AuthorConfig,

    /// Search engine verification codes.
    pub verification: VerificationConfig,
}

config_fields!(SiteInfoConfig => SiteInfoFields, "site" {
    name, title, description, url, language, og_image, twitter_image, keywords,
});

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            description: String::new(),
            url: String::new(),
            language: "en".into(),
            og_image: "/og-image.webp".into(),
            twitter_image: "/og-image.webp".into(),
            keywords: Vec::new(),
            author: AuthorConfig::default(),
            verification: VerificationConfig::default(),
        }
    }
}

impl SiteInfoConfig {
    /// Base URL without trailing slash.
    #[inline]
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Resolve a site-relative path against the base URL.
    ///
    /// Absolute `http(s)://` URLs are returned unchanged.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url(), path)
    }

    /// Site keywords joined for a `<meta name="keywords">` tag.
    pub fn keywords_joined(&self) -> String {
        self.keywords.join(", ")
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `name` must be set
    /// - `url` must be a valid http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "site name is empty",
                "set a name, e.g.: name = \"FreeConvert\"",
            );
        }

        if self.url.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "site url is not configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
        } else {
            validate_http_url(&self.url, Self::FIELDS.url, diag);
        }

        if self.description.is_empty() {
            diag.warn(
                Self::FIELDS.description,
                "empty description, pages without their own description will have none",
            );
        }

        self.author.validate(diag);
    }
}

/// Check that `value` parses as an http(s) URL with a host.
pub(crate) fn validate_http_url(
    value: &str,
    field: crate::config::FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL '{value}': {e}"),
                "use format like https://example.com",
            );
        }
    }
}

/// `[site.author]`: the organization behind the site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    pub url: Option<String>,
    /// Twitter handle including `@`.
    pub twitter: Option<String>,
}

config_fields!(AuthorConfig => AuthorFields, "site.author" { name, url, twitter });

impl AuthorConfig {
    fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error(Self::FIELDS.name, "author name is empty");
        }
        if let Some(url) = &self.url {
            validate_http_url(url, Self::FIELDS.url, diag);
        }
        if let Some(handle) = &self.twitter
            && !handle.starts_with('@')
        {
            diag.warn(Self::FIELDS.twitter, format!("handle '{handle}' does not start with '@'"));
        }
    }
}

/// `[site.verification]`: search engine ownership codes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    pub google: Option<String>,
    pub yandex: Option<String>,
    pub yahoo: Option<String>,
}

impl VerificationConfig {
    /// `(meta name, code)` pairs for every configured engine.
    pub fn meta_pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("google-site-verification", &self.google),
            ("yandex-verification", &self.yandex),
            ("y_key", &self.yahoo),
        ]
        .into_iter()
        .filter_map(|(name, code)| code.as_deref().map(|c| (name, c)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(url: &str) -> SiteInfoConfig {
        SiteInfoConfig {
            name: "Site".into(),
            url: url.into(),
            description: "desc".into(),
            author: AuthorConfig {
                name: "Org".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        assert_eq!(site("https://example.com/").base_url(), "https://example.com");
        assert_eq!(site("https://example.com").base_url(), "https://example.com");
    }

    #[test]
    fn test_absolute_url() {
        let site = site("https://example.com/");
        assert_eq!(site.absolute_url("/og-image.webp"), "https://example.com/og-image.webp");
        assert_eq!(site.absolute_url("logo.png"), "https://example.com/logo.png");
        assert_eq!(site.absolute_url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
    }

    #[test]
    fn test_validate_accepts_https() {
        let mut diag = ConfigDiagnostics::new();
        site("https://example.com").validate(&mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        for url in ["", "example.com", "ftp://example.com"] {
            let mut diag = ConfigDiagnostics::new();
            site(url).validate(&mut diag);
            assert!(diag.has_errors(), "url {url:?} should be rejected");
            assert_eq!(diag.errors()[0].field, SiteInfoConfig::FIELDS.url);
        }
    }

    #[test]
    fn test_twitter_handle_warning() {
        let mut config = site("https://example.com");
        config.author.twitter = Some("imageconverter".into());
        let mut diag = ConfigDiagnostics::new();
        config.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_verification_pairs_skip_unset() {
        let verification = VerificationConfig {
            google: Some("g-code".into()),
            yandex: None,
            yahoo: Some("y-code".into()),
        };
        let pairs: Vec<_> = verification.meta_pairs().collect();
        assert_eq!(
            pairs,
            [("google-site-verification", "g-code"), ("y_key", "y-code")]
        );
    }
}
