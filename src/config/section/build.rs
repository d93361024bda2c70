//! `[build]` section configuration.
//!
//! ```toml
//! [build]
//! output = "public"
//! pretty = false
//! date = "2025-01-15"     # fixed dateModified, defaults to today (UTC)
//!
//! [build.sitemap]
//! enable = true
//! path = "sitemap.xml"
//! ```

use crate::config::{ConfigDiagnostics, config_fields};
use crate::utils::date::Date;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Output directory, relative to the project root.
    pub output: PathBuf,

    /// Pretty-print JSON-LD payloads.
    pub pretty: bool,

    /// Fixed `dateModified` in `YYYY-MM-DD`.
    pub date: Option<String>,

    /// Remove the output directory before building.
    #[serde(skip)]
    pub clean: bool,

    pub sitemap: SitemapConfig,
}

config_fields!(BuildSectionConfig => BuildFields, "build" { output, pretty, date });

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            pretty: false,
            date: None,
            clean: false,
            sitemap: SitemapConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(date) = &self.date
            && Date::parse(date).is_none()
        {
            diag.error_with_hint(
                Self::FIELDS.date,
                format!("invalid date '{date}'"),
                "use YYYY-MM-DD or remove the field to use today's date",
            );
        }
        if self.output.as_os_str().is_empty() {
            diag.error(Self::FIELDS.output, "output directory is empty");
        }
        if self.sitemap.enable && self.sitemap.path.is_absolute() {
            diag.error_with_hint(
                SitemapConfig::FIELDS.path,
                "sitemap path must be relative to the output directory",
                "e.g.: path = \"sitemap.xml\"",
            );
        }
    }
}

/// `[build.sitemap]`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    pub enable: bool,
    /// Output path for sitemap file, relative to the output directory.
    pub path: PathBuf,
}

config_fields!(SitemapConfig => SitemapFields, "build.sitemap" { enable, path });

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}
