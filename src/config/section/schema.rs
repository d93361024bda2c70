//! `[schema]` section configuration.
//!
//! Copy and constants for generated structured data.
//!
//! ```toml
//! [schema]
//! brand = "ImageConverter"
//! date_published = "2024-01-01"
//! detailed_pdf_steps = false
//! ```

use crate::config::{ConfigDiagnostics, config_fields};
use crate::utils::date::Date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Product name used in FAQ answers and the HowTo tool.
    pub brand: String,

    /// `datePublished` of pages and applications, also the offer `validFrom`.
    pub date_published: String,

    /// Feature list of the homepage `WebApplication`.
    pub home_features: Vec<String>,

    /// Emit 4-step PDF guides on `pdf-to-*` and `*-to-pdf` routes.
    pub detailed_pdf_steps: bool,
}

config_fields!(SchemaConfig => SchemaFields, "schema" {
    brand, date_published, home_features, detailed_pdf_steps,
});

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            brand: "ImageConverter".into(),
            date_published: "2024-01-01".into(),
            home_features: default_home_features(),
            detailed_pdf_steps: false,
        }
    }
}

fn default_home_features() -> Vec<String> {
    [
        "PNG to WebP conversion",
        "JPG to PNG conversion",
        "WebP to PNG conversion",
        "PDF to JPG conversion",
        "PDF to PNG conversion",
        "Images to PDF conversion",
        "Image analysis and metadata extraction",
        "Batch image processing",
        "Quality optimization",
        "PDF merging and splitting",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl SchemaConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.brand.trim().is_empty() {
            diag.error(Self::FIELDS.brand, "brand is empty");
        }
        if Date::parse(&self.date_published).is_none() {
            diag.error_with_hint(
                Self::FIELDS.date_published,
                format!("invalid date '{}'", self.date_published),
                "use YYYY-MM-DD, e.g.: date_published = \"2024-01-01\"",
            );
        }
        if self.home_features.is_empty() {
            diag.warn(
                Self::FIELDS.home_features,
                "empty, the homepage application will have no featureList",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_home_features() {
        let schema = SchemaConfig::default();
        assert_eq!(schema.home_features.len(), 10);
        assert!(schema.home_features.iter().any(|f| f == "Batch image processing"));
        assert_eq!(schema.home_features.last().map(String::as_str), Some("PDF merging and splitting"));
    }

    #[test]
    fn test_validate_date_published() {
        let schema = SchemaConfig {
            date_published: "2024-13-01".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        schema.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, SchemaConfig::FIELDS.date_published);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let schema: SchemaConfig = toml::from_str("brand = \"Acme\"").unwrap();
        assert_eq!(schema.brand, "Acme");
        assert_eq!(schema.date_published, "2024-01-01");
        assert_eq!(schema.home_features.len(), 10);
    }
}
