//! `[organization]` section configuration.
//!
//! Fields of the Schema.org `Organization` published on every page that are
//! not already part of `[site]`.

use crate::config::{ConfigDiagnostics, config_fields};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    /// Optional alternate name (e.g. a former brand).
    pub alternate_name: Option<String>,

    /// Founding year or date, emitted verbatim.
    pub founding_date: String,

    /// Profile URLs. Empty means the organization points at its own site.
    pub same_as: Vec<String>,

    /// Logo path relative to the site URL.
    pub logo: String,
}

config_fields!(OrganizationConfig => OrganizationFields, "organization" {
    alternate_name, founding_date, same_as, logo,
});

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            alternate_name: None,
            founding_date: "2024".into(),
            same_as: Vec::new(),
            logo: "/logo.png".into(),
        }
    }
}

impl OrganizationConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.founding_date.trim().is_empty() {
            diag.error(Self::FIELDS.founding_date, "founding date is empty");
        }
        if !self.logo.starts_with('/') && !self.logo.starts_with("http") {
            diag.error_with_hint(
                Self::FIELDS.logo,
                format!("logo path '{}' is neither site-relative nor absolute", self.logo),
                "use a path starting with '/', e.g.: logo = \"/logo.png\"",
            );
        }
        for url in &self.same_as {
            super::site::validate_http_url(url, Self::FIELDS.same_as, diag);
        }
    }
}
