//! `Organization` schema.

use super::types::{ContactPoint, Context, Organization, tag};
use crate::config::SiteConfig;

/// Inputs of [`organization_schema`].
#[derive(Debug, Clone)]
pub struct OrganizationParams<'a> {
    pub name: &'a str,
    pub alternate_name: Option<&'a str>,
    pub url: &'a str,
    pub description: &'a str,
    pub founding_date: &'a str,
    pub same_as: &'a [String],
    /// Absolute logo URL, also used as the organization image.
    pub logo: String,
}

impl<'a> OrganizationParams<'a> {
    /// The site's author as the publishing organization.
    pub fn from_config(config: &'a SiteConfig) -> Self {
        Self {
            name: &config.site.author.name,
            alternate_name: config.organization.alternate_name.as_deref(),
            url: &config.site.url,
            description: &config.site.description,
            founding_date: &config.organization.founding_date,
            same_as: &config.organization.same_as,
            logo: config.site.absolute_url(&config.organization.logo),
        }
    }
}

/// Organization with logo and a customer-service contact point.
///
/// An empty `same_as` list points the organization at its own URL.
pub fn organization_schema(params: OrganizationParams<'_>) -> Organization {
    let same_as = if params.same_as.is_empty() {
        vec![params.url.to_string()]
    } else {
        params.same_as.to_vec()
    };

    Organization {
        context: Context::SchemaOrg,
        kind: tag::Organization::Organization,
        name: params.name.into(),
        alternate_name: params
            .alternate_name
            .filter(|name| !name.is_empty())
            .map(String::from),
        url: params.url.into(),
        image: params.logo.clone(),
        logo: params.logo,
        description: params.description.into(),
        founding_date: params.founding_date.into(),
        contact_point: ContactPoint {
            kind: tag::ContactPoint::ContactPoint,
            contact_type: "customer service".into(),
            available_language: "English".into(),
        },
        same_as,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_builtin_config;

    fn params(same_as: &[String]) -> OrganizationParams<'_> {
        OrganizationParams {
            name: "FreeConvert",
            alternate_name: None,
            url: "https://example.com",
            description: "Tools",
            founding_date: "2024",
            same_as,
            logo: "https://example.com/logo.png".into(),
        }
    }

    #[test]
    fn test_same_as_defaults_to_url() {
        let org = organization_schema(params(&[]));
        assert_eq!(org.same_as, ["https://example.com"]);
    }

    #[test]
    fn test_same_as_kept_when_given() {
        let profiles = vec!["https://twitter.com/imageconverter".to_string()];
        let org = organization_schema(params(&profiles));
        assert_eq!(org.same_as, profiles);
    }

    #[test]
    fn test_alternate_name_only_when_set() {
        let value = serde_json::to_value(organization_schema(params(&[]))).unwrap();
        assert!(value.get("alternateName").is_none());

        let mut with_alt = params(&[]);
        with_alt.alternate_name = Some("ImageConverter");
        let value = serde_json::to_value(organization_schema(with_alt)).unwrap();
        assert_eq!(value["alternateName"], "ImageConverter");
    }

    #[test]
    fn test_empty_alternate_name_omitted() {
        let mut empty = params(&[]);
        empty.alternate_name = Some("");
        let value = serde_json::to_value(organization_schema(empty)).unwrap();
        assert!(value.get("alternateName").is_none());
    }

    #[test]
    fn test_from_builtin_config() {
        let config = test_builtin_config();
        let org = organization_schema(OrganizationParams::from_config(&config));
        assert_eq!(org.name, "FreeConvert");
        assert_eq!(org.url, "https://freeconvert.example.com");
        assert_eq!(org.logo, "https://freeconvert.example.com/logo.png");
        assert_eq!(org.image, org.logo);
        assert_eq!(org.founding_date, "2024");
        assert_eq!(org.contact_point.contact_type, "customer service");
    }
}
