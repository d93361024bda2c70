//! SEO structured data and head metadata.
//!
//! | Module         | Produces                                           |
//! |----------------|----------------------------------------------------|
//! | `types`        | Schema.org records and the [`Schema`] union        |
//! | `organization` | `Organization`                                     |
//! | `website`      | `WebSite` with search action                       |
//! | `page`         | `WebPage`, `WebApplication`, `SoftwareApplication` |
//! | `breadcrumb`   | `BreadcrumbList`                                   |
//! | `faq`          | `FAQPage`                                          |
//! | `howto`        | `HowTo`                                            |
//! | `meta`         | `<head>` title, Open Graph and Twitter tags        |
//! | `extract`      | JSON-LD blocks parsed back out of HTML             |
//!
//! [`generate_page_graph`] composes every generator for one route.

pub mod breadcrumb;
pub mod extract;
pub mod faq;
pub mod howto;
pub mod meta;
pub mod organization;
pub mod page;
pub mod types;
pub mod website;

pub use breadcrumb::breadcrumb_schema;
pub use faq::faq_schema;
pub use howto::how_to_schema;
pub use meta::PageMeta;
pub use types::Schema;

use crate::config::SiteConfig;
use crate::utils::date::Date;
use organization::{OrganizationParams, organization_schema};
use page::{AppParams, PageParams, software_application_schema, web_application_schema, web_page_schema};
use types::{
    BreadcrumbList, FaqPage, HowTo, Organization, SoftwareApplication, WebApplication, WebPage,
    WebSite,
};
use website::{WebSiteParams, website_schema};

/// Marks a `{from}-to-{to}` converter route.
pub(crate) const CONVERTER_MARKER: &str = "-to-";

/// `"/png-to-webp"` -> `("png", "webp")`.
///
/// Only the leading `/` is dropped, so nested routes keep their prefix in
/// `from`. Extra `-to-` parts beyond the second are ignored.
pub(crate) fn split_conversion(path: &str) -> Option<(&str, &str)> {
    if !path.contains(CONVERTER_MARKER) {
        return None;
    }
    let rest = path.strip_prefix('/').unwrap_or(path);
    let mut parts = rest.split(CONVERTER_MARKER);
    Some((parts.next()?, parts.next()?))
}

// ============================================================================
// PageGraph
// ============================================================================

/// Every schema generated for one route, by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageGraph {
    pub organization: Organization,
    pub website: WebSite,
    pub web_page: WebPage,
    /// Carries `featureList` only on the homepage.
    pub web_application: WebApplication,
    pub software_application: SoftwareApplication,
    /// Standalone breadcrumb, `None` on the homepage.
    pub breadcrumb: Option<BreadcrumbList>,
    pub faq: Option<FaqPage>,
    pub how_to: Option<HowTo>,
}

impl PageGraph {
    /// Organization, WebSite, WebPage, WebApplication, SoftwareApplication.
    pub fn base_schemas(&self) -> Vec<Schema> {
        vec![
            self.organization.clone().into(),
            self.website.clone().into(),
            self.web_page.clone().into(),
            self.web_application.clone().into(),
            self.software_application.clone().into(),
        ]
    }

    /// Every schema to embed in the page, in script order: the base
    /// schemas, then breadcrumb, FAQ and HowTo when present.
    pub fn scripts(&self) -> Vec<Schema> {
        let mut schemas = self.base_schemas();
        schemas.extend(self.breadcrumb.clone().map(Schema::from));
        schemas.extend(self.faq.clone().map(Schema::from));
        schemas.extend(self.how_to.clone().map(Schema::from));
        schemas
    }
}

/// Build the structured data of `path`.
///
/// `path` is a decoded route path (`/`, `/png-to-webp`). Unknown paths use
/// the root route's title and description.
pub fn generate_page_graph(path: &str, config: &SiteConfig, date_modified: Date) -> PageGraph {
    let site = &config.site;
    let base_url = site.base_url();
    let is_root = path == "/";

    let current_url = format!("{base_url}{path}");
    let page_name = config.routes.page_name(path, &site.name);
    let page_description = config.routes.page_description(path, &site.description);

    let organization = organization_schema(OrganizationParams::from_config(config));
    let website = website_schema(WebSiteParams {
        name: &site.name,
        url: base_url,
        description: &site.description,
        publisher: organization.clone(),
    });

    let breadcrumb_items = breadcrumb::breadcrumb_items(path, base_url, &config.routes);
    let page = PageParams {
        name: page_name,
        url: &current_url,
        description: page_description,
        publisher: &organization,
        breadcrumb_items: &breadcrumb_items,
        date_published: &config.schema.date_published,
        date_modified,
    };
    let web_page = web_page_schema(&page);

    let app = AppParams {
        screenshot: Some(site.absolute_url(&site.og_image)),
        feature_list: if is_root { &config.schema.home_features[..] } else { &[] },
        ..AppParams::new(page)
    };
    let web_application = web_application_schema(&app);
    let software_application = software_application_schema(&app);

    let breadcrumb = (!is_root).then(|| breadcrumb_schema(path, base_url, &config.routes));

    PageGraph {
        faq: faq_schema(path, base_url, &config.schema.brand),
        how_to: how_to_schema(path, base_url, &config.schema),
        organization,
        website,
        web_page,
        web_application,
        software_application,
        breadcrumb,
    }
}
