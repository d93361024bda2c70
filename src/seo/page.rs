//! `WebPage`, `WebApplication` and `SoftwareApplication` schemas.

use super::types::{
    AggregateRating, BreadcrumbRef, Context, ListItem, Offer, Organization, SoftwareApplication,
    WebApplication, WebPage, WebSiteRef, tag,
};
use crate::utils::date::Date;

const DEFAULT_CATEGORY: &str = "MultimediaApplication";
const WEB_APP_SUB_CATEGORY: &str = "Image Converter";
const SOFTWARE_SUB_CATEGORY: &str = "Image Processing";
const SOFTWARE_VERSION: &str = "1.0";
const RATING_VALUE: &str = "4.8";
const RATING_COUNT: u32 = 1250;

/// Inputs shared by the page-level schemas.
#[derive(Debug, Clone)]
pub struct PageParams<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub description: &'a str,
    pub publisher: &'a Organization,
    pub breadcrumb_items: &'a [ListItem],
    pub date_published: &'a str,
    pub date_modified: Date,
}

/// Application inputs on top of [`PageParams`].
#[derive(Debug, Clone)]
pub struct AppParams<'a> {
    pub page: PageParams<'a>,
    pub application_category: Option<&'a str>,
    pub application_sub_category: Option<&'a str>,
    pub screenshot: Option<String>,
    /// Emitted as `featureList` only when non-empty.
    pub feature_list: &'a [String],
}

impl<'a> AppParams<'a> {
    pub fn new(page: PageParams<'a>) -> Self {
        Self {
            page,
            application_category: None,
            application_sub_category: None,
            screenshot: None,
            feature_list: &[],
        }
    }
}

pub fn web_page_schema(params: &PageParams<'_>) -> WebPage {
    WebPage {
        context: Context::SchemaOrg,
        kind: tag::WebPage::WebPage,
        name: params.name.into(),
        url: params.url.into(),
        description: params.description.into(),
        is_part_of: WebSiteRef {
            kind: tag::WebSite::WebSite,
            id: params.url.into(),
        },
        publisher: params.publisher.clone(),
        date_published: params.date_published.into(),
        date_modified: params.date_modified.to_string(),
        breadcrumb: BreadcrumbRef {
            kind: tag::BreadcrumbList::BreadcrumbList,
            id: format!("{}#breadcrumb", params.url),
            item_list_element: params.breadcrumb_items.to_vec(),
        },
    }
}

pub fn web_application_schema(params: &AppParams<'_>) -> WebApplication {
    let page = &params.page;
    let publisher = page.publisher;

    WebApplication {
        context: Context::SchemaOrg,
        kind: tag::WebApplication::WebApplication,
        name: page.name.into(),
        url: page.url.into(),
        description: page.description.into(),
        application_category: params
            .application_category
            .unwrap_or(DEFAULT_CATEGORY)
            .into(),
        application_sub_category: params
            .application_sub_category
            .unwrap_or(WEB_APP_SUB_CATEGORY)
            .into(),
        operating_system: "Any".into(),
        browser_requirements: "Requires JavaScript. Requires HTML5.".into(),
        software_version: SOFTWARE_VERSION.into(),
        release_notes: "Free online image and PDF conversion tool".into(),
        screenshot: params.screenshot.clone(),
        aggregate_rating: AggregateRating {
            kind: tag::AggregateRating::AggregateRating,
            rating_value: RATING_VALUE.into(),
            rating_count: RATING_COUNT,
            best_rating: Some("5".into()),
            worst_rating: Some("1".into()),
        },
        offers: Offer {
            kind: tag::Offer::Offer,
            price: "0".into(),
            price_currency: "USD".into(),
            availability: Some("https://schema.org/InStock".into()),
            valid_from: Some(page.date_published.into()),
        },
        author: publisher.clone(),
        publisher: publisher.clone(),
        creator: publisher.clone(),
        maintainer: publisher.clone(),
        copyright_holder: publisher.clone(),
        license: "https://creativecommons.org/licenses/by/4.0/".into(),
        is_accessible_for_free: true,
        usage_info: "Free to use for personal and commercial purposes".into(),
        feature_list: (!params.feature_list.is_empty()).then(|| params.feature_list.to_vec()),
    }
}

pub fn software_application_schema(params: &AppParams<'_>) -> SoftwareApplication {
    let page = &params.page;

    SoftwareApplication {
        context: Context::SchemaOrg,
        kind: tag::SoftwareApplication::SoftwareApplication,
        name: page.name.into(),
        description: page.description.into(),
        url: page.url.into(),
        application_category: params
            .application_category
            .unwrap_or(DEFAULT_CATEGORY)
            .into(),
        application_sub_category: params
            .application_sub_category
            .unwrap_or(SOFTWARE_SUB_CATEGORY)
            .into(),
        operating_system: "Web Browser".into(),
        software_version: SOFTWARE_VERSION.into(),
        date_published: page.date_published.into(),
        date_modified: page.date_modified.to_string(),
        author: page.publisher.clone(),
        publisher: page.publisher.clone(),
        download_url: page.url.into(),
        install_url: page.url.into(),
        screenshot: params.screenshot.clone(),
        aggregate_rating: AggregateRating {
            kind: tag::AggregateRating::AggregateRating,
            rating_value: RATING_VALUE.into(),
            rating_count: RATING_COUNT,
            best_rating: None,
            worst_rating: None,
        },
        offers: Offer {
            kind: tag::Offer::Offer,
            price: "0".into(),
            price_currency: "USD".into(),
            availability: None,
            valid_from: None,
        },
    }
}
