//! Schema.org structured-data records.
//!
//! Every top-level record serializes with `"@context": "https://schema.org"`
//! followed by its `"@type"`. Nested records carry only `"@type"`. Field
//! order follows declaration order (`serde_json` is built with
//! `preserve_order`), so output reads the same as hand-written JSON-LD.
//!
//! Type discriminators are single-variant enums from [`tag`]: a record only
//! deserializes when its `@type` matches, which lets [`Schema`] dispatch a
//! parsed object to the right struct without a hand-written tag check.

use serde::{Deserialize, Serialize};

/// The `@context` value of every top-level record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Context {
    #[default]
    #[serde(rename = "https://schema.org")]
    SchemaOrg,
}

impl Context {
    pub const SCHEMA_ORG: &'static str = "https://schema.org";
}

/// `@type` discriminators.
pub mod tag {
    macro_rules! type_tags {
        ($($name:ident),* $(,)?) => {
            $(
                #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
                pub enum $name {
                    #[default]
                    $name,
                }
            )*
        };
    }

    type_tags!(
        Organization,
        ContactPoint,
        WebSite,
        SearchAction,
        EntryPoint,
        WebPage,
        BreadcrumbList,
        ListItem,
        WebApplication,
        SoftwareApplication,
        AggregateRating,
        Offer,
        Question,
        Answer,
        HowTo,
        MonetaryAmount,
        HowToSupply,
        HowToTool,
        HowToStep,
    );

    /// `FAQPage`, whose name is not a valid Rust type name as spelled.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ::serde::Serialize, ::serde::Deserialize)]
    pub enum FaqPage {
        #[default]
        #[serde(rename = "FAQPage")]
        FaqPage,
    }
}

// ============================================================================
// Organization / WebSite
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: Context,
    #[serde(rename = "@type")]
    pub kind: tag::Organization,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    pub url: String,
    pub logo: String,
    pub image: String,
    pub description: String,
    pub founding_date: String,
    pub contact_point: ContactPoint,
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub kind: tag::ContactPoint,
    pub contact_type: String,
    pub available_language: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@context")]
    pub context: Context,
    #[serde(rename = "@type")]
    pub kind: tag::WebSite,
    pub name: String,
    pub url: String,
    pub description: String,
    pub publisher: Organization,
    pub potential_action: SearchAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub kind: tag::SearchAction,
    pub target: EntryPoint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    #[serde(rename = "@type")]
    pub kind: tag::EntryPoint,
    pub url_template: String,
}

// ============================================================================
// WebPage / BreadcrumbList
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPage {
    #[serde(rename = "@context")]
    pub context: Context,
    #[serde(rename = "@type")]
    pub kind: tag::WebPage,
    pub name: String,
    pub url: String,
    pub description: String,
    pub is_part_of: WebSiteRef,
    pub publisher: Organization,
    pub date_published: String,
    pub date_modified: String,
    pub breadcrumb: BreadcrumbRef,
}

/// `isPartOf` reference to the enclosing site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSiteRef {
    #[serde(rename = "@type")]
    pub kind: tag::WebSite,
    #[serde(rename = "@id")]
    pub id: String,
}

/// Breadcrumb embedded in a [`WebPage`], identified by `{url}#breadcrumb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbRef {
    #[serde(rename = "@type")]
    pub kind: tag::BreadcrumbList,
    #[serde(rename = "@id")]
    pub id: String,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: Context,
    #[serde(rename = "@type")]
    pub kind: tag::BreadcrumbList,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub kind: tag::ListItem,
    pub position: u32,
    pub name: String,
    pub item: String,
}

// ============================================================================
// WebApplication / SoftwareApplication
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApplication {
    #[serde(rename = "@context")]
    pub context: Context,
    #[serde(rename = "@type")]
    pub kind: tag::WebApplication,
    pub name: String,
    pub url: String,
    pub description: String,
    pub application_category: String,
    pub application_sub_category: String,
    pub operating_system: String,
    pub browser_requirements: String,
    pub software_version: String,
    pub release_notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    pub aggregate_rating: AggregateRating,
    pub offers: Offer,
    pub author: Organization,
    pub publisher: Organization,
    pub creator: Organization,
    pub maintainer: Organization,
    pub copyright_holder: Organization,
    pub license: String,
    pub is_accessible_for_free: bool,
    pub usage_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_list: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareApplication {
    #[serde(rename = "@context")]
    pub context: Context,
    #[serde(rename = "@type")]
    pub kind: tag::SoftwareApplication,
    pub name: String,
    pub description: String,
    pub url: String,
    pub application_category: String,
    pub application_sub_category: String,
    pub operating_system: String,
    pub software_version: String,
    pub date_published: String,
    pub date_modified: String,
    pub author: Organization,
    pub publisher: Organization,
    pub download_url: String,
    pub install_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    pub aggregate_rating: AggregateRating,
    pub offers: Offer,
}

/// Rating summary. Values are strings on the wire, the count is a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRating {
    #[serde(rename = "@type")]
    pub kind: tag::AggregateRating,
    pub rating_value: String,
    pub rating_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worst_rating: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub kind: tag::Offer,
    pub price: String,
    pub price_currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<String>,
}

// ============================================================================
// FAQPage
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqPage {
    #[serde(rename = "@context")]
    pub context: Context,
    #[serde(rename = "@type")]
    pub kind: tag::FaqPage,
    pub url: String,
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: tag::Question,
    pub name: String,
    pub accepted_answer: Answer,
}

impl Question {
    pub fn new(name: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            kind: tag::Question::Question,
            name: name.into(),
            accepted_answer: Answer {
                kind: tag::Answer::Answer,
                text: answer.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: tag::Answer,
    pub text: String,
}

// ============================================================================
// HowTo
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HowTo {
    #[serde(rename = "@context")]
    pub context: Context,
    #[serde(rename = "@type")]
    pub kind: tag::HowTo,
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub total_time: String,
    pub estimated_cost: MonetaryAmount,
    pub supply: Vec<HowToSupply>,
    pub tool: Vec<HowToTool>,
    pub step: Vec<HowToStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonetaryAmount {
    #[serde(rename = "@type")]
    pub kind: tag::MonetaryAmount,
    pub currency: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowToSupply {
    #[serde(rename = "@type")]
    pub kind: tag::HowToSupply,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowToTool {
    #[serde(rename = "@type")]
    pub kind: tag::HowToTool,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowToStep {
    #[serde(rename = "@type")]
    pub kind: tag::HowToStep,
    pub position: u32,
    pub name: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// ============================================================================
// Schema
// ============================================================================

/// Any top-level record.
///
/// Deserialization picks the variant whose `@type` matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Schema {
    Organization(Organization),
    WebSite(WebSite),
    WebPage(WebPage),
    WebApplication(WebApplication),
    SoftwareApplication(SoftwareApplication),
    BreadcrumbList(BreadcrumbList),
    FaqPage(FaqPage),
    HowTo(HowTo),
}

impl Schema {
    /// The `@type` value of the record.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Organization(_) => "Organization",
            Self::WebSite(_) => "WebSite",
            Self::WebPage(_) => "WebPage",
            Self::WebApplication(_) => "WebApplication",
            Self::SoftwareApplication(_) => "SoftwareApplication",
            Self::BreadcrumbList(_) => "BreadcrumbList",
            Self::FaqPage(_) => "FAQPage",
            Self::HowTo(_) => "HowTo",
        }
    }
}

macro_rules! impl_from_record {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Schema {
                fn from(record: $variant) -> Self {
                    Self::$variant(record)
                }
            }
        )*
    };
}

impl_from_record!(
    Organization,
    WebSite,
    WebPage,
    WebApplication,
    SoftwareApplication,
    BreadcrumbList,
    FaqPage,
    HowTo,
);
