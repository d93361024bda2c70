//! `WebSite` schema with a site search action.

use super::types::{Context, EntryPoint, Organization, SearchAction, WebSite, tag};

#[derive(Debug, Clone)]
pub struct WebSiteParams<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub description: &'a str,
    pub publisher: Organization,
}

pub fn website_schema(params: WebSiteParams<'_>) -> WebSite {
    WebSite {
        context: Context::SchemaOrg,
        kind: tag::WebSite::WebSite,
        name: params.name.into(),
        url: params.url.into(),
        description: params.description.into(),
        publisher: params.publisher,
        potential_action: SearchAction {
            kind: tag::SearchAction::SearchAction,
            target: EntryPoint {
                kind: tag::EntryPoint::EntryPoint,
                url_template: format!("{}/?q={{search_term_string}}", params.url),
            },
        },
    }
}
