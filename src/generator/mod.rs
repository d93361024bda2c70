//! Output generators.
//!
//! - **Script**: JSON-LD arrays, `<script>` elements and head fragments
//! - **Sitemap**: Search engine indexing (`sitemap.xml`)
//!
//! [`render_page`] runs the SEO layer for one route and serializes both
//! per-route artifacts, so `render`, `build` and `validate` share one path.

pub mod script;
pub mod sitemap;

use crate::{
    config::SiteConfig,
    core::RoutePath,
    seo::{PageMeta, generate_page_graph},
    utils::date::Date,
};
use anyhow::Result;

/// Serialized artifacts of one route.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub path: RoutePath,
    /// JSON array of every embedded schema.
    pub json: String,
    /// Meta tags followed by script elements.
    pub head: String,
}

/// Render the JSON-LD array and the head fragment of `path`.
pub fn render_page(path: &RoutePath, config: &SiteConfig, date: Date) -> Result<RenderedPage> {
    let schemas = generate_page_graph(path.as_str(), config, date).scripts();
    let meta = PageMeta::resolve(path.as_str(), config);
    let pretty = config.build.pretty;

    Ok(RenderedPage {
        path: path.clone(),
        json: script::to_json(&schemas, pretty)?,
        head: script::render_head(&meta, &schemas, pretty)?,
    })
}
