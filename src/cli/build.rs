//! Site building orchestration.
//!
//! Build phases:
//! - **Init** - Clear the output directory when `--clean` is set
//! - **Render** - Parallel per-route JSON-LD and head fragment rendering
//! - **Sitemap** - `sitemap.xml` over every route
//! - **Finalize** - Summary logging

use crate::{
    config::SiteConfig,
    core::RoutePath,
    generator::{RenderedPage, render_page, sitemap::build_sitemap},
    log,
    logger::ProgressLine,
    utils::{
        date::Date,
        fs::{normalize_path, write_file},
        plural_count,
    },
};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::{fs, path::Path};

/// JSON-LD array of a route.
pub const JSONLD_FILE: &str = "index.jsonld";
/// Meta tags and script elements of a route.
pub const HEAD_FILE: &str = "head.html";

/// Outcome of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub routes: usize,
    pub sitemap: bool,
}

/// Render every configured route into the output directory.
///
/// Pipeline: init -> render (parallel) -> sitemap -> finalize
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildSummary> {
    let output = config.output_dir();
    init_output(config, &output)?;

    let date = config.render_date();
    let routes: Vec<RoutePath> = config.routes.paths().map(RoutePath::new).collect();

    let progress = (!quiet).then(|| ProgressLine::new(&[("routes", routes.len())]));
    render_routes(config, &routes, &output, date, progress.as_ref())?;
    if let Some(p) = progress {
        p.finish();
    }

    let sitemap = build_sitemap(config, date)?.is_some();

    let summary = BuildSummary {
        routes: routes.len(),
        sitemap,
    };
    if !quiet {
        log!("build"; "{} -> {} (dateModified {})",
            plural_count(summary.routes, "route"), output.display(), date);
    }
    Ok(summary)
}

/// Create the output directory, clearing it first on `--clean`.
fn init_output(config: &SiteConfig, output: &Path) -> Result<()> {
    if config.build.clean && output.exists() {
        if normalize_path(&config.root).starts_with(output) {
            bail!(
                "Refusing to clean output directory '{}': it contains the project root",
                output.display()
            );
        }
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

/// Render and write routes in parallel. Each route owns its directory.
fn render_routes(
    config: &SiteConfig,
    routes: &[RoutePath],
    output: &Path,
    date: Date,
    progress: Option<&ProgressLine>,
) -> Result<()> {
    routes.par_iter().try_for_each(|route| {
        let page = render_page(route, config, date)
            .with_context(|| format!("Failed to render {route}"))?;
        write_page(&page, output)?;
        if let Some(p) = progress {
            p.inc("routes");
        }
        Ok(())
    })
}

fn write_page(page: &RenderedPage, output: &Path) -> Result<()> {
    let dir = page.path.output_dir(output);
    write_file(&dir.join(JSONLD_FILE), &page.json)?;
    write_file(&dir.join(HEAD_FILE), &page.head)
}
