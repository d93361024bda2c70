//! Single-route rendering.

use super::args::{RenderArgs, RenderFormat};
use crate::{
    config::SiteConfig,
    core::RoutePath,
    debug,
    generator::script,
    log,
    seo::{PageMeta, generate_page_graph},
    utils::fs::write_file,
};
use anyhow::Result;
use std::io::Write;

/// Render one route and print it, or write it to `--output`.
pub fn render_route(args: &RenderArgs, config: &SiteConfig) -> Result<()> {
    let path = RoutePath::from_browser(&args.path);
    if !config.routes.contains(path.as_str()) {
        debug!("render"; "{} is not a configured route, using root metadata", path);
    }

    let output = render(&path, args.format, config)?;

    match &args.output {
        Some(file) => {
            write_file(file, &output)?;
            log!("render"; "{} -> {}", path, file.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            if !output.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

fn render(path: &RoutePath, format: RenderFormat, config: &SiteConfig) -> Result<String> {
    let schemas = generate_page_graph(path.as_str(), config, config.render_date()).scripts();
    let pretty = config.build.pretty;

    match format {
        RenderFormat::Json => script::to_json(&schemas, pretty),
        RenderFormat::Html => script::render_scripts(&schemas, pretty),
        RenderFormat::Head => {
            let meta = PageMeta::resolve(path.as_str(), config);
            script::render_head(&meta, &schemas, pretty)
        }
    }
}
