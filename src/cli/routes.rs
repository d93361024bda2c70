//! Route listing.

use crate::config::SiteConfig;
use owo_colors::{OwoColorize, Stream};
use std::io::Write;

/// Print every configured route with its resolved page name.
pub fn list_routes(config: &SiteConfig) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for (path, name) in route_names(config) {
        let path = path.if_supports_color(Stream::Stdout, |text| text.cyan());
        writeln!(stdout, "{:<width$} {}", path, name, width = column_width(config))?;
    }
    Ok(())
}

/// `(path, page name)` in route table order.
fn route_names(config: &SiteConfig) -> impl Iterator<Item = (&str, &str)> {
    config
        .routes
        .paths()
        .map(|path| (path, config.routes.page_name(path, &config.site.name)))
}

fn column_width(config: &SiteConfig) -> usize {
    config.routes.paths().map(str::len).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_builtin_config;

    #[test]
    fn test_route_names() {
        let config = test_builtin_config();
        let names: Vec<_> = route_names(&config).collect();
        assert_eq!(names.len(), 30);
        assert_eq!(names[0].0, "/");
        assert!(names.contains(&("/png-to-webp", "PNG to WebP Converter")));
    }

    #[test]
    fn test_column_width() {
        let config = crate::config::test_parse_config("[routes.\"/\"]\n[routes.\"/abc\"]\n");
        assert_eq!(column_width(&config), 4);
    }
}
