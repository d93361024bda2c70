//! Validation input collection.
//!
//! Sources are either freshly rendered routes or head fragments on disk.

use crate::{
    cli::build::HEAD_FILE,
    config::SiteConfig,
    core::RoutePath,
    generator::render_page,
};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// HTML to validate and where it came from.
#[derive(Debug, Clone)]
pub struct Source {
    pub name: String,
    pub html: String,
}

/// Render the head fragment of every configured route.
pub fn render_routes(config: &SiteConfig) -> Result<Vec<Source>> {
    let date = config.render_date();
    config
        .routes
        .paths()
        .collect::<Vec<_>>()
        .par_iter()
        .map(|path| {
            let page = render_page(&RoutePath::new(path), config, date)?;
            Ok(Source {
                name: page.path.to_string(),
                html: page.head,
            })
        })
        .collect()
}

/// Read the given files, and every `head.html` below the given directories.
pub fn read_paths(paths: &[PathBuf]) -> Result<Vec<Source>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            collect_head_files(path, &mut files)?;
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            bail!("'{}' does not exist", path.display());
        }
    }

    files
        .par_iter()
        .map(|file| {
            let html = fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            Ok(Source {
                name: file.display().to_string(),
                html,
            })
        })
        .collect()
}

/// Recursively collect `head.html` files in sorted order.
fn collect_head_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory '{}'", dir.display()))?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .collect();
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_head_files(&path, files)?;
        } else if path.file_name().is_some_and(|n| n == HEAD_FILE) {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_builtin_config;
    use crate::utils::fs::write_file;
    use tempfile::TempDir;

    #[test]
    fn test_render_routes() {
        let sources = render_routes(&test_builtin_config()).unwrap();
        assert_eq!(sources.len(), 30);
        assert_eq!(sources[0].name, "/");
        assert!(sources.iter().all(|s| s.html.contains("application/ld+json")));
    }

    #[test]
    fn test_read_paths_walks_directories() {
        let temp = TempDir::new().unwrap();
        write_file(&temp.path().join(HEAD_FILE), "<head>").unwrap();
        write_file(&temp.path().join("a/b").join(HEAD_FILE), "<b>").unwrap();
        write_file(&temp.path().join("a/index.jsonld"), "[]").unwrap();
        let extra = temp.path().join("custom.html");
        write_file(&extra, "<x>").unwrap();

        let sources = read_paths(&[temp.path().to_path_buf(), extra]).unwrap();
        assert_eq!(sources.len(), 3);
        assert!(sources[0].name.ends_with("a/b/head.html"));
        assert_eq!(sources[2].html, "<x>");
    }

    #[test]
    fn test_read_paths_missing() {
        assert!(read_paths(&[PathBuf::from("/nonexistent/head.html")]).is_err());
    }
}
