//! Project initialization.
//!
//! Writes the built-in site configuration as an editable `schemagen.toml`.

use crate::{config::BUILTIN_CONFIG, log, utils::fs::write_file};
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

/// Default config filename
pub const CONFIG_FILE: &str = "schemagen.toml";

/// Initialize a project in `name` (relative to cwd) or in cwd itself.
///
/// If `dry_run` is true, only prints the config template to stdout.
pub fn init_site(name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = name.map_or_else(|| cwd.clone(), |name| cwd.join(name));

    let path = write_config(&root)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Built-in config with a version header.
fn config_template() -> String {
    format!(
        "# schemagen configuration file (v{})\n\n{}",
        env!("CARGO_PKG_VERSION"),
        BUILTIN_CONFIG
    )
}

/// Write `schemagen.toml` into `root`, creating it if needed.
///
/// Never overwrites an existing config.
fn write_config(root: &Path) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it or choose a different directory.",
            path.display()
        );
    }
    write_file(&path, config_template())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_config_creates_directory() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("new_site");

        let path = write_config(&root).unwrap();
        assert_eq!(path, root.join(CONFIG_FILE));

        let config = SiteConfig::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(config.site.name, "FreeConvert");
        assert_eq!(config.routes.len(), 30);
    }

    #[test]
    fn test_write_config_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "# mine").unwrap();

        assert!(write_config(temp.path()).is_err());
        assert_eq!(
            fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap(),
            "# mine"
        );
    }

    #[test]
    fn test_template_starts_with_header() {
        assert!(config_template().starts_with("# schemagen configuration file (v"));
    }
}
