//! Site configuration management for `schemagen.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build], [build.sitemap]
//! │   ├── organization
//! │   ├── schema     # [schema]
//! │   └── site       # [site], [site.author], [site.verification]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath, config_fields!
//! ├── builtin.toml   # Compiled-in FreeConvert site
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section              | Purpose                                        |
//! |----------------------|------------------------------------------------|
//! | `[site]`             | Name, URL, default imagery, keywords           |
//! | `[organization]`     | Publishing organization details                |
//! | `[schema]`           | Brand, publish date, homepage features         |
//! | `[routes."/path"]`   | Per-route title, description, keywords         |
//! | `[build]`            | Output directory, sitemap, fixed render date   |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    AuthorConfig, BuildSectionConfig, OrganizationConfig, SchemaConfig, SiteInfoConfig,
    SitemapConfig, VerificationConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub(crate) use types::config_fields;

use crate::{
    cli::{Cli, Commands},
    debug, log,
    route::RouteTable,
    utils::date::Date,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Source of the compiled-in configuration.
pub const BUILTIN_CONFIG: &str = include_str!("builtin.toml");

const ROUTES_FIELD: FieldPath = FieldPath::new("routes");

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing schemagen.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, `None` for the built-in config
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// `dateModified` override from the command line (internal use only)
    #[serde(skip)]
    pub date_override: Option<String>,

    #[serde(default)]
    pub site: SiteInfoConfig,

    #[serde(default)]
    pub organization: OrganizationConfig,

    #[serde(default)]
    pub schema: SchemaConfig,

    /// Route metadata table
    #[serde(default)]
    pub routes: RouteTable,

    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file and falls back to the
    /// built-in site when none is found. The project root is the config
    /// file's parent directory, or cwd for the built-in config.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                config
            }
            None => {
                if cli.config != Path::new("schemagen.toml") {
                    return Err(ConfigError::Io(
                        cli.config.clone(),
                        std::io::Error::new(std::io::ErrorKind::NotFound, "config file not found"),
                    )
                    .into());
                }
                debug!("config"; "no {} found, using built-in site", cli.config.display());
                let mut config = Self::builtin()?;
                config.root = cwd;
                config
            }
        };

        config.apply_cli(cli);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// The compiled-in FreeConvert configuration.
    pub fn builtin() -> Result<Self> {
        Self::from_str(BUILTIN_CONFIG).context("Failed to parse built-in config")
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Absolute output directory.
    pub fn output_dir(&self) -> PathBuf {
        crate::utils::fs::normalize_path(&self.root_join(&self.build.output))
    }

    /// Date written to `dateModified` and sitemap `lastmod`.
    ///
    /// CLI `--date`, then `[build] date`, then today (UTC).
    pub fn render_date(&self) -> Date {
        self.date_override
            .as_deref()
            .or(self.build.date.as_deref())
            .and_then(Date::parse)
            .unwrap_or_else(Date::today)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply global and command-specific CLI overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.site.url, cli.site_url.as_ref());
        if cli.date.is_some() {
            self.date_override = cli.date.clone();
        }

        match &cli.command {
            Commands::Build { build_args } => {
                Self::update_option(&mut self.build.output, build_args.output.as_ref());
                Self::update_option(&mut self.build.pretty, build_args.pretty.as_ref());
                Self::update_option(&mut self.build.sitemap.enable, build_args.sitemap.as_ref());
                self.build.clean = build_args.clean;
            }
            Commands::Render { args } => {
                self.build.pretty |= args.pretty;
            }
            Commands::Init { .. } | Commands::Routes | Commands::Validate { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Canonicalize values that generators concatenate.
    fn normalize(&mut self) {
        let trimmed = self.site.url.trim().trim_end_matches('/').to_string();
        self.site.url = trimmed;
        self.root = crate::utils::fs::normalize_path(&self.root);
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.organization.validate(&mut diag);
        self.schema.validate(&mut diag);
        self.build.validate(&mut diag);
        self.validate_routes(&mut diag);

        if let Some(date) = &self.date_override
            && Date::parse(date).is_none()
        {
            diag.error_with_hint(
                FieldPath::new("--date"),
                format!("invalid date '{date}'"),
                "use YYYY-MM-DD",
            );
        }

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Route keys must be canonical paths and `/` must exist.
    fn validate_routes(&self, diag: &mut ConfigDiagnostics) {
        if !self.routes.contains(RouteTable::ROOT) {
            diag.error_with_hint(
                ROUTES_FIELD,
                "missing root route, unknown paths have nothing to fall back to",
                "add a [routes.\"/\"] table",
            );
        }

        for path in self.routes.paths() {
            if !path.starts_with('/') {
                diag.error_with_hint(
                    ROUTES_FIELD,
                    format!("route '{path}' must start with '/'"),
                    format!("rename it to \"/{path}\""),
                );
            } else if path.split('/').any(|s| s == "." || s == "..") {
                diag.error(
                    ROUTES_FIELD,
                    format!("route '{path}' contains a relative segment"),
                );
            } else if path.len() > 1 && path.ends_with('/') {
                diag.error_with_hint(
                    ROUTES_FIELD,
                    format!("route '{path}' has a trailing slash"),
                    format!("rename it to \"{}\"", path.trim_end_matches('/')),
                );
            }
        }

        for (path, meta) in self.routes.iter() {
            if meta.title.is_none() {
                diag.warn(ROUTES_FIELD, format!("route '{path}' has no title"));
            }
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required fields plus `extra`.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\nname = \"Test\"\ndescription = \"Test site\"\nurl = \"https://example.com\"\n\
         [site.author]\nname = \"Test Org\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Built-in config with a fixed render date.
#[cfg(test)]
pub fn test_builtin_config() -> SiteConfig {
    let mut config = SiteConfig::builtin().unwrap();
    config.date_override = Some("2025-01-15".into());
    config
}

// ============================================================================
// tests
// ============================================================================
