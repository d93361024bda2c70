//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Schema.org JSON-LD and SEO metadata generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: schemagen.toml)
    #[arg(short = 'C', long, global = true, default_value = "schemagen.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override site URL.
    ///
    /// Useful when the production URL differs from the one in schemagen.toml:
    ///   schemagen build --site-url "https://staging.example.com"
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Fixed dateModified (YYYY-MM-DD), defaults to [build] date or today
    #[arg(long, global = true)]
    pub date: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter schemagen.toml with the built-in site
    #[command(visible_alias = "i")]
    Init {
        /// Project directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Render structured data for a single route
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Render every route to the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// List configured routes and their resolved page names
    Routes,

    /// Check JSON-LD in rendered head fragments
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },
}

/// Output format of `render`.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderFormat {
    /// JSON array of every schema
    #[default]
    Json,
    /// `<script type="application/ld+json">` elements
    Html,
    /// Meta tags followed by script elements
    Head,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Route path, e.g. `/png-to-webp` (percent-encoded input is accepted)
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = RenderFormat::Json)]
    pub format: RenderFormat,

    /// Pretty-print JSON
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Pretty-print JSON-LD files
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub pretty: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Head fragments or directories to validate.
    /// If omitted, every route is rendered and validated in memory.
    #[arg(value_name = "PATH", value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Treat validation failures as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}
