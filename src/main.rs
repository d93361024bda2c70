//! schemagen - Schema.org JSON-LD, head metadata and sitemap generator.

mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod route;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        // Init writes the config, so it must not require one.
        Commands::Init { name, dry } => cli::init::init_site(name.as_deref(), *dry),
        Commands::Render { args } => cli::render::render_route(args, &SiteConfig::load(&cli)?),
        Commands::Build { .. } => {
            cli::build::build_site(&SiteConfig::load(&cli)?, false).map(|_| ())
        }
        Commands::Routes => cli::routes::list_routes(&SiteConfig::load(&cli)?),
        Commands::Validate { args } => cli::validate::validate_site(args, &SiteConfig::load(&cli)?),
    }
}
