//! seomap - sitemap, feed and robots.txt generator for content blogs.

mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod page;
mod source;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config).map(|_| ()),
        Commands::Serve { .. } => cli::serve::serve(&config),
        Commands::Routes { .. } => cli::routes::print_routes(&config),
        Commands::Post { id, pretty, .. } => cli::post::print_post(&config, id, *pretty),
    }
}
