//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// seomap: sitemap, feed and robots.txt generator for content blogs
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: seomap.toml, searched upwards)
    #[arg(short = 'C', long, global = true, default_value = "seomap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

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
    /// Write sitemap, feed and robots.txt to the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,

        #[command(flatten)]
        site_args: SiteArgs,
    },

    /// Serve sitemap, feed and robots.txt, recomputed per request
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        site_args: SiteArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the static routes discovered in the route tree
    #[command(visible_alias = "r")]
    Routes {
        #[command(flatten)]
        site_args: SiteArgs,
    },

    /// Fetch one post by id and print it as JSON
    #[command(visible_alias = "p")]
    Post {
        /// Post identifier
        id: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        site_args: SiteArgs,
    },
}

/// Arguments that override where content comes from.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SiteArgs {
    /// Override site origin (also read from $SITE_URL)
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Override listing API base URL (also read from $API_BASE_URL)
    #[arg(short = 'A', long = "api-url", value_hint = clap::ValueHint::Url)]
    pub api_url: Option<String>,

    /// Read posts from a local JSON file instead of the API
    #[arg(short = 'F', long, value_hint = clap::ValueHint::FilePath)]
    pub fixture: Option<PathBuf>,

    /// Route tree directory (relative to project root)
    #[arg(short = 'R', long = "routes-dir", value_hint = clap::ValueHint::DirPath)]
    pub routes_dir: Option<PathBuf>,
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Minify XML output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable feed generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub rss: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Enable robots.txt generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub robots: Option<bool>,
}

impl Commands {
    /// Content overrides shared by every subcommand.
    pub fn site_args(&self) -> &SiteArgs {
        match self {
            Self::Build { site_args, .. }
            | Self::Serve { site_args, .. }
            | Self::Routes { site_args }
            | Self::Post { site_args, .. } => site_args,
        }
    }
}
