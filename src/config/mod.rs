//! Site configuration management for `seomap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per TOML section
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Layering
//!
//! Built once in `main` and passed down by reference:
//!
//! ```text
//! defaults ─► seomap.toml ─► $SITE_URL / $API_BASE_URL ─► CLI flags
//! ```
//!
//! The config file is optional; without one every section keeps its
//! defaults and the current directory becomes the project root.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    BuildConfig, FeedConfig, FeedFormat, RobotsConfig, RoutesConfig, ServeConfig, SiteInfoConfig,
    SitemapConfig, SourceConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{BuildArgs, Cli, Commands, SiteArgs},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Environment variable overriding `site.url`.
pub const ENV_SITE_URL: &str = "SITE_URL";
/// Environment variable overriding `source.api_url`.
pub const ENV_API_URL: &str = "API_BASE_URL";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing seomap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site origin and feed metadata
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Post listing source
    #[serde(default)]
    pub source: SourceConfig,

    /// Route tree discovery
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Build output
    #[serde(default)]
    pub build: BuildConfig,

    /// Sitemap document
    #[serde(default)]
    pub sitemap: SitemapConfig,

    /// RSS/Atom document
    #[serde(default)]
    pub feed: FeedConfig,

    /// robots.txt document
    #[serde(default)]
    pub robots: RobotsConfig,

    /// HTTP server
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory, or cwd when there is no file.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let (mut config, config_path) = match find_config_file(&cli.config) {
            Some(path) => (Self::from_path(&path)?, path),
            None => {
                debug!("config"; "{} not found, using defaults", cli.config.display());
                (Self::default(), cwd.join(&cli.config))
            }
        };

        let root = config_path
            .parent()
            .map_or_else(|| cwd.clone(), Path::to_path_buf);

        debug!("config"; "project root {}", root.display());
        config.apply_env(|key| std::env::var(key).ok());
        config.apply_command_options(&cli.command);
        config.normalize_paths(&root);
        config.validate()?;

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
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    // ========================================================================
    // environment and cli configuration updates
    // ========================================================================

    /// Apply environment overrides. Empty values are ignored.
    ///
    /// Takes the lookup as a closure so tests never touch the real process
    /// environment.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(ENV_SITE_URL) {
            self.site.url = url;
        }
        if let Some(url) = non_empty(ENV_API_URL) {
            self.source.api_url = url;
        }
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, command: &Commands) {
        self.apply_site_args(command.site_args());

        match command {
            Commands::Build { build_args, .. } => self.apply_build_args(build_args),
            Commands::Serve {
                interface, port, ..
            } => {
                Self::update_option(&mut self.serve.interface, interface.as_ref());
                Self::update_option(&mut self.serve.port, port.as_ref());
            }
            Commands::Routes { .. } | Commands::Post { .. } => {}
        }
    }

    /// Apply content overrides shared by all commands.
    fn apply_site_args(&mut self, args: &SiteArgs) {
        Self::update_option(&mut self.site.url, args.site_url.as_ref());
        Self::update_option(&mut self.source.api_url, args.api_url.as_ref());
        Self::update_option(&mut self.routes.dir, args.routes_dir.as_ref());
        if let Some(fixture) = &args.fixture {
            self.source.fixture = Some(fixture.clone());
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.feed.enable, args.rss.as_ref());
        Self::update_option(&mut self.sitemap.enable, args.sitemap.as_ref());
        Self::update_option(&mut self.robots.enable, args.robots.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    ///
    /// Document paths (`sitemap.path`, `feed.path`, `robots.path`) stay
    /// relative: they name both the output file and the serve route.
    fn normalize_paths(&mut self, root: &Path) {
        use crate::utils::path::normalize_path;

        let root = normalize_path(root);
        self.routes.dir = normalize_path(&root.join(&self.routes.dir));
        self.build.output = normalize_path(&root.join(&self.build.output));
        if let Some(fixture) = self.source.fixture.take() {
            self.source.fixture = Some(normalize_path(&root.join(fixture)));
        }
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
        self.source.validate(&mut diag);
        self.routes.validate(&mut diag);
        self.sitemap.validate(&mut diag);
        self.feed.validate(&mut diag);
        self.robots.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_from_str_invalid_toml() {
        assert!(SiteConfig::parse_with_ignored("[site\nurl = \"https://example.com\"").is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut config = test_parse_config("[site]\nurl = \"https://file.example.com\"");
        config.apply_env(|key| match key {
            ENV_SITE_URL => Some("https://env.example.com".into()),
            ENV_API_URL => Some("https://api.example.com".into()),
            _ => None,
        });

        assert_eq!(config.site.url, "https://env.example.com");
        assert_eq!(config.source.api_url, "https://api.example.com");
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let mut config = SiteConfig::default();
        config.apply_env(|_| Some("  ".into()));
        assert_eq!(config.site.url, SiteInfoConfig::default().url);
        assert_eq!(config.source.api_url, SourceConfig::default().api_url);
    }

    #[test]
    fn test_cli_overrides_env() {
        let cli = Cli::try_parse_from([
            "seomap",
            "build",
            "--site-url",
            "https://cli.example.com",
            "--sitemap",
            "false",
            "-o",
            "dist",
        ])
        .unwrap();

        let mut config = SiteConfig::default();
        config.apply_env(|key| (key == ENV_SITE_URL).then(|| "https://env.example.com".into()));
        config.apply_command_options(&cli.command);

        assert_eq!(config.site.url, "https://cli.example.com");
        assert!(!config.sitemap.enable);
        assert_eq!(config.build.output, PathBuf::from("dist"));
    }

    #[test]
    fn test_normalize_paths_against_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_parse_config("[routes]\ndir = \"src/app\"\n[build]\noutput = \"out\"");
        config.normalize_paths(dir.path());

        assert!(config.routes.dir.ends_with("src/app"));
        assert!(config.build.output.ends_with("out"));
        assert!(config.routes.dir.is_absolute());
        assert!(config.build.output.starts_with(crate::utils::path::normalize_path(dir.path())));
    }

    #[test]
    fn test_validate_rejects_document_outside_output() {
        let mut config = SiteConfig::default();
        config.sitemap.path = "/escaped.xml".into();
        assert!(config.validate().is_err());

        config.sitemap.path = "sitemap.xml".into();
        config.feed.path = "../escaped.xml".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_reports_all_errors() {
        let mut config = SiteConfig::default();
        config.site.url = "nope".into();
        config.source.api_url = "also nope".into();

        let err = config.validate().unwrap_err();
        let diag = match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => diag,
            other => panic!("unexpected error: {other:?}"),
        };
        assert!(diag.len() >= 2);
    }
}
