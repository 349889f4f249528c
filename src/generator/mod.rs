//! SEO document generators.
//!
//! One [`Assembler`] renders every document; an [`Emit`] strategy decides
//! where it goes:
//!
//! ```text
//! routes ─┐
//!         ├─► Assembler ─► Document ─► FileEmitter      (build)
//! posts  ─┘                         └► response emitter (serve)
//! ```
//!
//! - **Sitemap**: static routes plus every post (`sitemap.xml`)
//! - **Feed**: RSS/Atom from the first listing page (`rss.xml`)
//! - **Robots**: crawler rules (`robots.txt`)

pub mod collect;
pub mod feed;
pub mod robots;
pub mod sitemap;

use crate::{
    config::SiteConfig,
    debug, log,
    page::{RouteRules, discover_routes},
    source::PostSource,
    utils::{date::DateTimeUtc, mime, path::ensure_parent, xml::minify_xml},
};
use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Which document a [`Document`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Sitemap,
    Feed,
    Robots,
}

impl DocumentKind {
    pub const ALL: [Self; 3] = [Self::Sitemap, Self::Feed, Self::Robots];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sitemap => "sitemap",
            Self::Feed => "feed",
            Self::Robots => "robots",
        }
    }
}

/// A rendered document ready to be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub kind: DocumentKind,
    /// Path relative to the output root, also the serve route.
    pub path: PathBuf,
    pub content_type: &'static str,
    pub body: String,
}

/// Where rendered documents go.
pub trait Emit {
    type Output;

    fn emit(&self, document: Document) -> Result<Self::Output>;
}

/// Writes documents below an output directory.
#[derive(Debug, Clone)]
pub struct FileEmitter {
    root: PathBuf,
}

impl FileEmitter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Emit for FileEmitter {
    type Output = PathBuf;

    /// Creates missing parent directories, then writes the whole body at once.
    fn emit(&self, document: Document) -> Result<PathBuf> {
        let path = self.root.join(&document.path);
        ensure_parent(&path)
            .with_context(|| format!("Failed to create directory for {}", path.display()))?;
        fs::write(&path, document.body.as_bytes())
            .with_context(|| format!("Failed to write {} to {}", document.kind.name(), path.display()))?;

        log!(document.kind.name(); "{}", document.path.display());
        Ok(path)
    }
}

/// Renders documents from routes and posts.
///
/// Holds no state between calls: every render re-discovers routes and
/// re-fetches posts.
pub struct Assembler<'a> {
    config: &'a SiteConfig,
    source: &'a dyn PostSource,
    now: DateTimeUtc,
}

impl<'a> Assembler<'a> {
    pub fn new(config: &'a SiteConfig, source: &'a dyn PostSource) -> Self {
        Self {
            config,
            source,
            now: DateTimeUtc::now(),
        }
    }

    /// Fix the generation time stamped on static entries.
    #[cfg(test)]
    pub fn at(mut self, now: DateTimeUtc) -> Self {
        self.now = now;
        self
    }

    /// Whether a document kind is enabled.
    pub fn is_enabled(&self, kind: DocumentKind) -> bool {
        match kind {
            DocumentKind::Sitemap => self.config.sitemap.enable,
            DocumentKind::Feed => self.config.feed.enable,
            DocumentKind::Robots => self.config.robots.enable,
        }
    }

    /// Configured path of a document kind.
    pub fn path_of(&self, kind: DocumentKind) -> &'a Path {
        match kind {
            DocumentKind::Sitemap => &self.config.sitemap.path,
            DocumentKind::Feed => &self.config.feed.path,
            DocumentKind::Robots => &self.config.robots.path,
        }
    }

    /// The enabled document served at a site path (`/sitemap.xml`).
    pub fn kind_for_route(&self, route: &str) -> Option<DocumentKind> {
        let route = route.trim_start_matches('/');
        DocumentKind::ALL
            .into_iter()
            .filter(|&kind| self.is_enabled(kind))
            .find(|&kind| self.path_of(kind) == Path::new(route))
    }

    /// Render one document.
    ///
    /// Source failures never surface here: they leave the post-derived
    /// parts of the document empty.
    pub fn render(&self, kind: DocumentKind) -> Result<Document> {
        let (content_type, body) = match kind {
            DocumentKind::Sitemap => (
                mime::from_path(self.path_of(kind)),
                self.minify(self.sitemap_xml()),
            ),
            DocumentKind::Feed => (
                feed::content_type(self.config.feed.format),
                self.minify(self.feed_xml()?),
            ),
            DocumentKind::Robots => (
                mime::from_path(self.path_of(kind)),
                robots::render_robots(self.config),
            ),
        };

        Ok(Document {
            kind,
            path: self.path_of(kind).to_path_buf(),
            content_type,
            body,
        })
    }

    /// Render every enabled document and hand each to `emitter`.
    pub fn emit_all<E: Emit>(&self, emitter: &E) -> Result<Vec<E::Output>> {
        DocumentKind::ALL
            .into_iter()
            .filter(|&kind| self.is_enabled(kind))
            .map(|kind| emitter.emit(self.render(kind)?))
            .collect()
    }

    fn sitemap_xml(&self) -> String {
        let rules = RouteRules::from_config(&self.config.routes);
        let routes = discover_routes(&self.config.routes.dir, &rules);
        let posts = collect::collect_posts_or_empty(
            self.source,
            self.config.source.page_limit,
            self.config.source.max_pages,
        );
        debug!("sitemap"; "{} routes, {} posts", routes.len(), posts.len());

        sitemap::Sitemap::build(self.config, &routes, &posts, self.now).into_xml()
    }

    fn feed_xml(&self) -> Result<String> {
        let posts = collect::first_page_or_empty(self.source, self.config.feed.limit);
        feed::render_feed(&posts, self.config, self.now)
    }

    fn minify(&self, xml: String) -> String {
        minify_xml(xml, self.config.build.minify)
    }
}
