//! Post source adapters.
//!
//! Everything that knows where posts come from lives here. The rest of the
//! crate sees only the [`PostSource`] trait:
//!
//! ```text
//! PostSource
//! ├── HttpPostSource   GET <api_url>/home/all-posts?page=&limit=
//! └── FilePostSource   local JSON document, loaded once
//! ```
//!
//! Both accept the same response envelopes (see [`envelope`]).

pub mod envelope;
mod file;
mod http;

pub use file::FilePostSource;
pub use http::HttpPostSource;

use crate::config::SiteConfig;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// A blog post as the generators see it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Publication timestamp, falling back to the creation timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Only filled by post-by-id lookups.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

/// A comment attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
}

/// One page of a post listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsPage {
    pub posts: Vec<Post>,
    pub has_next_page: bool,
}

impl PostsPage {
    /// The page returned when a request could not be served.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed JSON from {origin}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// One-line message including the underlying cause.
    pub fn detail(&self) -> String {
        match std::error::Error::source(self) {
            Some(cause) => format!("{self}: {cause}"),
            None => self.to_string(),
        }
    }
}

/// Read-only access to posts.
///
/// One call is one request: implementations never retry.
pub trait PostSource {
    /// Fetch one listing page. `page` starts at 1.
    fn fetch_posts_page(&self, page: u32, limit: u32) -> Result<PostsPage, SourceError>;

    /// Fetch a single post. Unknown ids yield `Ok(None)`.
    fn fetch_post(&self, id: &str) -> Result<Option<Post>, SourceError>;
}

/// Open the source selected by `[source]`.
pub fn open(config: &SiteConfig) -> Result<Box<dyn PostSource>, SourceError> {
    match &config.source.fixture {
        Some(path) => Ok(Box::new(FilePostSource::open(path)?)),
        None => Ok(Box::new(HttpPostSource::new(config)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_json_skips_empty_fields() {
        let post = Post {
            id: "1".into(),
            title: Some("Hello".into()),
            ..Post::default()
        };
        let json = serde_json::to_string(&post).unwrap();
        assert_eq!(json, r#"{"id":"1","title":"Hello"}"#);
    }

    #[test]
    fn test_open_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, r#"[{"id": 1, "title": "One"}]"#).unwrap();

        let mut config = SiteConfig::default();
        config.source.fixture = Some(path);

        let source = open(&config).unwrap();
        let page = source.fetch_posts_page(1, 10).unwrap();
        assert_eq!(page.posts.len(), 1);
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_open_missing_fixture() {
        let mut config = SiteConfig::default();
        config.source.fixture = Some(PathBuf::from("/nonexistent/posts.json"));
        assert!(matches!(open(&config), Err(SourceError::Io { .. })));
    }
}
