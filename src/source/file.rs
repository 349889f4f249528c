//! Post source backed by a local JSON document.

use super::{Post, PostSource, PostsPage, SourceError, envelope};
use crate::debug;
use serde_json::Value;
use std::{fs, path::Path};

/// Serves posts from a JSON file read once at startup.
///
/// The file may use any listing envelope the API uses. Pages are cut from
/// the loaded list, so pagination metadata in the file is ignored.
#[derive(Debug, Clone, Default)]
pub struct FilePostSource {
    posts: Vec<Post>,
}

impl FilePostSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let body: Value = serde_json::from_str(&content).map_err(|source| SourceError::Json {
            origin: path.display().to_string(),
            source,
        })?;

        let posts = envelope::decode_posts(&body);
        debug!("source"; "loaded {} posts from {}", posts.len(), path.display());
        Ok(Self { posts })
    }
}

impl PostSource for FilePostSource {
    fn fetch_posts_page(&self, page: u32, limit: u32) -> Result<PostsPage, SourceError> {
        if page == 0 || limit == 0 {
            return Ok(PostsPage::empty());
        }

        let limit = limit as usize;
        let start = (page as usize - 1).saturating_mul(limit);
        let end = start.saturating_add(limit).min(self.posts.len());

        Ok(PostsPage {
            posts: self.posts.get(start..end).unwrap_or_default().to_vec(),
            has_next_page: end < self.posts.len(),
        })
    }

    fn fetch_post(&self, id: &str) -> Result<Option<Post>, SourceError> {
        Ok(self.posts.iter().find(|p| p.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> FilePostSource {
        FilePostSource {
            posts: (1..=count)
                .map(|i| Post {
                    id: i.to_string(),
                    ..Post::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_pages() {
        let source = numbered(5);

        let first = source.fetch_posts_page(1, 2).unwrap();
        assert_eq!(first.posts.len(), 2);
        assert!(first.has_next_page);

        let last = source.fetch_posts_page(3, 2).unwrap();
        assert_eq!(last.posts.len(), 1);
        assert_eq!(last.posts[0].id, "5");
        assert!(!last.has_next_page);

        let beyond = source.fetch_posts_page(9, 2).unwrap();
        assert!(beyond.posts.is_empty());
        assert!(!beyond.has_next_page);
    }

    #[test]
    fn test_exact_fit_has_no_next_page() {
        let page = numbered(4).fetch_posts_page(2, 2).unwrap();
        assert_eq!(page.posts.len(), 2);
        assert!(!page.has_next_page);
    }

    #[test]
    fn test_degenerate_requests() {
        let source = numbered(3);
        assert_eq!(source.fetch_posts_page(0, 10).unwrap(), PostsPage::empty());
        assert_eq!(source.fetch_posts_page(1, 0).unwrap(), PostsPage::empty());
    }

    #[test]
    fn test_open_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(
            &path,
            r#"{"data": {"posts": [{"id": "a", "title": "A"}, {"id": "b"}]}, "meta": {"hasMore": true}}"#,
        )
        .unwrap();

        let source = FilePostSource::open(&path).unwrap();
        assert_eq!(source.posts.len(), 2);
        assert!(!source.fetch_posts_page(1, 10).unwrap().has_next_page);
        assert_eq!(
            source.fetch_post("a").unwrap().unwrap().title.as_deref(),
            Some("A")
        );
        assert_eq!(source.fetch_post("z").unwrap(), None);
    }

    #[test]
    fn test_open_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            FilePostSource::open(&path),
            Err(SourceError::Json { .. })
        ));
    }
}
