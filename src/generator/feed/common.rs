//! Common utilities for feed generation.

use crate::{
    config::SiteConfig,
    page::post_path,
    source::Post,
    utils::{date::DateTimeUtc, path::join_url},
};

/// Title of posts that have none.
const UNTITLED: &str = "Untitled";

/// A post resolved for feed inclusion.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    /// Absolute URL, also used as the item id.
    pub link: String,
    pub summary: Option<String>,
    pub published: Option<DateTimeUtc>,
    pub author: Option<String>,
}

impl FeedItem {
    fn from_post(post: &Post, config: &SiteConfig) -> Self {
        let path = post_path(&config.site.posts_prefix, &post.id, post.title.as_deref());
        Self {
            title: post.title.clone().unwrap_or_else(|| UNTITLED.to_string()),
            link: join_url(&config.site.url, &path),
            summary: post.summary.clone(),
            published: post.published.as_deref().and_then(DateTimeUtc::parse),
            author: post.author.clone(),
        }
    }

    /// Stand-in item pointing at the site root.
    fn placeholder(config: &SiteConfig) -> Self {
        Self {
            title: config.site.title.clone(),
            link: join_url(&config.site.url, "/"),
            summary: Some(config.site.description.clone()),
            published: None,
            author: None,
        }
    }
}

/// Resolve posts into feed items.
///
/// Feeds are never empty: without posts there is exactly one placeholder
/// item linking to the site root.
pub fn feed_items(posts: &[Post], config: &SiteConfig) -> Vec<FeedItem> {
    if posts.is_empty() {
        return vec![FeedItem::placeholder(config)];
    }
    posts.iter().map(|p| FeedItem::from_post(p, config)).collect()
}

/// Most recent publication time among items.
pub fn latest(items: &[FeedItem]) -> Option<DateTimeUtc> {
    items
        .iter()
        .filter_map(|item| item.published)
        .max_by_key(|dt| dt.to_unix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::collect::testing::post;

    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.url = "https://example.com".to_string();
        config.site.title = "Test Blog".to_string();
        config
    }

    #[test]
    fn test_placeholder_when_empty() {
        let items = feed_items(&[], &make_config());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].link, "https://example.com/");
        assert_eq!(items[0].title, "Test Blog");
    }

    #[test]
    fn test_items_from_posts() {
        let posts = [
            post("1", Some("Hello"), Some("2024-01-15")),
            post("2", None, None),
        ];
        let items = feed_items(&posts, &make_config());

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].link, "https://example.com/posts/hello-1");
        assert_eq!(items[0].published, Some(DateTimeUtc::from_ymd(2024, 1, 15)));
        assert_eq!(items[1].title, "Untitled");
        assert_eq!(items[1].link, "https://example.com/posts/article-2");
    }

    #[test]
    fn test_latest() {
        let posts = [
            post("1", None, Some("2024-01-15")),
            post("2", None, Some("2024-03-01")),
            post("3", None, None),
        ];
        let items = feed_items(&posts, &make_config());
        assert_eq!(latest(&items), Some(DateTimeUtc::from_ymd(2024, 3, 1)));
        assert_eq!(latest(&items[2..]), None);
    }
}
