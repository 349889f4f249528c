//! Pagination driver for post listings.

use crate::{
    log,
    source::{Post, PostSource, SourceError},
};

/// Position in a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Current page, starting at 1.
    pub page: u32,
    /// Posts requested per page.
    pub limit: u32,
}

impl Cursor {
    pub const FIRST_PAGE: u32 = 1;

    pub const fn new(limit: u32) -> Self {
        Self {
            page: Self::FIRST_PAGE,
            limit,
        }
    }

    pub fn advance(&mut self) {
        self.page += 1;
    }
}

/// Fetch every listing page, up to `max_pages` requests.
///
/// Stops at the first page reporting no successor. The first error aborts
/// the walk and discards what was collected so far.
pub fn collect_posts(
    source: &dyn PostSource,
    limit: u32,
    max_pages: u32,
) -> Result<Vec<Post>, SourceError> {
    let mut cursor = Cursor::new(limit);
    let mut posts = Vec::new();

    for _ in 0..max_pages {
        let page = source.fetch_posts_page(cursor.page, cursor.limit)?;
        posts.extend(page.posts);

        if !page.has_next_page {
            return Ok(posts);
        }
        cursor.advance();
    }

    log!("source"; "stopped after {} pages, listing may be incomplete", max_pages);
    Ok(posts)
}

/// [`collect_posts`], degrading any failure to no posts.
pub fn collect_posts_or_empty(source: &dyn PostSource, limit: u32, max_pages: u32) -> Vec<Post> {
    collect_posts(source, limit, max_pages).unwrap_or_else(|err| {
        log!("error"; "listing posts failed, skipping dynamic entries: {}", err.detail());
        Vec::new()
    })
}

/// Fetch the first listing page only, degrading any failure to no posts.
///
/// Keeps at most `limit` posts even when the source returns more.
pub fn first_page_or_empty(source: &dyn PostSource, limit: u32) -> Vec<Post> {
    match source.fetch_posts_page(Cursor::FIRST_PAGE, limit) {
        Ok(mut page) => {
            page.posts.truncate(limit as usize);
            page.posts
        }
        Err(err) => {
            log!("error"; "listing posts failed: {}", err.detail());
            Vec::new()
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedSource;
    use super::*;

    #[test]
    fn test_cursor() {
        let mut cursor = Cursor::new(100);
        assert_eq!(cursor.page, 1);
        cursor.advance();
        assert_eq!(cursor, Cursor { page: 2, limit: 100 });
    }

    #[test]
    fn test_collects_until_last_page() {
        let source = ScriptedSource::pages(&[100, 100, 37]);
        let posts = collect_posts(&source, 100, 20).unwrap();

        assert_eq!(posts.len(), 237);
        assert_eq!(source.calls.get(), 3);
        assert_eq!(*source.requests.borrow(), vec![(1, 100), (2, 100), (3, 100)]);
    }

    #[test]
    fn test_stops_at_cap() {
        let source = ScriptedSource::endless();
        let posts = collect_posts(&source, 100, 20).unwrap();

        assert_eq!(source.calls.get(), 20);
        assert_eq!(posts.len(), 20);
    }

    #[test]
    fn test_error_discards_everything() {
        let source = ScriptedSource::pages(&[100, 100, 37]).failing_on(2);
        assert!(collect_posts(&source, 100, 20).is_err());
        assert!(collect_posts_or_empty(&source, 100, 20).is_empty());
    }

    #[test]
    fn test_first_page_only() {
        let source = ScriptedSource::pages(&[50, 50]);
        assert_eq!(first_page_or_empty(&source, 50).len(), 50);
        assert_eq!(source.calls.get(), 1);

        let failing = ScriptedSource::pages(&[5]).failing_on(1);
        assert!(first_page_or_empty(&failing, 50).is_empty());
    }

    #[test]
    fn test_first_page_truncated_to_limit() {
        let oversized = ScriptedSource::pages(&[100]);
        let posts = first_page_or_empty(&oversized, 50);
        assert_eq!(posts.len(), 50);
        assert_eq!(posts[0].id, "1-0");
    }
}
