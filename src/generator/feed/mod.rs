//! Feed generation (RSS, Atom).
//!
//! - **RSS 2.0**: default format (`rss.xml`)
//! - **Atom 1.0**: `[feed] format = "atom"`
//!
//! Both render the same items from a single listing fetch.

pub mod atom;
mod common;
pub mod rss;

use common::feed_items;

use crate::{
    config::{FeedFormat, SiteConfig},
    source::Post,
    utils::{date::DateTimeUtc, mime},
};
use anyhow::Result;

/// Render the configured feed format for `posts`.
pub fn render_feed(posts: &[Post], config: &SiteConfig, now: DateTimeUtc) -> Result<String> {
    let items = feed_items(posts, config);
    match config.feed.format {
        FeedFormat::Rss => rss::render(&items, config),
        FeedFormat::Atom => atom::render(&items, config, now),
    }
}

/// MIME type of a feed format.
pub const fn content_type(format: FeedFormat) -> &'static str {
    match format {
        FeedFormat::Rss => mime::types::RSS,
        FeedFormat::Atom => mime::types::ATOM,
    }
}
