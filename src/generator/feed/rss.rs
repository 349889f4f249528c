//! RSS 2.0 feed generation.

use super::common::FeedItem;
use crate::{config::SiteConfig, debug, utils::path::join_url};
use anyhow::{Result, anyhow};
use rss::{ChannelBuilder, GuidBuilder, Item, ItemBuilder, validation::Validate};

/// Render items as an RSS 2.0 document.
pub fn render(items: &[FeedItem], config: &SiteConfig) -> Result<String> {
    let items: Vec<Item> = items.iter().map(to_rss_item).collect();

    let channel = ChannelBuilder::default()
        .title(&config.site.title)
        .link(join_url(&config.site.url, "/"))
        .description(&config.site.description)
        .language(config.site.language.clone())
        .generator(env!("CARGO_PKG_NAME").to_string())
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel.to_string())
}

fn to_rss_item(item: &FeedItem) -> Item {
    ItemBuilder::default()
        .title(item.title.clone())
        .link(Some(item.link.clone()))
        .guid(
            GuidBuilder::default()
                .permalink(true)
                .value(item.link.clone())
                .build(),
        )
        .description(item.summary.clone())
        .pub_date(item.published.map(|dt| dt.to_rfc2822()).filter(|date| {
            let readable = is_readable_date(date);
            if !readable {
                debug!("feed"; "dropping pubDate {} of {}", date, item.link);
            }
            readable
        }))
        .build()
}

/// Whether the channel validator accepts `date` as an RFC 2822 timestamp.
fn is_readable_date(date: &str) -> bool {
    ItemBuilder::default()
        .pub_date(Some(date.to_string()))
        .build()
        .validate()
        .is_ok()
}
