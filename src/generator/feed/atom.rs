//! Atom 1.0 feed generation.

use super::common::{FeedItem, latest};
use crate::{
    config::SiteConfig,
    debug,
    utils::{date::DateTimeUtc, mime, path::join_url},
};
use anyhow::{Context, Result};
use atom_syndication::{
    Entry, EntryBuilder, FeedBuilder, FixedDateTime, GeneratorBuilder, Link, LinkBuilder, Person,
    PersonBuilder, Text,
};

/// Render items as an Atom 1.0 document.
///
/// `now` stands in for missing or unrepresentable dates: Atom requires
/// `updated` everywhere.
pub fn render(items: &[FeedItem], config: &SiteConfig, now: DateTimeUtc) -> Result<String> {
    let site_root = join_url(&config.site.url, "/");
    let now_fixed = to_fixed(now)?;
    let updated = latest(items)
        .and_then(to_fixed_lossy)
        .unwrap_or(now_fixed);

    let entries: Vec<Entry> = items
        .iter()
        .map(|item| to_atom_entry(item, &now_fixed))
        .collect();

    let self_link: Link = LinkBuilder::default()
        .href(join_url(
            &config.site.url,
            &config.feed.path.to_string_lossy(),
        ))
        .rel("self".to_string())
        .mime_type(Some(mime::types::ATOM.to_string()))
        .build();

    let alternate_link: Link = LinkBuilder::default()
        .href(site_root.clone())
        .rel("alternate".to_string())
        .build();

    let feed = FeedBuilder::default()
        .title(Text::plain(config.site.title.clone()))
        .id(site_root)
        .updated(updated)
        .links(vec![self_link, alternate_link])
        .subtitle(Some(Text::plain(config.site.description.clone())))
        .generator(Some(
            GeneratorBuilder::default()
                .value(env!("CARGO_PKG_NAME"))
                .build(),
        ))
        .lang(Some(config.site.language.clone()))
        .entries(entries)
        .build();

    Ok(feed.to_string())
}

fn to_atom_entry(item: &FeedItem, now: &FixedDateTime) -> Entry {
    let link: Link = LinkBuilder::default()
        .href(item.link.clone())
        .rel("alternate".to_string())
        .build();

    let authors: Vec<Person> = item
        .author
        .as_ref()
        .map(|name| vec![PersonBuilder::default().name(name.clone()).build()])
        .unwrap_or_default();

    let published = item.published.and_then(to_fixed_lossy);
    if item.published.is_some() && published.is_none() {
        debug!("feed"; "dropping published date of {}", item.link);
    }

    EntryBuilder::default()
        .title(Text::plain(item.title.clone()))
        .id(item.link.clone())
        .updated(published.unwrap_or(*now))
        .published(published)
        .links(vec![link])
        .summary(item.summary.clone().map(Text::plain))
        .authors(authors)
        .build()
}

fn to_fixed(dt: DateTimeUtc) -> Result<FixedDateTime> {
    let rfc3339 = dt.to_rfc3339();
    rfc3339
        .parse()
        .with_context(|| format!("invalid feed timestamp {rfc3339}"))
}

fn to_fixed_lossy(dt: DateTimeUtc) -> Option<FixedDateTime> {
    to_fixed(dt).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: DateTimeUtc = DateTimeUtc::new(2025, 3, 1, 12, 0, 0);

    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.url = "https://example.com".to_string();
        config.site.title = "Test Blog".to_string();
        config.feed.path = "atom.xml".into();
        config
    }

    fn item(published: Option<DateTimeUtc>) -> FeedItem {
        FeedItem {
            title: "Test Post".to_string(),
            link: "https://example.com/posts/test-post-1".to_string(),
            summary: Some("A test summary".to_string()),
            published,
            author: Some("Ada".to_string()),
        }
    }

    fn now() -> FixedDateTime {
        to_fixed(NOW).unwrap()
    }

    #[test]
    fn test_to_atom_entry() {
        let entry = to_atom_entry(&item(Some(DateTimeUtc::from_ymd(2024, 1, 15))), &now());
        assert_eq!(entry.title().as_str(), "Test Post");
        assert_eq!(entry.id(), "https://example.com/posts/test-post-1");
        assert!(entry.updated().to_rfc3339().starts_with("2024-01-15"));
        assert_eq!(entry.authors()[0].name(), "Ada");
    }

    #[test]
    fn test_undated_entry_uses_now() {
        let entry = to_atom_entry(&item(None), &now());
        assert!(entry.updated().to_rfc3339().starts_with("2025-03-01T12:00:00"));
        assert!(entry.published().is_none());
    }

    #[test]
    fn test_render() {
        let xml = render(
            &[item(Some(DateTimeUtc::from_ymd(2024, 1, 15)))],
            &make_config(),
            NOW,
        )
        .unwrap();

        assert!(xml.contains("<feed"));
        assert!(xml.contains("http://www.w3.org/2005/Atom"));
        assert!(xml.contains("https://example.com/atom.xml"));
        assert!(xml.contains("Test Blog"));
        assert!(xml.contains("<updated>2024-01-15T00:00:00"));
    }

    #[test]
    fn test_unrepresentable_date_falls_back_to_now() {
        let far = item(Some(DateTimeUtc::new(10000, 1, 1, 0, 59, 59)));

        let entry = to_atom_entry(&far, &now());
        assert!(entry.published().is_none());
        assert!(entry.updated().to_rfc3339().starts_with("2025-03-01T12:00:00"));

        let xml = render(&[far], &make_config(), NOW).unwrap();
        assert_eq!(xml.matches("<entry>").count(), 1);
        assert!(xml.contains("<updated>2025-03-01T12:00:00"));
    }
}
