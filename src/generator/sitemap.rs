//! Sitemap generation.
//!
//! Lists static routes and every post for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01T00:00:00Z</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```
//!
//! Entry order: static routes, post pages, short post aliases.

use crate::{
    config::SiteConfig,
    page::{alternate_path, post_path, route::ROOT_ROUTE},
    source::Post,
    utils::{date::DateTimeUtc, path::join_url, xml::escape_xml},
};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const ROOT_PRIORITY: f32 = 1.0;
const POST_PRIORITY: f32 = 0.7;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f32>,
}

#[derive(Debug, Clone, Default)]
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

impl Sitemap {
    /// Assemble entries for `routes` and `posts`.
    ///
    /// Static entries are stamped with `now`. Post entries carry their
    /// publication time when it parses, and nothing otherwise.
    pub fn build(config: &SiteConfig, routes: &[String], posts: &[Post], now: DateTimeUtc) -> Self {
        let site = config.site.url.as_str();
        let generated = now.to_rfc3339();

        let statics = routes.iter().map(|route| {
            let is_root = route == ROOT_ROUTE;
            UrlEntry {
                loc: join_url(site, route),
                lastmod: Some(generated.clone()),
                changefreq: is_root.then_some(ChangeFreq::Daily),
                priority: is_root.then_some(ROOT_PRIORITY),
            }
        });

        let primary = posts.iter().map(|post| {
            let path = post_path(&config.site.posts_prefix, &post.id, post.title.as_deref());
            post_entry(join_url(site, &path), post)
        });

        let alternate = config
            .sitemap
            .alternate_prefix
            .as_deref()
            .into_iter()
            .flat_map(|prefix| {
                posts.iter().map(move |post| {
                    post_entry(join_url(site, &alternate_path(prefix, &post.id)), post)
                })
            });

        Self {
            urls: statics.chain(primary).chain(alternate).collect(),
        }
    }

    #[cfg(test)]
    pub fn urls(&self) -> &[UrlEntry] {
        &self.urls
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 160);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&escape_xml(&lastmod));
                xml.push_str("</lastmod>\n");
            }
            if let Some(freq) = entry.changefreq {
                xml.push_str("    <changefreq>");
                xml.push_str(freq.as_str());
                xml.push_str("</changefreq>\n");
            }
            if let Some(priority) = entry.priority {
                xml.push_str(&format!("    <priority>{priority:.1}</priority>\n"));
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

fn post_entry(loc: String, post: &Post) -> UrlEntry {
    UrlEntry {
        loc,
        lastmod: post
            .published
            .as_deref()
            .and_then(DateTimeUtc::parse)
            .map(DateTimeUtc::to_rfc3339),
        changefreq: Some(ChangeFreq::Weekly),
        priority: Some(POST_PRIORITY),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::collect::testing::post;

    const NOW: DateTimeUtc = DateTimeUtc::new(2025, 3, 1, 12, 0, 0);

    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.url = "https://example.com".to_string();
        config
    }

    fn routes(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_static_entries() {
        let sitemap = Sitemap::build(&make_config(), &routes(&["/", "/about"]), &[], NOW);
        let urls = sitemap.urls();

        assert_eq!(urls.len(), 2);
        assert_eq!(urls[0].loc, "https://example.com/");
        assert_eq!(urls[0].changefreq, Some(ChangeFreq::Daily));
        assert_eq!(urls[0].priority, Some(1.0));
        assert_eq!(urls[0].lastmod.as_deref(), Some("2025-03-01T12:00:00Z"));

        assert_eq!(urls[1].loc, "https://example.com/about");
        assert_eq!(urls[1].changefreq, None);
        assert_eq!(urls[1].priority, None);
        assert_eq!(urls[1].lastmod.as_deref(), Some("2025-03-01T12:00:00Z"));
    }

    #[test]
    fn test_post_entries_and_order() {
        let posts = [
            post("1", Some("Hello World"), Some("2024-06-15T14:30:00+02:00")),
            post("2", None, Some("not a date")),
        ];
        let sitemap = Sitemap::build(&make_config(), &routes(&["/"]), &posts, NOW);
        let locs: Vec<_> = sitemap.urls().iter().map(|u| u.loc.as_str()).collect();

        assert_eq!(
            locs,
            vec![
                "https://example.com/",
                "https://example.com/posts/hello-world-1",
                "https://example.com/posts/article-2",
                "https://example.com/blog/1",
                "https://example.com/blog/2",
            ]
        );

        let first = &sitemap.urls()[1];
        assert_eq!(first.changefreq, Some(ChangeFreq::Weekly));
        assert_eq!(first.priority, Some(0.7));
        assert_eq!(first.lastmod.as_deref(), Some("2024-06-15T12:30:00Z"));
        assert_eq!(sitemap.urls()[2].lastmod, None);
        assert_eq!(sitemap.urls()[3].lastmod.as_deref(), Some("2024-06-15T12:30:00Z"));
    }

    #[test]
    fn test_locs_are_percent_encoded() {
        let posts = [post("a b", Some("Hi"), None)];
        let xml =
            Sitemap::build(&make_config(), &routes(&["/", "/über uns"]), &posts, NOW).into_xml();

        assert!(xml.contains("<loc>https://example.com/%C3%BCber%20uns</loc>"));
        assert!(xml.contains("<loc>https://example.com/posts/hi-a%20b</loc>"));
        assert!(xml.contains("<loc>https://example.com/blog/a%20b</loc>"));
        assert!(
            xml.lines()
                .filter(|line| line.contains("<loc>"))
                .all(|line| !line.trim().contains(' '))
        );
    }

    #[test]
    fn test_without_alternate_prefix() {
        let mut config = make_config();
        config.sitemap.alternate_prefix = None;
        let posts = [post("1", Some("A"), None)];
        let sitemap = Sitemap::build(&config, &routes(&["/"]), &posts, NOW);
        assert_eq!(sitemap.urls().len(), 2);
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap::default().into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_xml() {
        let posts = [post("7", Some("Fish & Chips"), Some("2024-01-15"))];
        let xml = Sitemap::build(&make_config(), &routes(&["/", "/about"]), &posts, NOW).into_xml();

        assert!(xml.contains("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<loc>https://example.com/posts/fish-chips-7</loc>"));
        assert!(xml.contains("<lastmod>2024-01-15T00:00:00Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>0.7</priority>"));
        assert_eq!(xml.matches("<url>").count(), 4);
    }

    #[test]
    fn test_loc_escaped() {
        let xml = Sitemap::build(&make_config(), &routes(&["/a&b"]), &[], NOW).into_xml();
        assert!(xml.contains("<loc>https://example.com/a&amp;b</loc>"));
    }
}
