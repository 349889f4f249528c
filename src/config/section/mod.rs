//! Configuration section definitions.
//!
//! Each module corresponds to a section in `seomap.toml`:
//!
//! | Module    | TOML Section | Purpose                                 |
//! |-----------|--------------|-----------------------------------------|
//! | `site`    | `[site]`     | Origin URL, feed channel metadata       |
//! | `source`  | `[source]`   | Post listing API or fixture file        |
//! | `routes`  | `[routes]`   | Route tree discovery rules              |
//! | `build`   | `[build]`    | Output directory, minification          |
//! | `sitemap` | `[sitemap]`  | Sitemap document                        |
//! | `feed`    | `[feed]`     | RSS/Atom document                       |
//! | `robots`  | `[robots]`   | robots.txt document                     |
//! | `serve`   | `[serve]`    | HTTP server                             |

mod build;
mod feed;
mod robots;
mod routes;
mod serve;
mod site;
mod sitemap;
mod source;

pub use build::BuildConfig;
pub use feed::{FeedConfig, FeedFormat};
pub use robots::RobotsConfig;
pub use routes::RoutesConfig;
pub use serve::ServeConfig;
pub use site::SiteInfoConfig;
pub use sitemap::SitemapConfig;
pub use source::SourceConfig;
