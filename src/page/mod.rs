//! Page addressing: post slugs and static route discovery.

pub mod route;
pub mod slug;

pub use route::{RouteRules, discover_routes};
pub use slug::{alternate_path, post_path};
