//! Static route discovery.
//!
//! Walks a page-route tree (one directory per URL segment) and lists every
//! directory that holds a page file:
//!
//! ```text
//! app/
//! ├── page.tsx              -> /
//! ├── about/page.tsx        -> /about
//! ├── blog/[slug]/page.tsx  (parameterized, skipped)
//! ├── _components/          (private, skipped)
//! ├── api/                  (excluded, skipped with everything below)
//! └── contact/team/page.mdx -> /contact/team
//! ```
//!
//! `/` is always present, even without a route tree.

use crate::{config::RoutesConfig, debug};
use jwalk::WalkDir;
use std::collections::HashSet;
use std::path::{Component, Path};
use std::sync::Arc;

/// The root route.
pub const ROOT_ROUTE: &str = "/";

/// Marker of a parameterized path segment (`[slug]`, `[...rest]`).
const DYNAMIC_MARKER: char = '[';

/// Rules deciding which directories and files make routes.
#[derive(Debug, Clone)]
pub struct RouteRules {
    page_files: Vec<String>,
    exclude: Vec<String>,
    private_prefix: String,
}

impl RouteRules {
    pub fn from_config(config: &RoutesConfig) -> Self {
        Self {
            page_files: config.page_files.clone(),
            exclude: config.exclude.clone(),
            private_prefix: config.private_prefix.clone(),
        }
    }

    /// Whether the walk may descend into a directory with this name.
    pub fn admits_dir(&self, name: &str) -> bool {
        let private = !self.private_prefix.is_empty() && name.starts_with(&self.private_prefix);
        !private && !name.contains(DYNAMIC_MARKER) && !self.exclude.iter().any(|e| e == name)
    }

    /// Whether a file with this name defines a page.
    pub fn is_page_file(&self, name: &str) -> bool {
        self.page_files.iter().any(|p| p == name)
    }
}

/// Discover static routes under `root`.
///
/// Returns `/` first, then routes in sorted walk order. A directory with
/// several page files still yields one route.
pub fn discover_routes(root: &Path, rules: &RouteRules) -> Vec<String> {
    let mut routes = vec![ROOT_ROUTE.to_string()];

    if !root.is_dir() {
        debug!("routes"; "route tree {} not found", root.display());
        return routes;
    }

    let filter = Arc::new(rules.clone());
    let walker = WalkDir::new(root)
        .sort(true)
        .process_read_dir(move |_depth, _path, _state, children| {
            children.retain(|child| match child {
                Ok(entry) if entry.file_type().is_dir() => {
                    filter.admits_dir(&entry.file_name().to_string_lossy())
                }
                Ok(_) => true,
                Err(_) => false,
            });
        });

    let mut seen: HashSet<String> = routes.iter().cloned().collect();
    for entry in walker.into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() || !rules.is_page_file(&entry.file_name().to_string_lossy())
        {
            continue;
        }

        let path = entry.path();
        let Some(dir) = path.parent() else { continue };
        let route = route_for_dir(root, dir);
        if seen.insert(route.clone()) {
            routes.push(route);
        }
    }

    debug!("routes"; "discovered {} static routes", routes.len());
    routes
}

/// Map a directory inside the route tree to its URL path.
fn route_for_dir(root: &Path, dir: &Path) -> String {
    let Ok(relative) = dir.strip_prefix(root) else {
        return ROOT_ROUTE.to_string();
    };

    let segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    format!("/{}", segments.join("/"))
}
