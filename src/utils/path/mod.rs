//! Path and URL utilities.
//!
//! Pure functions for path manipulation, plus one directory helper.
//!
//! - [`fs`]: Filesystem paths (`normalize_path`, `ensure_parent`)
//! - [`route`]: URL paths (`join_url`, `normalize_prefix`, `strip_query`)

pub mod fs;
pub mod route;

pub use fs::{ensure_parent, normalize_path};
pub use route::{join_url, normalize_prefix, strip_query};
