//! Shared utilities: dates, MIME types, paths, XML helpers.

pub mod date;
pub mod mime;
pub mod path;
pub mod xml;
