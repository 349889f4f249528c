//! `build` command: write every enabled document to the output directory.

use crate::{
    config::SiteConfig,
    generator::{Assembler, FileEmitter},
    log, source,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Render and write all enabled documents.
///
/// Source failures only thin out the documents; a failed write aborts.
pub fn build_site(config: &SiteConfig) -> Result<Vec<PathBuf>> {
    let source = source::open(config).context("Failed to open post source")?;
    let emitter = FileEmitter::new(&config.build.output);

    let written = Assembler::new(config, source.as_ref()).emit_all(&emitter)?;

    if written.is_empty() {
        log!("build"; "nothing to do, sitemap, feed and robots are all disabled");
    } else {
        log!("build"; "wrote {} files to {}", written.len(), emitter.root().display());
    }
    Ok(written)
}
