//! `post` command: fetch one post by id and print it as JSON.

use crate::{config::SiteConfig, log, source};
use anyhow::{Result, bail};
use std::io::{Write, stdout};

pub fn print_post(config: &SiteConfig, id: &str, pretty: bool) -> Result<()> {
    let source = source::open(config)?;

    let Some(post) = source.fetch_post(id)? else {
        log!("post"; "no post with id {}", id);
        bail!("post {id} not found");
    };

    let json = if pretty {
        serde_json::to_string_pretty(&post)?
    } else {
        serde_json::to_string(&post)?
    };

    let mut out = stdout().lock();
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture_config(dir: &tempfile::TempDir) -> SiteConfig {
        let path = dir.path().join("posts.json");
        fs::write(&path, r#"[{"id": "a", "title": "A"}]"#).unwrap();
        let mut config = SiteConfig::default();
        config.source.fixture = Some(path);
        config
    }

    #[test]
    fn test_print_known_post() {
        let dir = tempfile::tempdir().unwrap();
        assert!(print_post(&fixture_config(&dir), "a", true).is_ok());
    }

    #[test]
    fn test_unknown_post_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = print_post(&fixture_config(&dir), "zzz", false).unwrap_err();
        assert!(err.to_string().contains("zzz"));
    }
}
