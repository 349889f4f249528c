//! `routes` command: list static routes, one per line.

use crate::{
    config::SiteConfig,
    debug,
    page::{RouteRules, discover_routes},
};
use anyhow::Result;
use std::io::{Write, stdout};

pub fn print_routes(config: &SiteConfig) -> Result<()> {
    write_routes(config, &mut stdout().lock())
}

fn write_routes(config: &SiteConfig, out: &mut impl Write) -> Result<()> {
    debug!("routes"; "scanning {}", config.routes.dir.display());
    let routes = discover_routes(&config.routes.dir, &RouteRules::from_config(&config.routes));
    for route in routes {
        writeln!(out, "{route}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_routes() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("contact")).unwrap();
        fs::write(dir.path().join("contact/page.md"), "").unwrap();

        let mut config = SiteConfig::default();
        config.routes.dir = dir.path().to_path_buf();

        let mut out = Vec::new();
        write_routes(&config, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "/\n/contact\n");
    }
}
