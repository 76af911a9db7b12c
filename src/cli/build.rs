//! Site build: collect, build the table, check links, write artifacts.
//!
//! Under `on_broken_links = "throw"` a broken link stops the build before
//! anything is written, so the previous artifacts stay in place.

use std::time::Instant;

use anyhow::Result;

use super::common::{SiteRoutes, build_site_routes};
use super::validate::{check_links, enforce};
use crate::config::{BrokenLinks, SiteConfig};
use crate::generator::{WriteSummary, write_artifacts};
use crate::log;

/// Build the site into `build.output`.
pub fn build_site(config: &SiteConfig) -> Result<WriteSummary> {
    let start = Instant::now();
    let SiteRoutes { content, table } = build_site_routes(config)?;

    let level = config.build.on_broken_links;
    if level != BrokenLinks::Ignore {
        enforce(&check_links(config, &content, &table), level)?;
    }

    let summary = write_artifacts(config, &content.tree, &table)?;
    log!("build"; "done in {:.2?}", start.elapsed());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use crate::generator::{REGISTRY_FILE, ROUTES_FILE, SITE_FILE};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_build_writes_artifacts() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "docs/intro.md", "# Introduction");
        write(dir.path(), "src/pages/index.js", "export default () => null;");
        let config = test_site_config(
            dir.path(),
            "[navbar]\nitems = [{ doc = \"intro\", label = \"Docs\" }]",
        );

        let summary = build_site(&config).unwrap();
        assert_eq!(summary.written.len(), 3);

        let output = &config.build.output;
        let routes: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.join(ROUTES_FILE)).unwrap()).unwrap();
        let paths: Vec<_> = routes
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["path"].as_str().unwrap())
            .collect();
        assert_eq!(paths, ["/", "/docs", "*"]);

        let registry: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(output.join(REGISTRY_FILE)).unwrap())
                .unwrap();
        let intro_ref = routes[1]["subRoutes"][0]["componentRef"].as_str().unwrap();
        assert_eq!(registry[intro_ref]["sourceId"], "docs/intro");
        assert_eq!(registry[intro_ref]["title"], "Introduction");
        assert!(output.join(SITE_FILE).exists());
    }

    #[test]
    fn test_broken_link_stops_build_before_writing() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/pages/index.js", "");
        let broken = "[navbar]\nitems = [{ to = \"/missing\", label = \"Missing\" }]";

        let config = test_site_config(dir.path(), broken);
        assert!(build_site(&config).is_err());
        assert!(!config.build.output.join(ROUTES_FILE).exists());

        let config = test_site_config(
            dir.path(),
            &format!("{broken}\n[build]\non_broken_links = \"warn\""),
        );
        assert!(build_site(&config).is_ok());
        assert!(config.build.output.join(ROUTES_FILE).exists());
    }
}
