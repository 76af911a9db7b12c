//! Pipeline shared by every command: collect content, build the table.

use anyhow::{Context, Result, bail};

use crate::config::SiteConfig;
use crate::content::{ContentSource, SiteContent, collect_site};
use crate::route::builder::default_not_found;
use crate::route::conflict::print_conflicts;
use crate::route::{BuildOptions, RouteError, RouteTable, RouteTableBuilder};
use crate::utils::Count;

/// Collected content and the table built from it.
#[derive(Debug)]
pub struct SiteRoutes {
    pub content: SiteContent,
    pub table: RouteTable,
}

/// Route table options from `[build]`.
pub fn build_options(config: &SiteConfig) -> BuildOptions {
    BuildOptions {
        hash_length: config.build.hash_length,
        not_found: config
            .build
            .not_found
            .clone()
            .map_or_else(default_not_found, ContentSource::File),
    }
}

/// Collect the site and build its route table.
pub fn build_site_routes(config: &SiteConfig) -> Result<SiteRoutes> {
    let content = collect_site(config)?;

    let table = match RouteTableBuilder::new(build_options(config)).build(&content.tree) {
        Ok(table) => table,
        Err(RouteError::DuplicatePath { conflicts }) => {
            print_conflicts(&conflicts);
            let total_sources: usize = conflicts.iter().map(|c| c.sources.len()).sum();
            bail!(
                "route table failed: {}, {}",
                Count(conflicts.len(), "conflicting path"),
                Count(total_sources, "source")
            );
        }
        Err(err) => {
            let path = err.path().to_string();
            return Err(err).with_context(|| format!("route table failed at `{path}`"));
        }
    };

    crate::log!(
        "routes";
        "{} from {}",
        Count(table.total_len(), "route"),
        Count(content.tree.count(), "node")
    );
    Ok(SiteRoutes { content, table })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_site_routes_end_to_end() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "docs/intro.md", "# Intro");
        write(dir.path(), "docs/cheatsheet.md", "# Cheatsheet");
        write(dir.path(), "blog/2021-01-01-first.md", "---\nslug: first\n---\n");
        let config = test_site_config(dir.path(), "");

        let routes = build_site_routes(&config).unwrap();
        let top: Vec<_> = routes
            .table
            .entries()
            .iter()
            .map(|e| (e.path.as_str(), e.exact))
            .collect();
        assert_eq!(
            top,
            [("/blog", true), ("/blog/first", true), ("/docs", false), ("*", true)]
        );
        assert_eq!(routes.table.entries()[2].children().len(), 2);
    }

    #[test]
    fn test_duplicate_page_paths_fail() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/pages/about.js", "");
        write(dir.path(), "src/pages/about/index.md", "");
        let config = test_site_config(dir.path(), "");

        let err = build_site_routes(&config).unwrap_err();
        assert!(err.to_string().contains("1 conflicting path, 2 sources"));
    }

    #[test]
    fn test_not_found_page_changes_catch_all_ref() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/pages/index.js", "");
        write(dir.path(), "src/404.md", "# Not found");
        let default_config = test_site_config(dir.path(), "");
        let custom_config = test_site_config(dir.path(), "[build]\nnot_found = \"src/404.md\"");

        let default_ref = build_site_routes(&default_config)
            .unwrap()
            .table
            .catch_all()
            .component_ref
            .clone();
        let custom_ref = build_site_routes(&custom_config)
            .unwrap()
            .table
            .catch_all()
            .component_ref
            .clone();
        assert_ne!(default_ref, custom_ref);
    }
}
