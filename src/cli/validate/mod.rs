//! Link validation: navbar and footer links must point somewhere.
//!
//! | Target | Valid when                                          |
//! |--------|-----------------------------------------------------|
//! | `to`   | resolves to a route other than the catch-all        |
//! | `doc`  | names a collected doc                               |
//! | `href` | parses as an absolute URL                           |
//!
//! `build.on_broken_links` decides the outcome: `throw` fails, `warn`
//! reports, `ignore` skips the check.

mod report;

use anyhow::{Result, bail};

use super::common::{SiteRoutes, build_site_routes};
use crate::config::section::{LinkLocation, LinkTarget};
use crate::config::{BrokenLinks, SiteConfig};
use crate::content::SiteContent;
use crate::log;
use crate::route::RouteTable;
use crate::route::path::is_within;
use crate::utils::path::route::{is_external_link, split_path_suffix};
use crate::utils::Count;

pub use report::LinkReport;

/// Validate the site: build the route table and check links. Writes nothing.
pub fn validate_site(config: &SiteConfig) -> Result<()> {
    let SiteRoutes { content, table } = build_site_routes(config)?;

    if config.build.on_broken_links == BrokenLinks::Ignore {
        log!("validate"; "route table ok, link check disabled");
        return Ok(());
    }

    let report = check_links(config, &content, &table);
    enforce(&report, config.build.on_broken_links)?;
    log!("validate"; "{}", report);
    Ok(())
}

/// Apply the broken link policy. Errors only under `throw`.
pub fn enforce(report: &LinkReport, level: BrokenLinks) -> Result<()> {
    if report.is_empty() || level == BrokenLinks::Ignore {
        return Ok(());
    }

    report.print();
    let count = report.error_count();
    match level {
        BrokenLinks::Throw => bail!(
            "{} (set `build.on_broken_links = \"warn\"` to continue anyway)",
            Count(count, "broken link")
        ),
        _ => {
            log!("warning"; "{}", Count(count, "broken link"));
            Ok(())
        }
    }
}

/// Check every navbar and footer link against the built site.
pub fn check_links(config: &SiteConfig, content: &SiteContent, table: &RouteTable) -> LinkReport {
    let mut report = LinkReport::default();
    let items = config
        .navbar
        .located_items()
        .chain(config.footer.located_items());

    for (location, item) in items {
        // Shape errors were already reported by config validation
        let Some(target) = item.target() else {
            continue;
        };
        report.checked += 1;

        match target {
            LinkTarget::Route(to) => {
                if is_external_link(to) {
                    continue;
                }
                let (path, _) = split_path_suffix(to);
                let request = with_base_url(&config.site.base_url, path);
                let matched = table.resolve(&request, config.build.trailing_slash);
                if matched.is_fallback() {
                    report.add(location, to, "matches no route");
                }
            }
            LinkTarget::Doc(id) => {
                let id = id.trim_matches('/');
                if !content.doc_urls.contains_key(id) {
                    report.add(location, id, "is not a known doc id");
                }
            }
            LinkTarget::External(href) => {
                if url::Url::parse(href).is_err() {
                    report.add(location, href, "is not an absolute URL");
                }
            }
        }
    }

    report
}

/// Prefix `path` with the base URL unless it already sits under it.
fn with_base_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.is_empty() || is_within(path, base) {
        return path.to_string();
    }
    format!("{base}/{}", path.trim_start_matches('/'))
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

    fn site(root: &Path) {
        write(root, "docs/intro.md", "# Intro");
        write(root, "blog/2021-01-01-first.md", "---\nslug: first\n---\n");
    }

    const LINKS: &str = r#"
[navbar]
items = [
  { doc = "intro", label = "Docs" },
  { to = "/blog", label = "Blog" },
  { href = "https://github.com/UniDi/UniDi", label = "GitHub" },
]

[[footer.links]]
title = "More"
items = [
  { label = "Tutorial", to = "/docs/intro#getting-started" },
  { label = "Missing", to = "/docs/nope" },
  { label = "Ghost", doc = "ghost" },
  { label = "Bad", href = "not a url" },
]
"#;

    #[test]
    fn test_check_links() {
        let dir = TempDir::new().unwrap();
        site(dir.path());
        let config = test_site_config(dir.path(), LINKS);
        let SiteRoutes { content, table } = build_site_routes(&config).unwrap();

        let report = check_links(&config, &content, &table);
        assert_eq!(report.checked, 7);
        let broken: Vec<_> = report
            .links
            .iter()
            .flat_map(|(loc, links)| links.iter().map(move |l| (loc.to_string(), l.target.as_str())))
            .collect();
        assert_eq!(
            broken,
            [
                ("footer.links[0].items[1]".to_string(), "/docs/nope"),
                ("footer.links[0].items[2]".to_string(), "ghost"),
                ("footer.links[0].items[3]".to_string(), "not a url"),
            ]
        );
    }

    #[test]
    fn test_links_under_base_url() {
        let dir = TempDir::new().unwrap();
        site(dir.path());
        let config = test_site_config(
            dir.path(),
            "base_url = \"/unidi/\"\n[navbar]\nitems = [{ to = \"/blog\", label = \"Blog\" }, { to = \"/unidi/docs/intro\", label = \"Intro\" }]",
        );
        let SiteRoutes { content, table } = build_site_routes(&config).unwrap();

        assert!(check_links(&config, &content, &table).is_empty());
    }

    #[test]
    fn test_enforce_levels() {
        let mut report = LinkReport::default();
        report.add(LinkLocation::Navbar { item: 0 }, "/x", "matches no route");

        assert!(enforce(&report, BrokenLinks::Throw).is_err());
        assert!(enforce(&report, BrokenLinks::Warn).is_ok());
        assert!(enforce(&report, BrokenLinks::Ignore).is_ok());
        assert!(enforce(&LinkReport::default(), BrokenLinks::Throw).is_ok());
    }

    #[test]
    fn test_validate_site_throw_and_ignore() {
        let dir = TempDir::new().unwrap();
        site(dir.path());
        let broken = "[navbar]\nitems = [{ to = \"/nowhere\", label = \"X\" }]";

        let config = test_site_config(dir.path(), broken);
        assert!(validate_site(&config).is_err());

        let config = test_site_config(
            dir.path(),
            &format!("{broken}\n[build]\non_broken_links = \"ignore\""),
        );
        assert!(validate_site(&config).is_ok());
    }

    #[test]
    fn test_with_base_url() {
        assert_eq!(with_base_url("/", "/blog"), "/blog");
        assert_eq!(with_base_url("/unidi/", "/blog"), "/unidi/blog");
        assert_eq!(with_base_url("/unidi/", "/unidi/blog"), "/unidi/blog");
        assert_eq!(with_base_url("/unidi/", "/unidi"), "/unidi");
        assert_eq!(with_base_url("/unidi/", "/unidi-docs"), "/unidi/unidi-docs");
    }
}
