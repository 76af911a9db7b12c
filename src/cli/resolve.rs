//! `resolve` command: show where browser paths land.
//!
//! Results go to stdout, one line per request or a JSON array with
//! `--json`. Build logs stay on stderr.
//!
//! ```text
//! $ docroute resolve /docs/intro /nope
//! /docs/intro -> /docs/intro (3f2a9c1d0b7e4a55, docs/intro) in /docs
//! /nope -> * (9b1e..., *) fallback
//! ```

use std::io::{Write, stdout};

use anyhow::Result;
use owo_colors::{OwoColorize, Stream, Style};
use serde::Serialize;

use super::ResolveArgs;
use super::common::{SiteRoutes, build_site_routes};
use crate::config::SiteConfig;
use crate::generator::registry::{Registry, build_registry};
use crate::generator::to_json;
use crate::route::{Resolution, RoutePath, RouteTable};

/// Outcome of resolving one request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved {
    pub request: String,
    /// The request after decoding and normalization.
    pub normalized: String,
    pub path: String,
    pub component_ref: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<String>,
    /// Enclosing shell paths, outermost first.
    pub shells: Vec<String>,
    pub fallback: bool,
}

/// Resolve every requested path and print the results.
pub fn run_resolve(args: &ResolveArgs, config: &SiteConfig) -> Result<()> {
    let SiteRoutes { content, table } = build_site_routes(config)?;
    let registry = build_registry(
        &content.tree,
        &table,
        config.get_root(),
        config.build.not_found.as_deref(),
    );

    let results: Vec<_> = args
        .paths
        .iter()
        .map(|request| resolve_one(&table, &registry, request, config.build.trailing_slash))
        .collect();

    let mut out = stdout().lock();
    write_results(&mut out, &results, args.json)?;
    out.flush()?;
    Ok(())
}

/// Write results as JSON or as one line per request.
pub fn write_results(out: &mut impl Write, results: &[Resolved], json: bool) -> Result<()> {
    if json {
        write!(out, "{}", to_json(&results)?)?;
        return Ok(());
    }

    let paint = |text: &str, style: Style| {
        text.if_supports_color(Stream::Stdout, |t| t.style(style))
            .to_string()
    };
    let dim = Style::new().dimmed();

    for r in results {
        let source = r.source_id.as_deref().unwrap_or("-");
        let tail = if r.fallback {
            paint("fallback", Style::new().yellow())
        } else if r.shells.is_empty() {
            String::new()
        } else {
            paint(&format!("in {}", r.shells.join(" > ")), dim)
        };
        writeln!(
            out,
            "{} -> {} {} {}",
            r.request,
            paint(&r.path, Style::new().cyan()),
            paint(&format!("({}, {source})", r.component_ref), dim),
            tail
        )?;
    }
    Ok(())
}

/// Resolve one browser request against the table.
pub fn resolve_one(
    table: &RouteTable,
    registry: &Registry,
    request: &str,
    trailing_slash: bool,
) -> Resolved {
    let matched = table.resolve(request, trailing_slash);
    let Resolution { shells, entry } = matched.resolution();

    Resolved {
        request: request.to_string(),
        normalized: RoutePath::from_browser(request, trailing_slash).into_string(),
        path: entry.path.clone(),
        component_ref: entry.component_ref.to_string(),
        source_id: registry
            .get(entry.component_ref.as_str())
            .map(|e| e.source_id.clone()),
        shells: shells.iter().map(|s| s.path.clone()).collect(),
        fallback: matched.is_fallback(),
    }
}
