//! Documentation: one layout shell at `/<route_base_path>` owning every doc.
//!
//! ```text
//! docs/intro.md                        -> /docs/intro                (docs/intro)
//! docs/Advanced/Bindings.md            -> /docs/Advanced/Bindings    (docs/Advanced/Bindings)
//! docs/a/b.md    + `id: c`             -> /docs/a/c                  (docs/a/c)
//! docs/a/b.md    + `slug: /start`      -> /docs/start
//! docs/a/b.md    + `slug: start`       -> /docs/a/start
//! ```

use anyhow::Result;
use rayon::prelude::*;
use serde_json::json;

use super::meta::MarkdownSource;
use super::walk::{collect_sources, markdown_extensions};
use super::{ContentKind, ContentNode, ContentSource, route_path};
use crate::config::SiteConfig;
use crate::log;

/// Source id of the docs shell.
pub const DOCS_SHELL_ID: &str = "docs";

/// A documentation document.
#[derive(Debug, Clone)]
pub struct Doc {
    /// `Advanced/Bindings`: what navbar `doc` links name.
    pub id: String,
    pub url_path: String,
    pub source: MarkdownSource,
}

impl Doc {
    fn from_source(source: MarkdownSource, config: &SiteConfig) -> Self {
        let dir = source.file.rel_dir();
        let id = match &source.meta.id {
            Some(id) => join_rel(dir, id),
            None => source.file.rel_stem().to_string(),
        };

        let base = config.content.docs.route_base_path.as_str();
        let url_path = match source.meta.slug.as_deref() {
            Some(slug) if slug.starts_with('/') => route_path(config, [base, slug]),
            Some(slug) => route_path(config, [base, dir, slug]),
            None => route_path(config, [base, id.as_str()]),
        };

        Self {
            id,
            url_path,
            source,
        }
    }

    pub fn source_id(&self) -> String {
        format!("{DOCS_SHELL_ID}/{}", self.id)
    }

    fn into_node(self) -> ContentNode {
        let source_id = self.source_id();
        let MarkdownSource {
            file, bytes, title, ..
        } = self.source;
        ContentNode::new(
            ContentKind::Doc,
            source_id,
            self.url_path,
            ContentSource::Bytes(bytes),
        )
        .with_title(title)
        .with_source_file(file.path)
    }
}

/// Read every doc, dropping drafts unless they are requested.
pub fn load_docs(config: &SiteConfig) -> Result<Vec<Doc>> {
    let docs_config = &config.content.docs;
    if !docs_config.enable {
        return Ok(Vec::new());
    }

    let files = collect_sources(&docs_config.path, &markdown_extensions())?;
    let sources = files
        .into_par_iter()
        .map(MarkdownSource::read)
        .collect::<Result<Vec<_>>>()?;

    let mut docs = Vec::with_capacity(sources.len());
    for source in sources {
        if source.meta.draft && !config.build.include_drafts {
            crate::debug!("docs"; "skipping draft {}", source.file.rel);
            continue;
        }
        docs.push(Doc::from_source(source, config));
    }
    Ok(docs)
}

/// Build the docs shell. `None` when there is nothing to publish.
pub fn docs_shell(docs: Vec<Doc>, config: &SiteConfig) -> Option<ContentNode> {
    if docs.is_empty() {
        return None;
    }

    let docs_config = &config.content.docs;
    let mut children: Vec<ContentNode> = docs.into_iter().map(Doc::into_node).collect();
    children.sort_by(|a, b| a.url_path.cmp(&b.url_path));

    log!("docs"; "{} docs under /{}", children.len(), docs_config.route_base_path);

    // Child content stays out of the snapshot: editing a doc must not move the shell's ref
    let snapshot = json!({
        "routeBasePath": docs_config.route_base_path,
        "sidebarPath": docs_config
            .sidebar_path
            .as_ref()
            .map(|p| config.root_relative(p).to_string_lossy().replace('\\', "/")),
        "editUrl": docs_config.edit_url,
    });

    Some(ContentNode::shell(
        DOCS_SHELL_ID,
        route_path(config, [docs_config.route_base_path.as_str()]),
        ContentSource::Snapshot(snapshot),
        children,
    ))
}

fn join_rel(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}
