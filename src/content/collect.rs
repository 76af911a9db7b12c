//! Whole-site content collection.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;

use super::{ContentNode, ContentTree, blog, docs, pages};
use crate::config::SiteConfig;

/// Collected site content.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub tree: ContentTree,
    /// Doc id -> URL path, for `doc` links.
    pub doc_urls: FxHashMap<String, String>,
}

/// Read pages, docs and blog posts into one content tree.
///
/// Top-level order: leaves sorted by path, then layout shells sorted by path.
/// Shell children are sorted by path.
pub fn collect_site(config: &SiteConfig) -> Result<SiteContent> {
    let (pages, (docs, posts)) = rayon::join(
        || pages::collect_pages(config).context("failed to collect pages"),
        || {
            rayon::join(
                || docs::load_docs(config).context("failed to collect docs"),
                || blog::load_posts(config).context("failed to collect blog posts"),
            )
        },
    );
    let (pages, docs, posts) = (pages?, docs?, posts?);

    let doc_urls = docs
        .iter()
        .map(|doc| (doc.id.clone(), doc.url_path.clone()))
        .collect();

    let mut leaves: Vec<ContentNode> = pages;
    leaves.extend(blog::blog_nodes(posts, config));
    leaves.sort_by(|a, b| a.url_path.cmp(&b.url_path));

    let mut shells: Vec<ContentNode> = docs::docs_shell(docs, config).into_iter().collect();
    shells.sort_by(|a, b| a.url_path.cmp(&b.url_path));

    let mut nodes = leaves;
    nodes.extend(shells);

    Ok(SiteContent {
        tree: ContentTree::new(nodes),
        doc_urls,
    })
}
