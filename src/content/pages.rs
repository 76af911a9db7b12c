//! Stand-alone pages: one route per file under `src/pages`.
//!
//! ```text
//! src/pages/index.js          -> /
//! src/pages/markdown-page.md  -> /markdown-page
//! src/pages/team/index.tsx    -> /team
//! src/pages/_helpers.js       -> (ignored)
//! ```

use anyhow::Result;
use rayon::prelude::*;

use super::meta::MarkdownSource;
use super::walk::{SourceFile, collect_sources};
use super::{ContentKind, ContentNode, ContentSource, route_path};
use crate::config::SiteConfig;

/// URL path of a page file.
fn page_url(file: &SourceFile, config: &SiteConfig) -> String {
    let stem = file.rel_stem();
    let path = match stem.strip_suffix("index") {
        Some(dir) if dir.is_empty() || dir.ends_with('/') => dir,
        _ => stem,
    };
    route_path(config, [path])
}

fn is_markdown(file: &SourceFile) -> bool {
    file.path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("mdx"))
}

fn page_node(file: SourceFile, config: &SiteConfig) -> Result<ContentNode> {
    let url_path = page_url(&file, config);
    let source_id = format!("pages/{}", file.rel_stem());

    // Markdown pages are read for their title, component pages hashed from disk
    let node = if is_markdown(&file) {
        let source = MarkdownSource::read(file)?;
        ContentNode::new(
            ContentKind::Page,
            source_id,
            url_path,
            ContentSource::Bytes(source.bytes),
        )
        .with_title(source.title)
        .with_source_file(source.file.path)
    } else {
        ContentNode::new(
            ContentKind::Page,
            source_id,
            url_path,
            ContentSource::File(file.path.clone()),
        )
        .with_source_file(file.path)
    };
    Ok(node)
}

/// Collect every page, in file order.
pub fn collect_pages(config: &SiteConfig) -> Result<Vec<ContentNode>> {
    let pages_config = &config.content.pages;
    if !pages_config.enable {
        return Ok(Vec::new());
    }

    let pages = collect_sources(&pages_config.path, &pages_config.extensions)?
        .into_par_iter()
        .map(|file| page_node(file, config))
        .collect::<Result<Vec<_>>>()?;

    crate::log!("pages"; "{}", crate::utils::Count(pages.len(), "page"));
    Ok(pages)
}
