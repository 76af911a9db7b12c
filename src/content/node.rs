//! Content tree: the input of route table building.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What a content node publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    /// Stand-alone page (`src/pages`, blog list pages).
    Page,
    /// Documentation document.
    Doc,
    /// Blog post.
    BlogPost,
    /// Tag list or per-tag post list.
    TagIndex,
    /// Path prefix owning a group of child pages that share a layout.
    LayoutShell,
}

impl ContentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Doc => "doc",
            Self::BlogPost => "blogPost",
            Self::TagIndex => "tagIndex",
            Self::LayoutShell => "layoutShell",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The bytes a node's component reference is derived from.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSource {
    /// In-memory content (already read source file).
    Bytes(Vec<u8>),
    /// File read at build time.
    File(PathBuf),
    /// Generated page: the config/data snapshot it renders.
    Snapshot(serde_json::Value),
}

/// A unit of publishable content.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentNode {
    /// Stable logical id (e.g. `docs/Advanced/Bindings`).
    pub source_id: String,
    /// Absolute URL path, unique across the table.
    pub url_path: String,
    pub kind: ContentKind,
    pub content: ContentSource,
    /// Ordered children. Non-empty only for layout shells.
    pub children: Vec<ContentNode>,
    /// Display title, when the source declares one.
    pub title: Option<String>,
    /// Source file backing this node, when there is one.
    pub source_file: Option<PathBuf>,
}

impl ContentNode {
    /// Create a leaf node.
    pub fn new(
        kind: ContentKind,
        source_id: impl Into<String>,
        url_path: impl Into<String>,
        content: ContentSource,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            url_path: url_path.into(),
            kind,
            content,
            children: Vec::new(),
            title: None,
            source_file: None,
        }
    }

    /// Create a layout shell owning `children`.
    pub fn shell(
        source_id: impl Into<String>,
        url_path: impl Into<String>,
        content: ContentSource,
        children: Vec<ContentNode>,
    ) -> Self {
        Self {
            children,
            ..Self::new(ContentKind::LayoutShell, source_id, url_path, content)
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_source_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_file = Some(path.into());
        self
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }
}

/// Rooted content tree. The root itself is implicit and not routable;
/// `nodes` are its ordered children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentTree {
    pub nodes: Vec<ContentNode>,
}

impl ContentTree {
    pub fn new(nodes: Vec<ContentNode>) -> Self {
        Self { nodes }
    }

    /// Total number of nodes (excluding the implicit root).
    pub fn count(&self) -> usize {
        self.nodes.iter().map(ContentNode::count).sum()
    }

    /// Depth-first, pre-order traversal in source order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentNode> {
        let mut stack: Vec<&ContentNode> = self.nodes.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Find a node by source id.
    #[cfg(test)]
    pub fn find(&self, source_id: &str) -> Option<&ContentNode> {
        self.iter().find(|node| node.source_id == source_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(path: &str) -> ContentNode {
        ContentNode::new(
            ContentKind::Doc,
            path.trim_start_matches('/'),
            path,
            ContentSource::Bytes(path.as_bytes().to_vec()),
        )
    }

    #[test]
    fn test_count_and_preorder() {
        let tree = ContentTree::new(vec![
            ContentNode::shell(
                "docs",
                "/docs",
                ContentSource::Snapshot(serde_json::json!({})),
                vec![leaf("/docs/a"), leaf("/docs/b")],
            ),
            leaf("/blog"),
        ]);

        assert_eq!(tree.count(), 4);
        let order: Vec<_> = tree.iter().map(|n| n.url_path.as_str()).collect();
        assert_eq!(order, vec!["/docs", "/docs/a", "/docs/b", "/blog"]);
    }

    #[test]
    fn test_find() {
        let tree = ContentTree::new(vec![leaf("/a"), leaf("/b")]);
        assert_eq!(tree.find("b").map(|n| n.url_path.as_str()), Some("/b"));
        assert!(tree.find("c").is_none());
    }

    #[test]
    fn test_kind_serializes_camel_case() {
        let json = serde_json::to_string(&ContentKind::BlogPost).unwrap();
        assert_eq!(json, "\"blogPost\"");
        assert_eq!(ContentKind::LayoutShell.to_string(), "layoutShell");
    }
}
