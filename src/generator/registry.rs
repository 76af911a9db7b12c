//! `registry.json`: component reference -> what produced it.
//!
//! ```json
//! {
//!   "3f2a9c1d0b7e4a55": {
//!     "sourceId": "docs/intro",
//!     "kind": "doc",
//!     "source": "docs/intro.md",
//!     "title": "Introduction"
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::content::{ContentKind, ContentTree};
use crate::route::RouteTable;
use crate::route::conflict::CATCH_ALL_SOURCE;

/// One registry record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    pub source_id: String,
    pub kind: ContentKind,
    /// Source file, relative to the site root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Component references sorted for stable output.
pub type Registry = BTreeMap<String, RegistryEntry>;

/// Pair every route with the node it was built from.
///
/// The table lists nodes in the tree's pre-order followed by the catch-all,
/// so both sides are walked in lockstep.
pub fn build_registry(
    tree: &ContentTree,
    table: &RouteTable,
    root: &Path,
    not_found: Option<&Path>,
) -> Registry {
    let mut registry = Registry::new();
    let relative = |path: &Path| {
        path.strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    };

    for (node, entry) in tree.iter().zip(table.iter()) {
        debug_assert_eq!(node.url_path, entry.path);
        registry.insert(
            entry.component_ref.as_str().to_string(),
            RegistryEntry {
                source_id: node.source_id.clone(),
                kind: node.kind,
                source: node.source_file.as_deref().map(relative),
                title: node.title.clone(),
            },
        );
    }

    let catch_all = table.catch_all();
    registry.insert(
        catch_all.component_ref.as_str().to_string(),
        RegistryEntry {
            source_id: CATCH_ALL_SOURCE.to_string(),
            kind: ContentKind::Page,
            source: not_found.map(relative),
            title: None,
        },
    );

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentNode, ContentSource};
    use crate::route::builder::build;

    fn doc(path: &str, title: &str) -> ContentNode {
        ContentNode::new(
            ContentKind::Doc,
            path.trim_start_matches('/'),
            path,
            ContentSource::Bytes(title.as_bytes().to_vec()),
        )
        .with_title(Some(title.to_string()))
        .with_source_file(format!("/site{path}.md"))
    }

    #[test]
    fn test_registry_covers_every_route() {
        let tree = ContentTree::new(vec![
            ContentNode::new(
                ContentKind::Page,
                "blog/_list",
                "/blog",
                ContentSource::Snapshot(serde_json::json!({ "posts": [] })),
            ),
            ContentNode::shell(
                "docs",
                "/docs",
                ContentSource::Snapshot(serde_json::json!({})),
                vec![doc("/docs/intro", "Intro"), doc("/docs/cheatsheet", "Cheatsheet")],
            ),
        ]);
        let table = build(&tree).unwrap();

        let registry = build_registry(&tree, &table, Path::new("/site"), None);
        assert_eq!(registry.len(), table.total_len());

        let intro_ref = table.find("/docs/intro").unwrap().component_ref.as_str();
        let intro = &registry[intro_ref];
        assert_eq!(intro.source_id, "docs/intro");
        assert_eq!(intro.kind, ContentKind::Doc);
        assert_eq!(intro.source.as_deref(), Some("docs/intro.md"));
        assert_eq!(intro.title.as_deref(), Some("Intro"));

        let fallback = &registry[table.catch_all().component_ref.as_str()];
        assert_eq!(fallback.source_id, "*");
        assert!(fallback.source.is_none());
    }

    #[test]
    fn test_registry_serializes_camel_case() {
        let entry = RegistryEntry {
            source_id: "pages/index".into(),
            kind: ContentKind::Page,
            source: None,
            title: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"sourceId":"pages/index","kind":"page"}"#);
    }
}
