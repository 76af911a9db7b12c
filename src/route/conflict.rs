//! Route path conflict detection (multiple nodes -> same path).

use rustc_hash::FxHashMap;

use crate::content::ContentTree;
use crate::log;
use crate::utils::Count;

use super::path::CATCH_ALL;

/// Source id of the synthetic catch-all route.
pub const CATCH_ALL_SOURCE: &str = "*";

/// A path conflict: several content nodes claim the same route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathConflict {
    /// The conflicting path
    pub path: String,
    /// Source ids of every claimant, in traversal order
    pub sources: Vec<String>,
}

/// Collect path -> claimants over the flattened tree, plus the catch-all.
///
/// Returns the map and the paths in order of first appearance.
fn collect_path_sources(tree: &ContentTree) -> (FxHashMap<&str, Vec<&str>>, Vec<&str>) {
    let mut sources: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    let mut order = Vec::new();

    let claims = tree
        .iter()
        .map(|node| (node.url_path.as_str(), node.source_id.as_str()))
        .chain(std::iter::once((CATCH_ALL, CATCH_ALL_SOURCE)));

    for (path, source) in claims {
        let claimants = sources.entry(path).or_default();
        if claimants.is_empty() {
            order.push(path);
        }
        claimants.push(source);
    }

    (sources, order)
}

/// Detect paths claimed more than once, in order of first appearance.
pub fn detect_conflicts(tree: &ContentTree) -> Vec<PathConflict> {
    let (sources, order) = collect_path_sources(tree);

    order
        .into_iter()
        .filter_map(|path| {
            let claimants = &sources[path];
            (claimants.len() > 1).then(|| PathConflict {
                path: path.to_string(),
                sources: claimants.iter().map(|s| s.to_string()).collect(),
            })
        })
        .collect()
}

/// Print conflicts using the standard log format.
///
/// ```text
/// [error] route conflicts (1 path, 2 sources)
/// [path] /docs/intro (2 sources)
///   - docs/intro
///   - docs/legacy/intro
/// ```
pub fn print_conflicts(conflicts: &[PathConflict]) {
    if conflicts.is_empty() {
        return;
    }

    let total_sources: usize = conflicts.iter().map(|c| c.sources.len()).sum();
    log!("error"; "route conflicts ({}, {})",
        Count(conflicts.len(), "path"), Count(total_sources, "source"));

    for conflict in conflicts {
        eprintln!();
        log!("path"; "{} ({})", conflict.path, Count(conflict.sources.len(), "source"));
        for source in &conflict.sources {
            eprintln!("  - {}", source);
        }
    }
}

/// Format conflicts as a string (for error messages).
pub fn format_conflicts(conflicts: &[PathConflict]) -> String {
    conflicts
        .iter()
        .map(format_single_conflict)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_single_conflict(conflict: &PathConflict) -> String {
    let mut lines = vec![format!("{} ({})", conflict.path, conflict.sources.len())];
    for source in &conflict.sources {
        lines.push(format!("  - {}", source));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentKind, ContentNode, ContentSource};

    fn page(source: &str, path: &str) -> ContentNode {
        ContentNode::new(ContentKind::Page, source, path, ContentSource::Bytes(Vec::new()))
    }

    #[test]
    fn test_no_conflicts() {
        let tree = ContentTree::new(vec![page("a", "/a"), page("b", "/b"), page("c", "/c")]);
        assert!(detect_conflicts(&tree).is_empty());
    }

    #[test]
    fn test_sibling_conflict() {
        let tree = ContentTree::new(vec![page("a", "/foo"), page("b", "/foo")]);
        let conflicts = detect_conflicts(&tree);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].path, "/foo");
        assert_eq!(conflicts[0].sources, vec!["a", "b"]);
    }

    #[test]
    fn test_nested_conflict() {
        let tree = ContentTree::new(vec![
            ContentNode::shell(
                "docs",
                "/docs",
                ContentSource::Bytes(Vec::new()),
                vec![page("docs/intro", "/docs/intro")],
            ),
            page("pages/intro", "/docs/intro"),
        ]);
        let conflicts = detect_conflicts(&tree);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].sources, vec!["docs/intro", "pages/intro"]);
    }

    #[test]
    fn test_catch_all_conflict() {
        let tree = ContentTree::new(vec![page("weird", "*")]);
        let conflicts = detect_conflicts(&tree);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].path, "*");
        assert_eq!(conflicts[0].sources, vec!["weird", CATCH_ALL_SOURCE]);
    }

    #[test]
    fn test_conflicts_in_first_appearance_order() {
        let tree = ContentTree::new(vec![
            page("a", "/z"),
            page("b", "/y"),
            page("c", "/y"),
            page("d", "/z"),
        ]);
        let conflicts = detect_conflicts(&tree);
        let paths: Vec<_> = conflicts.iter().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["/z", "/y"]);
    }

    #[test]
    fn test_format_conflicts() {
        let conflicts = vec![PathConflict {
            path: "/foo".to_string(),
            sources: vec!["pages/foo".to_string(), "docs/foo".to_string()],
        }];

        let formatted = format_conflicts(&conflicts);
        assert!(formatted.contains("/foo (2)"));
        assert!(formatted.contains("  - pages/foo"));
        assert!(formatted.contains("  - docs/foo"));
    }
}
