//! Route table builder.
//!
//! Pipeline over a [`ContentTree`]:
//!
//! 1. **Check** - every path is routable, every child sits inside its shell
//! 2. **Conflicts** - no two nodes (or a node and `*`) share a path
//! 3. **Hash** - one component reference per node, computed in parallel and
//!    stored by traversal index so completion order never leaks into output
//! 4. **Assemble** - shells become prefix entries, leaves exact entries,
//!    then the catch-all goes last
//!
//! Nothing is produced unless every step succeeds.

use rayon::prelude::*;

use crate::content::{ContentNode, ContentSource, ContentTree};
use crate::debug;

use super::conflict::{CATCH_ALL_SOURCE, detect_conflicts};
use super::entry::{RouteEntry, RouteTable};
use super::error::RouteError;
use super::hash::{ComponentRef, ContentHash, DEFAULT_REF_LEN, hash_bytes, hash_file};
use super::path::{CATCH_ALL, check_route_path, is_within};

/// Build knobs that affect the produced references.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Hex length of component references.
    pub hash_length: usize,
    /// Content behind the catch-all route.
    pub not_found: ContentSource,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            hash_length: DEFAULT_REF_LEN,
            not_found: default_not_found(),
        }
    }
}

/// Snapshot used for the catch-all when no not-found page is configured.
pub fn default_not_found() -> ContentSource {
    ContentSource::Snapshot(serde_json::json!({ "component": "NotFound" }))
}

/// Builds [`RouteTable`]s from content trees.
#[derive(Debug, Clone, Default)]
pub struct RouteTableBuilder {
    options: BuildOptions,
}

impl RouteTableBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Build the route table for `tree`.
    pub fn build(&self, tree: &ContentTree) -> Result<RouteTable, RouteError> {
        for node in &tree.nodes {
            check_node(node, None)?;
        }

        let conflicts = detect_conflicts(tree);
        if !conflicts.is_empty() {
            return Err(RouteError::DuplicatePath { conflicts });
        }

        let nodes: Vec<&ContentNode> = tree.iter().collect();
        let hashed: Vec<Result<ContentHash, RouteError>> =
            nodes.par_iter().map(|node| content_hash(node)).collect();

        let mut refs = Vec::with_capacity(hashed.len());
        for hash in hashed {
            refs.push(hash?.to_ref(self.options.hash_length));
        }

        let mut entries = assemble(&tree.nodes, &refs, &mut 0);
        entries.push(self.catch_all()?);

        debug!("routes"; "built {} routes from {} nodes", entries.len(), nodes.len());
        Ok(RouteTable::new(entries))
    }

    fn catch_all(&self) -> Result<RouteEntry, RouteError> {
        let hash = hash_source(CATCH_ALL_SOURCE, CATCH_ALL, &self.options.not_found)?;
        Ok(RouteEntry::leaf(
            CATCH_ALL,
            hash.to_ref(self.options.hash_length),
        ))
    }
}

/// Build a route table with default options.
#[cfg(test)]
pub fn build(tree: &ContentTree) -> Result<RouteTable, RouteError> {
    RouteTableBuilder::default().build(tree)
}

/// Check a node's path (and its children's, recursively).
fn check_node(node: &ContentNode, shell: Option<&ContentNode>) -> Result<(), RouteError> {
    check_route_path(&node.url_path).map_err(|reason| RouteError::InvalidPath {
        source_id: node.source_id.clone(),
        path: node.url_path.clone(),
        reason,
    })?;

    if let Some(shell) = shell
        && (node.url_path == CATCH_ALL || !is_within(&node.url_path, &shell.url_path))
    {
        return Err(RouteError::OutsideShell {
            source_id: node.source_id.clone(),
            path: node.url_path.clone(),
            shell: shell.url_path.clone(),
        });
    }

    for child in &node.children {
        check_node(child, Some(node))?;
    }
    Ok(())
}

fn content_hash(node: &ContentNode) -> Result<ContentHash, RouteError> {
    hash_source(&node.source_id, &node.url_path, &node.content)
}

fn hash_source(
    source_id: &str,
    path: &str,
    content: &ContentSource,
) -> Result<ContentHash, RouteError> {
    let unresolvable = |reason: String| RouteError::UnresolvableContent {
        source_id: source_id.to_string(),
        path: path.to_string(),
        reason,
    };

    if source_id.trim().is_empty() {
        return Err(unresolvable("missing source id".into()));
    }

    match content {
        ContentSource::Bytes(bytes) => Ok(hash_bytes(source_id, bytes)),
        ContentSource::Snapshot(value) => serde_json::to_vec(value)
            .map(|bytes| hash_bytes(source_id, &bytes))
            .map_err(|e| unresolvable(format!("cannot serialize snapshot: {e}"))),
        ContentSource::File(file) => hash_file(source_id, file)
            .map_err(|e| unresolvable(format!("cannot read `{}`: {e}", file.display()))),
    }
}

/// Turn nodes into entries. `refs` holds one reference per node in pre-order.
fn assemble(nodes: &[ContentNode], refs: &[ComponentRef], next: &mut usize) -> Vec<RouteEntry> {
    nodes
        .iter()
        .map(|node| {
            // The node's own ref comes before its children's
            let component_ref = refs[*next].clone();
            *next += 1;
            if node.is_leaf() {
                RouteEntry::leaf(node.url_path.clone(), component_ref)
            } else {
                let sub_routes = assemble(&node.children, refs, &mut *next);
                RouteEntry::shell(node.url_path.clone(), component_ref, sub_routes)
            }
        })
        .collect()
}
