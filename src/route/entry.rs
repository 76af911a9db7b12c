//! Route entries and the route table.

use serde::{Deserialize, Serialize};

use super::hash::ComponentRef;
use super::path::CATCH_ALL;

/// Resolved path-to-component mapping.
///
/// Serialized as `{path, componentRef, exact, subRoutes?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    pub path: String,
    pub component_ref: ComponentRef,
    /// `true`: path must match exactly. `false`: prefix owning `sub_routes`.
    pub exact: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_routes: Option<Vec<RouteEntry>>,
}

impl RouteEntry {
    /// Exact-match entry.
    pub fn leaf(path: impl Into<String>, component_ref: ComponentRef) -> Self {
        Self {
            path: path.into(),
            component_ref,
            exact: true,
            sub_routes: None,
        }
    }

    /// Prefix entry owning nested routes.
    pub fn shell(
        path: impl Into<String>,
        component_ref: ComponentRef,
        sub_routes: Vec<RouteEntry>,
    ) -> Self {
        Self {
            path: path.into(),
            component_ref,
            exact: false,
            sub_routes: Some(sub_routes),
        }
    }

    #[inline]
    pub fn is_catch_all(&self) -> bool {
        self.path == CATCH_ALL
    }

    /// Nested routes (empty for exact entries).
    #[inline]
    pub fn children(&self) -> &[RouteEntry] {
        self.sub_routes.as_deref().unwrap_or_default()
    }
}

/// Ordered route table. The last top-level entry is always the catch-all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub(super) fn new(entries: Vec<RouteEntry>) -> Self {
        debug_assert!(entries.last().is_some_and(RouteEntry::is_catch_all));
        Self { entries }
    }

    /// Top-level entries in match order.
    #[inline]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// The fallback entry matched when nothing else does.
    pub fn catch_all(&self) -> &RouteEntry {
        // `new` guarantees a trailing catch-all
        &self.entries[self.entries.len() - 1]
    }

    /// Depth-first, pre-order walk over every entry (nested ones included).
    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        let mut stack: Vec<&RouteEntry> = self.entries.iter().rev().collect();
        std::iter::from_fn(move || {
            let entry = stack.pop()?;
            stack.extend(entry.children().iter().rev());
            Some(entry)
        })
    }

    /// Number of entries in the flattened table, catch-all included.
    pub fn total_len(&self) -> usize {
        self.iter().count()
    }

    /// Find an entry anywhere in the table by its path.
    #[cfg(test)]
    pub fn find(&self, path: &str) -> Option<&RouteEntry> {
        self.iter().find(|entry| entry.path == path)
    }
}
