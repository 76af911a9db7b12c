//! Request path resolution against a [`RouteTable`].
//!
//! Within a level, an exact entry with an equal path wins. Otherwise prefix
//! entries are tried top to bottom; a prefix that matches the request but
//! none of its nested routes does not claim it, and scanning continues.
//! Anything left over lands on the catch-all.
//!
//! A layout shell is never a match target of its own. Its path is taken,
//! so no exact route can share it, and a request for the bare shell path
//! (`/docs`, `/docs/Advanced`) lands on the catch-all.

use super::entry::{RouteEntry, RouteTable};
use super::path::{RoutePath, is_within};

/// Result of resolving a request path.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'a> {
    /// Layout shells wrapping the entry, outermost first.
    pub shells: &'a [&'a RouteEntry],
    /// The matched entry.
    pub entry: &'a RouteEntry,
}

/// Owned chain of matched entries (shells first, entry last).
#[derive(Debug, Clone)]
pub struct Match<'a> {
    chain: Vec<&'a RouteEntry>,
}

impl<'a> Match<'a> {
    /// Borrow as a [`Resolution`].
    pub fn resolution(&self) -> Resolution<'_> {
        Resolution {
            shells: self.shells(),
            entry: self.entry(),
        }
    }

    /// The matched entry.
    pub fn entry(&self) -> &'a RouteEntry {
        self.chain[self.chain.len() - 1]
    }

    /// Layout shells wrapping the entry, outermost first.
    pub fn shells(&self) -> &[&'a RouteEntry] {
        &self.chain[..self.chain.len() - 1]
    }

    /// Whether only the catch-all matched.
    pub fn is_fallback(&self) -> bool {
        self.entry().is_catch_all()
    }
}

impl RouteTable {
    /// Resolve a browser request path (percent-encoded, may carry query/fragment).
    pub fn resolve(&self, request: &str, trailing_slash: bool) -> Match<'_> {
        let path = RoutePath::from_browser(request, trailing_slash);
        self.resolve_path(path.as_str())
    }

    /// Resolve an already normalized path.
    pub fn resolve_path(&self, path: &str) -> Match<'_> {
        let mut chain = Vec::new();
        if match_level(self.entries(), path, &mut chain) {
            return Match { chain };
        }
        Match {
            chain: vec![self.catch_all()],
        }
    }
}

/// Match one level. On success `chain` holds the shells and the entry.
fn match_level<'a>(entries: &'a [RouteEntry], path: &str, chain: &mut Vec<&'a RouteEntry>) -> bool {
    if let Some(entry) = entries
        .iter()
        .find(|e| e.exact && !e.is_catch_all() && e.path == path)
    {
        chain.push(entry);
        return true;
    }

    for shell in entries.iter().filter(|e| !e.exact) {
        if !is_within(path, &shell.path) {
            continue;
        }
        chain.push(shell);
        if match_level(shell.children(), path, chain) {
            return true;
        }
        chain.pop();
    }

    false
}
