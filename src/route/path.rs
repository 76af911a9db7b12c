//! Route path type and normalization.
//!
//! - Internal representation: always decoded (human-readable, spaces kept)
//! - Browser boundary: decode on input (`from_browser`)

use std::fmt;

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// Path of the synthetic catch-all route.
pub const CATCH_ALL: &str = "*";

/// Decoded route path.
///
/// Invariants:
/// - Starts with `/` (or is exactly [`CATCH_ALL`])
/// - No empty segments (`//`), no query string or fragment
/// - Trailing slash present iff the trailing-slash policy is on (root is `/`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(String);

impl RoutePath {
    /// The catch-all path.
    pub fn catch_all() -> Self {
        Self(CATCH_ALL.to_string())
    }

    /// Create from a browser URL (decode percent-encoding, strip query and fragment).
    pub fn from_browser(encoded: &str, trailing_slash: bool) -> Self {
        let path = encoded.split(['?', '#']).next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::normalize(&decoded, trailing_slash)
    }

    /// Normalize a decoded path: leading slash, collapsed separators,
    /// trailing slash per policy.
    pub fn normalize(decoded: &str, trailing_slash: bool) -> Self {
        let trimmed = decoded.trim();
        if trimmed == CATCH_ALL {
            return Self::catch_all();
        }

        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Self("/".to_string());
        }

        let mut path = String::with_capacity(trimmed.len() + 2);
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        if trailing_slash {
            path.push('/');
        }
        Self(path)
    }

    /// Join a base path with relative segments and normalize.
    ///
    /// `join("/", ["docs", "Get Started/Intro"], false)` -> `/docs/Get Started/Intro`
    pub fn join<'a>(
        base: &str,
        segments: impl IntoIterator<Item = &'a str>,
        trailing_slash: bool,
    ) -> Self {
        let mut raw = base.to_string();
        for segment in segments {
            raw.push('/');
            raw.push_str(segment);
        }
        Self::normalize(&raw, trailing_slash)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    #[cfg(test)]
    pub fn is_catch_all(&self) -> bool {
        self.0 == CATCH_ALL
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check whether `path` lies inside the segment prefix `prefix`.
///
/// `/docs/intro` is within `/docs`, `/docsearch` is not. Everything is within `/`.
pub fn is_within(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return path.starts_with('/');
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Check a route path produced by content collection.
///
/// Returns the reason when the path cannot be routed.
pub fn check_route_path(path: &str) -> Result<(), &'static str> {
    if path == CATCH_ALL {
        return Ok(());
    }
    if path.is_empty() {
        return Err("empty path");
    }
    if !path.starts_with('/') {
        return Err("must start with `/`");
    }
    if path.contains(['*', '?', '#']) {
        return Err("contains a reserved character");
    }
    if path.len() > 1 && path.trim_end_matches('/').contains("//") {
        return Err("contains an empty segment");
    }
    if path.split('/').any(|segment| !segment.is_empty() && segment.trim().is_empty()) {
        return Err("contains a blank segment");
    }
    Ok(())
}
