//! Config field path for diagnostics.

use owo_colors::Style;
use std::fmt;

/// Dotted path of a config field (e.g. `site.base_url`).
///
/// Sections expose their paths as associated constants:
///
/// ```ignore
/// diag.error(SiteInfoConfig::URL, "must be an absolute URL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = crate::logger::paint(format_args!("`{}`", self.0), Style::new().bright_blue());
        write!(f, "{path}")
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
