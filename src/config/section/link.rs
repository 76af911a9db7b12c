//! Link items shared by `[navbar]` and `[footer]`.
//!
//! Exactly one target per item:
//!
//! ```toml
//! { label = "Blog", to = "/blog" }                  # internal route
//! { label = "Docs", doc = "intro" }                 # documentation id
//! { label = "GitHub", href = "https://github.com" } # external URL
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// A clickable link in the navbar or footer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkItem {
    pub label: Option<String>,
    /// Internal route path.
    pub to: Option<String>,
    /// External URL.
    pub href: Option<String>,
    /// Documentation id (e.g. `intro`, `Advanced/Bindings`).
    pub doc: Option<String>,
    /// Navbar side. Ignored in the footer.
    pub position: Option<ItemPosition>,
    pub class_name: Option<String>,
    pub aria_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemPosition {
    Left,
    Right,
}

/// Where a link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    Route(&'a str),
    Doc(&'a str),
    External(&'a str),
}

/// Position of a link item in the config.
///
/// Orders navbar items before footer items, then by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinkLocation {
    Navbar { item: usize },
    Footer { column: usize, item: usize },
}

impl fmt::Display for LinkLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Navbar { item } => write!(f, "navbar.items[{item}]"),
            Self::Footer { column, item } => write!(f, "footer.links[{column}].items[{item}]"),
        }
    }
}

impl LinkItem {
    /// The single target of this item, if it has exactly one.
    pub fn target(&self) -> Option<LinkTarget<'_>> {
        match (&self.to, &self.doc, &self.href) {
            (Some(to), None, None) => Some(LinkTarget::Route(to)),
            (None, Some(doc), None) => Some(LinkTarget::Doc(doc)),
            (None, None, Some(href)) => Some(LinkTarget::External(href)),
            _ => None,
        }
    }

    /// Check the item's shape. `field` names the item in messages.
    pub fn validate(&self, field: FieldPath, location: LinkLocation, diag: &mut ConfigDiagnostics) {
        if self.target().is_none() {
            diag.error_with_hint(
                field,
                format!("{location}: link needs exactly one of `to`, `doc` or `href`"),
                "internal pages use `to`, docs use `doc`, other sites use `href`",
            );
        }

        if self.label.is_none() && self.aria_label.is_none() {
            diag.error(
                field,
                format!("{location}: link needs a `label` or an `aria_label`"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target() {
        let item = LinkItem {
            to: Some("/blog".into()),
            ..LinkItem::default()
        };
        assert_eq!(item.target(), Some(LinkTarget::Route("/blog")));

        let item = LinkItem {
            doc: Some("intro".into()),
            ..LinkItem::default()
        };
        assert_eq!(item.target(), Some(LinkTarget::Doc("intro")));

        let both = LinkItem {
            to: Some("/blog".into()),
            href: Some("https://example.com".into()),
            ..LinkItem::default()
        };
        assert_eq!(both.target(), None);
    }

    #[test]
    fn test_validate_requires_label() {
        let item = LinkItem {
            href: Some("https://github.com/UniDi/UniDi".into()),
            ..LinkItem::default()
        };
        let mut diag = ConfigDiagnostics::new();
        item.validate(FieldPath::new("navbar.items"), LinkLocation::Navbar { item: 2 }, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.starts_with("navbar.items[2]: "));

        let item = LinkItem {
            aria_label: Some("GitHub repository".into()),
            ..item
        };
        let mut diag = ConfigDiagnostics::new();
        item.validate(FieldPath::new("navbar.items"), LinkLocation::Navbar { item: 2 }, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_location_order() {
        let mut locations = vec![
            LinkLocation::Footer { column: 0, item: 10 },
            LinkLocation::Navbar { item: 10 },
            LinkLocation::Footer { column: 0, item: 2 },
            LinkLocation::Navbar { item: 2 },
        ];
        locations.sort();
        let shown: Vec<_> = locations.iter().map(ToString::to_string).collect();
        assert_eq!(
            shown,
            [
                "navbar.items[2]",
                "navbar.items[10]",
                "footer.links[0].items[2]",
                "footer.links[0].items[10]",
            ]
        );
    }
}
