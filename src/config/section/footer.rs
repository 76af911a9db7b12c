//! `[footer]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [footer]
//! style = "dark"
//! copyright = "UniDi is Open Source - Apache 2.0 License"
//!
//! [[footer.links]]
//! title = "Docs"
//! items = [{ label = "Tutorial", to = "/docs/intro" }]
//!
//! [[footer.links]]
//! title = "Community"
//! items = [{ label = "Gitter", href = "https://gitter.im/Extenject/community" }]
//! ```

use serde::{Deserialize, Serialize};

use super::link::{LinkItem, LinkLocation};
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub style: FooterStyle,
    pub links: Vec<FooterColumn>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Light,
    Dark,
}

/// A titled column of footer links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterColumn {
    pub title: String,
    pub items: Vec<LinkItem>,
}

impl FooterConfig {
    pub const LINKS: FieldPath = FieldPath::new("footer.links");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, column) in self.links.iter().enumerate() {
            if column.items.is_empty() {
                diag.warn(Self::LINKS, format!("footer.links[{i}] has no items"));
            }
            for (j, item) in column.items.iter().enumerate() {
                item.validate(Self::LINKS, LinkLocation::Footer { column: i, item: j }, diag);
            }
        }
    }

    /// Items with their config location, for link checking.
    pub fn located_items(&self) -> impl Iterator<Item = (LinkLocation, &LinkItem)> {
        self.links.iter().enumerate().flat_map(|(i, column)| {
            column
                .items
                .iter()
                .enumerate()
                .map(move |(j, item)| (LinkLocation::Footer { column: i, item: j }, item))
        })
    }
}
