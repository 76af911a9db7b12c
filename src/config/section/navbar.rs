//! `[navbar]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [navbar]
//! title = "UniDi"
//! logo = { alt = "UniDi Logo", src = "img/unidi-logo.svg", src_dark = "img/unidi-logo_dark.svg" }
//!
//! [[navbar.items]]
//! doc = "intro"
//! label = "Docs"
//! position = "left"
//!
//! [[navbar.items]]
//! to = "/blog"
//! label = "Blog"
//! position = "left"
//! ```

use serde::{Deserialize, Serialize};

use super::link::{LinkItem, LinkLocation};
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub title: Option<String>,
    pub logo: Option<LogoConfig>,
    pub items: Vec<LinkItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub alt: String,
    pub src: String,
    pub src_dark: Option<String>,
}

impl NavbarConfig {
    pub const ITEMS: FieldPath = FieldPath::new("navbar.items");
    pub const LOGO: FieldPath = FieldPath::new("navbar.logo.src");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo
            && logo.src.trim().is_empty()
        {
            diag.error(Self::LOGO, "logo source must not be empty");
        }

        for (i, item) in self.items.iter().enumerate() {
            item.validate(Self::ITEMS, LinkLocation::Navbar { item: i }, diag);
        }
    }

    /// Items with their config location, for link checking.
    pub fn located_items(&self) -> impl Iterator<Item = (LinkLocation, &LinkItem)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (LinkLocation::Navbar { item: i }, item))
    }
}
