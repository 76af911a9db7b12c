//! `site.json`: the frozen site configuration for the rendering layer.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::config::section::{FooterConfig, NavbarConfig, SiteInfoConfig, ThemeSectionConfig};

/// The parts of the configuration the renderer needs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSnapshot<'a> {
    pub site: &'a SiteInfoConfig,
    pub theme: &'a ThemeSectionConfig,
    pub navbar: &'a NavbarConfig,
    pub footer: &'a FooterConfig,
    pub trailing_slash: bool,
}

impl<'a> SiteSnapshot<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            site: &config.site,
            theme: &config.theme,
            navbar: &config.navbar,
            footer: &config.footer,
            trailing_slash: config.build.trailing_slash,
        }
    }
}
