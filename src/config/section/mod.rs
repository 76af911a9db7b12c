//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docroute.toml`:
//!
//! | Module    | TOML Section | Purpose                               |
//! |-----------|--------------|---------------------------------------|
//! | `build`   | `[build]`    | Output, hashing, broken link policy   |
//! | `content` | `[content]`  | Docs, blog and pages directories      |
//! | `footer`  | `[footer]`   | Footer columns and copyright          |
//! | `link`    | (shared)     | Navbar/footer link items              |
//! | `navbar`  | `[navbar]`   | Title, logo, items                    |
//! | `site`    | `[site]`     | Title, tagline, url, base url         |
//! | `theme`   | `[theme]`    | Color mode, code highlighting         |

mod build;
mod content;
mod footer;
mod link;
mod navbar;
mod site;
mod theme;

pub use build::{BrokenLinks, BuildSectionConfig};
pub use content::ContentSectionConfig;
pub use footer::FooterConfig;
pub use link::{LinkLocation, LinkTarget};
pub use navbar::NavbarConfig;
pub use site::SiteInfoConfig;
pub use theme::ThemeSectionConfig;
