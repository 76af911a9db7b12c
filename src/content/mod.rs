//! Content collection: site directories in, [`ContentTree`] out.
//!
//! | Module    | Source         | Routes                                   |
//! |-----------|----------------|------------------------------------------|
//! | `pages`   | `src/pages`    | one page per file                        |
//! | `docs`    | `docs`         | layout shell `/docs` with one doc each   |
//! | `blog`    | `blog`         | posts, list pages, tag indexes           |
//!
//! `collect` merges them in route table order.

pub mod blog;
mod collect;
pub mod docs;
pub mod meta;
mod node;
pub mod pages;
pub mod walk;

pub use collect::{SiteContent, collect_site};
pub use node::{ContentKind, ContentNode, ContentSource, ContentTree};

use crate::config::SiteConfig;
use crate::route::RoutePath;

/// Route path under the site's base URL, per the trailing slash policy.
pub(crate) fn route_path<'a>(
    config: &SiteConfig,
    segments: impl IntoIterator<Item = &'a str>,
) -> String {
    RoutePath::join(
        &config.site.base_url,
        segments,
        config.build.trailing_slash,
    )
    .into_string()
}
