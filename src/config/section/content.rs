//! `[content]` section configuration: where pages, docs and blog posts live.
//!
//! # Example
//!
//! ```toml
//! [content.docs]
//! path = "docs"
//! route_base_path = "docs"
//!
//! [content.blog]
//! path = "blog"
//! route_base_path = "blog"
//! posts_per_page = 10
//!
//! [content.pages]
//! path = "src/pages"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSectionConfig {
    pub docs: DocsConfig,
    pub blog: BlogConfig,
    pub pages: PagesConfig,
}

/// Documentation: one layout shell owning every doc.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub enable: bool,
    /// Docs directory (relative to the site root).
    pub path: PathBuf,
    /// URL segment the docs shell is mounted at.
    pub route_base_path: String,
    /// Sidebar definition, passed through to the layout.
    pub sidebar_path: Option<PathBuf>,
    /// Base URL of "edit this page" links.
    pub edit_url: Option<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: PathBuf::from("docs"),
            route_base_path: "docs".into(),
            sidebar_path: None,
            edit_url: None,
        }
    }
}

/// Blog: posts, paginated list pages and tag indexes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub enable: bool,
    pub path: PathBuf,
    pub route_base_path: String,
    /// URL segment under the blog for tag pages.
    pub tags_base_path: String,
    /// Posts per list page.
    pub posts_per_page: usize,
    pub show_reading_time: bool,
    pub edit_url: Option<String>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: PathBuf::from("blog"),
            route_base_path: "blog".into(),
            tags_base_path: "tags".into(),
            posts_per_page: 10,
            show_reading_time: true,
            edit_url: None,
        }
    }
}

/// Stand-alone pages: one route per file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub enable: bool,
    pub path: PathBuf,
    /// File extensions treated as pages.
    pub extensions: Vec<String>,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: PathBuf::from("src/pages"),
            extensions: ["md", "mdx", "js", "jsx", "ts", "tsx"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ContentSectionConfig {
    pub const DOCS_PATH: FieldPath = FieldPath::new("content.docs.path");
    pub const BLOG_PATH: FieldPath = FieldPath::new("content.blog.path");
    pub const PAGES_PATH: FieldPath = FieldPath::new("content.pages.path");
    pub const POSTS_PER_PAGE: FieldPath = FieldPath::new("content.blog.posts_per_page");
    pub const TAGS_BASE_PATH: FieldPath = FieldPath::new("content.blog.tags_base_path");
    pub const PAGES_EXTENSIONS: FieldPath = FieldPath::new("content.pages.extensions");

    /// Pre-normalization checks: directories must be relative.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        let dirs = [
            (Self::DOCS_PATH, &self.docs.path),
            (Self::BLOG_PATH, &self.blog.path),
            (Self::PAGES_PATH, &self.pages.path),
        ];
        for (field, path) in dirs {
            if path.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("`{}` must be relative to the site root", path.display()),
                    "e.g. \"docs\" or \"src/pages\"",
                );
            }
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.blog.posts_per_page == 0 {
            diag.error(Self::POSTS_PER_PAGE, "must be at least 1");
        }
        if self.blog.tags_base_path.trim_matches('/').is_empty() {
            diag.error(Self::TAGS_BASE_PATH, "must not be empty");
        }
        if self.pages.extensions.is_empty() {
            diag.error(Self::PAGES_EXTENSIONS, "at least one extension is required");
        }

        let sources = [
            (Self::DOCS_PATH, self.docs.enable, &self.docs.path),
            (Self::BLOG_PATH, self.blog.enable, &self.blog.path),
            (Self::PAGES_PATH, self.pages.enable, &self.pages.path),
        ];
        for (field, enabled, path) in sources {
            if enabled && !path.is_dir() {
                diag.warn(
                    field,
                    format!("`{}` does not exist, nothing collected", path.display()),
                );
            }
        }
    }

    /// Resolve every directory against the site root.
    pub fn normalize(&mut self, root: &Path) {
        for path in [
            &mut self.docs.path,
            &mut self.blog.path,
            &mut self.pages.path,
        ] {
            *path = crate::utils::path::normalize_path(&root.join(&*path));
        }
        if let Some(sidebar) = self.docs.sidebar_path.take() {
            self.docs.sidebar_path = Some(crate::utils::path::normalize_path(&root.join(sidebar)));
        }
    }
}
