//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = ".docroute"        # Artifact directory
//! hash_length = 16            # Hex chars per component reference (8..=64)
//! not_found = "src/404.md"    # Content behind the catch-all route
//! on_broken_links = "throw"   # throw | warn | ignore
//! trailing_slash = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::route::hash::{DEFAULT_REF_LEN, MAX_REF_LEN, MIN_REF_LEN};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Directory receiving `routes.json`, `registry.json` and `site.json`.
    pub output: PathBuf,

    /// Length of component references in hex chars.
    pub hash_length: usize,

    /// Page rendered by the catch-all route.
    pub not_found: Option<PathBuf>,

    /// What to do with navbar/footer links that match no route.
    pub on_broken_links: BrokenLinks,

    /// Emit route paths with a trailing slash.
    pub trailing_slash: bool,

    /// Keep drafts (CLI `--include-drafts`).
    #[serde(skip)]
    pub include_drafts: bool,

    /// Remove the output directory first (CLI `--clean`).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(".docroute"),
            hash_length: DEFAULT_REF_LEN,
            not_found: None,
            on_broken_links: BrokenLinks::default(),
            trailing_slash: false,
            include_drafts: false,
            clean: false,
        }
    }
}

/// Broken link handling level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinks {
    /// Fail the build.
    #[default]
    Throw,
    /// Report and continue.
    Warn,
    /// Skip the check.
    Ignore,
}

impl BuildSectionConfig {
    pub const OUTPUT: FieldPath = FieldPath::new("build.output");
    pub const HASH_LENGTH: FieldPath = FieldPath::new("build.hash_length");
    pub const NOT_FOUND: FieldPath = FieldPath::new("build.not_found");

    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        if !(MIN_REF_LEN..=MAX_REF_LEN).contains(&self.hash_length) {
            diag.error_with_hint(
                Self::HASH_LENGTH,
                format!("{} is out of range", self.hash_length),
                format!("use a value between {MIN_REF_LEN} and {MAX_REF_LEN}"),
            );
        }

        if let Some(not_found) = &self.not_found
            && !not_found.is_file()
        {
            diag.error(
                Self::NOT_FOUND,
                format!("`{}` is not a file", not_found.display()),
            );
        }

        if self.output == root {
            diag.error_with_hint(
                Self::OUTPUT,
                "output directory must not be the site root",
                "e.g. \".docroute\"",
            );
        }
    }

    /// Resolve paths against the site root.
    pub fn normalize(&mut self, root: &Path) {
        self.output = crate::utils::path::normalize_path(&root.join(&self.output));
        if let Some(not_found) = self.not_found.take() {
            self.not_found = Some(crate::utils::path::normalize_path(&root.join(not_found)));
        }
    }
}
