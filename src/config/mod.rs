//! Site configuration management for `docroute.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── content    # [content.docs], [content.blog], [content.pages]
//! │   ├── footer     # [footer]
//! │   ├── link       # link items shared by navbar and footer
//! │   ├── navbar     # [navbar]
//! │   ├── site       # [site]
//! │   └── theme      # [theme]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! ├── locate.rs      # upward search for the config file
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The configuration is loaded once per invocation, validated, and then
//! passed by reference to every stage. Nothing mutates it after `load`.

pub mod section;
pub mod types;
mod locate;

use locate::locate_config;

pub use section::{BrokenLinks, BuildSectionConfig, ContentSectionConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use section::{FooterConfig, NavbarConfig, SiteInfoConfig, ThemeSectionConfig};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docroute.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Theme settings, passed through to the renderer
    #[serde(default)]
    pub theme: ThemeSectionConfig,

    /// Navigation bar
    #[serde(default)]
    pub navbar: NavbarConfig,

    /// Footer links
    #[serde(default)]
    pub footer: FooterConfig,

    /// Content sources
    #[serde(default)]
    pub content: ContentSectionConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file.
    /// The site root is the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to read the current directory")?;
        let config_path = locate_config(&cli.config, &cwd)?;

        let mut config = Self::from_path(&config_path)?;

        // Validate raw paths before normalization
        config.validate_paths()?;

        config.apply_command_options(cli);
        config.finalize(&config_path);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Set paths and resolve every configured directory against the root.
    fn finalize(&mut self, config_path: &Path) {
        let config_path = crate::utils::path::normalize_path(config_path);
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.content.normalize(&root);
        self.build.normalize(&root);
        self.config_path = config_path;
        self.root = root;
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        self.build.include_drafts = cli.include_drafts();

        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            // --warn-only downgrades link failures
            Commands::Validate { args } => {
                if args.warn_only && self.build.on_broken_links == BrokenLinks::Throw {
                    self.build.on_broken_links = BrokenLinks::Warn;
                }
            }
            Commands::Resolve { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        self.build.clean = args.clean;
        Self::update_option(&mut self.build.output, args.output.as_ref());

        if let Some(base_url) = &args.base_url {
            self.site.base_url = normalize_base_url(base_url);
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// Normalization turns every path absolute, so a user-written absolute
    /// path can only be detected here.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.content.validate_paths(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if !self.config_path.exists() {
            bail!(ConfigError::Validation("config file not found".into()));
        }

        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.navbar.validate(&mut diag);
        self.footer.validate(&mut diag);
        self.content.validate(&mut diag);
        self.build.validate(self.get_root(), &mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

/// Bring a user-supplied base URL into `/segment/` form.
fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".into()
    } else {
        format!("/{trimmed}/")
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` table.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// Write `docroute.toml` into `root` and load it the way the CLI does,
/// without command overrides.
#[cfg(test)]
pub fn test_site_config(root: &Path, extra: &str) -> SiteConfig {
    let config_path = root.join("docroute.toml");
    fs::write(&config_path, format!("[site]\ntitle = \"Test\"\n{extra}")).unwrap();
    let mut config = SiteConfig::from_path(&config_path).unwrap();
    config.finalize(&config_path);
    config
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::parse_with_ignored("[site\ntitle = \"UniDi\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.base_url, "/");
        assert_eq!(config.build.output, PathBuf::from(".docroute"));
        assert_eq!(config.build.on_broken_links, BrokenLinks::Throw);
        assert_eq!(config.content.docs.path, PathBuf::from("docs"));
    }

    #[test]
    fn test_full_config_parses() {
        let config = test_parse_config(
            r#"
tagline = "Dependency Injection Container for Unity"
url = "https://unidi.github.io"
base_url = "/"

[navbar]
title = "UniDi"
logo = { alt = "UniDi Logo", src = "img/unidi-logo.svg" }
items = [
  { doc = "intro", label = "Docs", position = "left" },
  { to = "/blog", label = "Blog", position = "left" },
  { href = "https://github.com/UniDi/UniDi", label = "GitHub", position = "right" },
]

[footer]
style = "dark"
copyright = "UniDi"

[[footer.links]]
title = "Docs"
items = [{ label = "Tutorial", to = "/docs/intro" }]

[content.blog]
posts_per_page = 5

[build]
hash_length = 12
on_broken_links = "warn"
"#,
        );

        assert_eq!(config.navbar.items.len(), 3);
        assert_eq!(config.footer.links[0].items.len(), 1);
        assert_eq!(config.content.blog.posts_per_page, 5);
        assert_eq!(config.build.hash_length, 12);
        assert_eq!(config.build.on_broken_links, BrokenLinks::Warn);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\n[build]\ntrailing_slash = true";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_finalize_normalizes_paths() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), "[content.docs]\npath = \"documentation\"");

        let root = crate::utils::path::normalize_path(dir.path());
        assert_eq!(config.get_root(), root);
        assert_eq!(config.content.docs.path, root.join("documentation"));
        assert_eq!(config.build.output, root.join(".docroute"));
        assert_eq!(config.root_relative(&config.build.output), Path::new(".docroute"));
    }

    #[test]
    fn test_build_args_override() {
        let cli = Cli::parse_from(["docroute", "build", "-o", "out", "--base-url", "sub", "-D"]);
        let mut config = test_parse_config("");
        config.apply_command_options(&cli);

        assert_eq!(config.build.output, PathBuf::from("out"));
        assert_eq!(config.site.base_url, "/sub/");
        assert!(config.build.include_drafts);
    }

    #[test]
    fn test_warn_only_downgrades_throw() {
        let cli = Cli::parse_from(["docroute", "validate", "--warn-only"]);
        let mut config = test_parse_config("");
        config.apply_command_options(&cli);
        assert_eq!(config.build.on_broken_links, BrokenLinks::Warn);

        let mut ignoring = test_parse_config("[build]\non_broken_links = \"ignore\"");
        ignoring.apply_command_options(&cli);
        assert_eq!(ignoring.build.on_broken_links, BrokenLinks::Ignore);
    }

    #[test]
    fn test_validate_collects_errors() {
        let dir = TempDir::new().unwrap();
        let mut config = test_site_config(dir.path(), "[build]\nhash_length = 100");
        config.site.base_url = "docs".into();

        let err = config.validate().unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("build.hash_length"));
        assert!(rendered.contains("site.base_url"));
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("/"), "/");
        assert_eq!(normalize_base_url(""), "/");
        assert_eq!(normalize_base_url("my-project"), "/my-project/");
        assert_eq!(normalize_base_url("/a/b"), "/a/b/");
    }
}
