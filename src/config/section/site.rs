//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "UniDi"
//! tagline = "Dependency Injection Container for Unity"
//! url = "https://unidi.github.io"
//! base_url = "/"
//! favicon = "img/favicon.ico"
//! organization = "UniDi"
//! project = "UniDi"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata handed to the rendering layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Short tagline shown under the title.
    pub tagline: String,

    /// Deployment origin, without path (e.g. `https://example.github.io`).
    pub url: Option<String>,

    /// Path every route is served under. Starts and ends with `/`.
    pub base_url: String,

    /// Favicon path, relative to the static directory.
    pub favicon: Option<String>,

    /// GitHub organization (for edit links and deployment).
    pub organization: Option<String>,

    /// GitHub project name.
    pub project: Option<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: None,
            base_url: "/".into(),
            favicon: None,
            organization: None,
            project: None,
        }
    }
}

impl SiteInfoConfig {
    pub const TITLE: FieldPath = FieldPath::new("site.title");
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const BASE_URL: FieldPath = FieldPath::new("site.base_url");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` is set
    /// - `url` is an http(s) URL with a host and no path
    /// - `base_url` starts and ends with `/`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::TITLE, "site title must not be empty");
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                    let path = parsed.path().trim_matches('/');
                    if !path.is_empty() {
                        diag.error_with_hint(
                            Self::URL,
                            format!("URL must not contain a path (found `/{path}`)"),
                            format!("move the path into {}: \"/{path}/\"", Self::BASE_URL),
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::URL,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            diag.error_with_hint(
                Self::BASE_URL,
                format!("`{}` must start and end with `/`", self.base_url),
                "use \"/\" or \"/my-project/\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SiteInfoConfig {
        SiteInfoConfig {
            title: "UniDi".into(),
            url: Some("https://unidi.github.io".into()),
            ..SiteInfoConfig::default()
        }
    }

    #[test]
    fn test_valid_site() {
        let mut diag = ConfigDiagnostics::new();
        valid().validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_url_with_path_rejected() {
        let mut diag = ConfigDiagnostics::new();
        let site = SiteInfoConfig {
            url: Some("https://example.github.io/my-project".into()),
            ..valid()
        };
        site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("/my-project"));
    }

    #[test]
    fn test_bad_scheme_and_base_url() {
        let mut diag = ConfigDiagnostics::new();
        let site = SiteInfoConfig {
            url: Some("ftp://example.com".into()),
            base_url: "docs".into(),
            ..valid()
        };
        site.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_missing_title() {
        let mut diag = ConfigDiagnostics::new();
        SiteInfoConfig::default().validate(&mut diag);
        assert_eq!(diag.errors()[0].field, SiteInfoConfig::TITLE);
    }
}
