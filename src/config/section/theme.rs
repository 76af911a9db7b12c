//! `[theme]` section configuration.
//!
//! Passed through to the rendering layer untouched; only shape-checked here.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! custom_css = "src/css/custom.css"
//!
//! [theme.color_mode]
//! default = "dark"
//! disable_switch = false
//! respect_prefers_color_scheme = true
//!
//! [theme.prism]
//! default_language = "csharp"
//! theme = "vsDark"
//! additional_languages = ["csharp"]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// Stylesheet layered over the default theme.
    pub custom_css: Option<String>,

    pub color_mode: ColorModeConfig,

    pub prism: PrismConfig,
}

/// Light/dark mode behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorModeConfig {
    pub default: ColorMode,
    pub disable_switch: bool,
    pub respect_prefers_color_scheme: bool,
}

impl Default for ColorModeConfig {
    fn default() -> Self {
        Self {
            default: ColorMode::Light,
            disable_switch: false,
            respect_prefers_color_scheme: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// Code block highlighting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    pub default_language: Option<String>,
    pub theme: Option<String>,
    pub additional_languages: Vec<String>,
}

impl ThemeSectionConfig {
    pub const ADDITIONAL_LANGUAGES: FieldPath =
        FieldPath::new("theme.prism.additional_languages");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self
            .prism
            .additional_languages
            .iter()
            .any(|lang| lang.trim().is_empty())
        {
            diag.error(Self::ADDITIONAL_LANGUAGES, "language names must not be empty");
        }

        if self.color_mode.disable_switch && self.color_mode.respect_prefers_color_scheme {
            diag.warn(
                FieldPath::new("theme.color_mode.respect_prefers_color_scheme"),
                "has no effect while the color switch is disabled",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        let theme: ThemeSectionConfig = toml::from_str(
            r#"[color_mode]
default = "dark"
respect_prefers_color_scheme = true

[prism]
theme = "vsDark"
additional_languages = ["csharp"]"#,
        )
        .unwrap();
        assert_eq!(theme.color_mode.default, ColorMode::Dark);
        assert!(theme.color_mode.respect_prefers_color_scheme);
        assert_eq!(theme.prism.additional_languages, vec!["csharp"]);
    }

    #[test]
    fn test_empty_language_rejected() {
        let mut theme = ThemeSectionConfig::default();
        theme.prism.additional_languages.push(" ".into());
        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
