//! Front matter of docs and blog posts.
//!
//! Only the fields that influence routing or the registry are read:
//! `id`, `slug`, `title`, `tags`, `draft`, `date`. Everything else is left to
//! the rendering layer.
//!
//! Two syntaxes are accepted:
//!
//! ```text
//! ---                         +++
//! slug: welcome               slug = "welcome"
//! title: Welcome              title = "Welcome"
//! tags: [facebook, hello]     tags = ["facebook", "hello"]
//! ---                         +++
//! ```
//!
//! YAML-like blocks also take `tags: a, b` and block lists (`- a` lines).

use std::fs;

use anyhow::{Context, Result};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use super::walk::SourceFile;

/// A markdown file read once: its bytes are hashed, its front matter routed.
#[derive(Debug, Clone)]
pub struct MarkdownSource {
    pub file: SourceFile,
    pub bytes: Vec<u8>,
    pub meta: FrontMatter,
    /// Front matter title, else the first `#` heading.
    pub title: Option<String>,
}

impl MarkdownSource {
    pub fn read(file: SourceFile) -> Result<Self> {
        let bytes =
            fs::read(&file.path).with_context(|| format!("failed to read {}", file.path.display()))?;
        let text = String::from_utf8_lossy(&bytes);
        let (meta, body) = FrontMatter::extract(&text)
            .with_context(|| format!("invalid front matter in {}", file.path.display()))?;
        let title = meta.title.clone().or_else(|| first_heading(body));

        Ok(Self {
            file,
            bytes,
            meta,
            title,
        })
    }
}

/// Routing-relevant front matter fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub tags: Vec<String>,
    pub draft: bool,
    pub date: Option<String>,
}

impl FrontMatter {
    /// Split `content` into front matter and body.
    ///
    /// Content without a front matter block yields the default and the
    /// whole content as body.
    pub fn extract(content: &str) -> Result<(Self, &str)> {
        match detect_front_matter(content) {
            Some((fm, body, true)) => Ok((Self::parse_toml(fm)?, body)),
            Some((fm, body, false)) => Ok((Self::parse_yaml_like(fm), body)),
            None => Ok((Self::default(), content)),
        }
    }

    /// Parse simple YAML-like front matter (`key: value`).
    fn parse_yaml_like(content: &str) -> Self {
        let mut meta = Self::default();
        // Key whose value continues on `- item` lines
        let mut list_key: Option<String> = None;

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if let Some(item) = trimmed.strip_prefix("- ") {
                if list_key.as_deref() == Some("tags") {
                    push_tag(&mut meta.tags, item);
                }
                continue;
            }
            list_key = None;

            let Some((key, value)) = trimmed.split_once(':') else {
                continue;
            };
            let key = key.trim().to_lowercase();
            let value = value.trim();

            if value.is_empty() {
                list_key = Some(key);
                continue;
            }

            match key.as_str() {
                "id" => meta.id = Some(unquote(value).to_string()),
                "slug" => meta.slug = Some(unquote(value).to_string()),
                "title" => meta.title = Some(unquote(value).to_string()),
                "date" => meta.date = Some(unquote(value).to_string()),
                "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
                "tags" => {
                    let inner = value
                        .strip_prefix('[')
                        .and_then(|v| v.strip_suffix(']'))
                        .unwrap_or(value);
                    for tag in inner.split(',') {
                        push_tag(&mut meta.tags, tag);
                    }
                }
                _ => {}
            }
        }

        meta
    }

    /// Parse TOML front matter.
    fn parse_toml(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content).context("invalid TOML front matter")?;

        let string = |key: &str| match table.get(key) {
            Some(toml::Value::String(s)) => Some(s.clone()),
            Some(toml::Value::Datetime(dt)) => Some(dt.to_string()),
            _ => None,
        };

        let mut tags = Vec::new();
        match table.get("tags") {
            Some(toml::Value::Array(items)) => {
                for item in items {
                    if let Some(tag) = item.as_str() {
                        push_tag(&mut tags, tag);
                    }
                }
            }
            Some(toml::Value::String(s)) => {
                for tag in s.split(',') {
                    push_tag(&mut tags, tag);
                }
            }
            _ => {}
        }

        Ok(Self {
            id: string("id"),
            slug: string("slug"),
            title: string("title"),
            tags,
            draft: table
                .get("draft")
                .and_then(toml::Value::as_bool)
                .unwrap_or(false),
            date: string("date"),
        })
    }
}

/// Text of the first level-1 heading in a markdown body.
pub fn first_heading(body: &str) -> Option<String> {
    let mut in_heading = false;
    let mut title = String::new();

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_heading = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = title.trim();
                return (!title.is_empty()).then(|| title.to_string());
            }
            Event::Text(text) | Event::Code(text) if in_heading => title.push_str(&text),
            _ => {}
        }
    }
    None
}

/// Detect and extract front matter.
/// Returns `(front_matter, body, is_toml)` if found.
fn detect_front_matter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if let Some(rest) = trimmed.strip_prefix(fence)
            && let Some(end) = rest.find(&format!("\n{fence}"))
        {
            let fm = rest[..end].trim();
            let body = rest[end + 1 + fence.len()..].trim_start_matches(['\r', '\n']);
            return Some((fm, body, is_toml));
        }
    }

    None
}

fn unquote(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

fn push_tag(tags: &mut Vec<String>, raw: &str) {
    let tag = unquote(raw);
    if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}
