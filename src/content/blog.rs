//! Blog: posts, paginated list pages and tag indexes.
//!
//! ```text
//! blog/2019-05-28-hola.md               -> /blog/2019/05/28/hola
//! blog/2019-05-29-hello-world/index.md  -> /blog/2019/05/29/hello-world
//! blog/2019-05-30-welcome.md + `slug: welcome` -> /blog/welcome
//! blog/notes.md                         -> /blog/notes
//!
//! generated: /blog, /blog/page/2.., /blog/tags, /blog/tags/<tag>
//! ```
//!
//! Generated pages hash a snapshot of what they list (post ids, tag names),
//! never the posts' content.

use std::collections::BTreeMap;

use anyhow::Result;
use rayon::prelude::*;
use serde_json::json;

use super::meta::MarkdownSource;
use super::walk::{collect_sources, markdown_extensions};
use super::{ContentKind, ContentNode, ContentSource, route_path};
use crate::config::SiteConfig;
use crate::utils::date::Date;
use crate::utils::slug::slugify;
use crate::{debug, log};

/// A blog post ready to be routed.
#[derive(Debug, Clone)]
pub struct BlogPost {
    pub source_id: String,
    pub url_path: String,
    pub date: Option<Date>,
    /// Tag labels as written in front matter.
    pub tags: Vec<String>,
    pub source: MarkdownSource,
}

impl BlogPost {
    fn from_source(source: MarkdownSource, config: &SiteConfig) -> Self {
        let file = &source.file;
        let source_id = format!("blog/{}", file.rel_stem());

        // `name/index.md` is named after its directory
        let (dir, name) = if file.stem() == "index" && !file.rel_dir().is_empty() {
            let rel_dir = file.rel_dir();
            match rel_dir.rfind('/') {
                Some(slash) => (&rel_dir[..slash], &rel_dir[slash + 1..]),
                None => ("", rel_dir),
            }
        } else {
            (file.rel_dir(), file.stem())
        };

        let (prefix_date, name) = match Date::split_prefix(name) {
            Some((date, rest)) => (Some(date), rest),
            None => (None, name),
        };
        let date = prefix_date.or_else(|| source.meta.date.as_deref().and_then(Date::parse));

        let base = config.content.blog.route_base_path.as_str();
        let url_path = match (source.meta.slug.as_deref(), prefix_date) {
            (Some(slug), _) if slug.starts_with('/') => route_path(config, [base, slug]),
            (Some(slug), _) => route_path(config, [base, dir, slug]),
            (None, Some(date)) => {
                let [y, m, d] = date.segments();
                route_path(config, [base, y.as_str(), m.as_str(), d.as_str(), dir, name])
            }
            (None, None) => route_path(config, [base, dir, name]),
        };

        Self {
            source_id,
            url_path,
            date,
            tags: source.meta.tags.clone(),
            source,
        }
    }

    fn into_node(self) -> ContentNode {
        let MarkdownSource {
            file, bytes, title, ..
        } = self.source;
        ContentNode::new(
            ContentKind::BlogPost,
            self.source_id,
            self.url_path,
            ContentSource::Bytes(bytes),
        )
        .with_title(title)
        .with_source_file(file.path)
    }
}

/// Read every post, newest first. Drafts are dropped unless requested.
pub fn load_posts(config: &SiteConfig) -> Result<Vec<BlogPost>> {
    let blog_config = &config.content.blog;
    if !blog_config.enable {
        return Ok(Vec::new());
    }

    let files = collect_sources(&blog_config.path, &markdown_extensions())?;
    let sources = files
        .into_par_iter()
        .map(MarkdownSource::read)
        .collect::<Result<Vec<_>>>()?;

    let mut posts = Vec::with_capacity(sources.len());
    for source in sources {
        if source.meta.draft && !config.build.include_drafts {
            debug!("blog"; "skipping draft {}", source.file.rel);
            continue;
        }
        posts.push(BlogPost::from_source(source, config));
    }

    // Newest first, undated last, ties by path
    posts.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.url_path.cmp(&b.url_path))
    });
    Ok(posts)
}

/// A tag and the posts carrying it, in post order.
#[derive(Debug, Clone, PartialEq)]
pub struct TagPosts {
    pub label: String,
    pub slug: String,
    pub posts: Vec<String>,
}

/// Group posts by tag slug. The first spelling of a tag names it.
pub fn group_tags(posts: &[BlogPost]) -> Vec<TagPosts> {
    let mut tags: BTreeMap<String, TagPosts> = BTreeMap::new();
    for post in posts {
        for label in &post.tags {
            let slug = slugify(label);
            if slug.is_empty() {
                log!("blog"; "ignoring tag `{}` in {}: nothing left to put in a URL", label, post.source_id);
                continue;
            }
            let entry = tags.entry(slug.clone()).or_insert_with(|| TagPosts {
                label: label.clone(),
                slug,
                posts: Vec::new(),
            });
            if !entry.posts.contains(&post.source_id) {
                entry.posts.push(post.source_id.clone());
            }
        }
    }
    tags.into_values().collect()
}

/// Every blog node: list pages, posts, tag list and per-tag pages.
pub fn blog_nodes(posts: Vec<BlogPost>, config: &SiteConfig) -> Vec<ContentNode> {
    if posts.is_empty() {
        return Vec::new();
    }

    let blog_config = &config.content.blog;
    let base = blog_config.route_base_path.as_str();
    let tags_base = blog_config.tags_base_path.as_str();
    let mut nodes = Vec::new();

    // List pages
    let per_page = blog_config.posts_per_page.max(1);
    let total_pages = posts.len().div_ceil(per_page);
    for (index, chunk) in posts.chunks(per_page).enumerate() {
        let page = index + 1;
        let ids: Vec<&str> = chunk.iter().map(|p| p.source_id.as_str()).collect();
        let (source_id, url_path) = if page == 1 {
            ("blog/_list".to_string(), route_path(config, [base]))
        } else {
            let n = page.to_string();
            (
                format!("blog/_list/{page}"),
                route_path(config, [base, "page", n.as_str()]),
            )
        };
        nodes.push(
            ContentNode::new(
                ContentKind::Page,
                source_id,
                url_path,
                ContentSource::Snapshot(json!({
                    "page": page,
                    "totalPages": total_pages,
                    "posts": ids,
                    "showReadingTime": blog_config.show_reading_time,
                    "editUrl": blog_config.edit_url,
                })),
            )
            .with_title(Some("Blog".to_string())),
        );
    }

    // Tags
    let tags = group_tags(&posts);
    if !tags.is_empty() {
        let listing: Vec<_> = tags
            .iter()
            .map(|t| json!({ "label": t.label, "slug": t.slug, "count": t.posts.len() }))
            .collect();
        nodes.push(
            ContentNode::new(
                ContentKind::TagIndex,
                "blog/_tags",
                route_path(config, [base, tags_base]),
                ContentSource::Snapshot(json!({ "tags": listing })),
            )
            .with_title(Some("Tags".to_string())),
        );

        for tag in &tags {
            nodes.push(
                ContentNode::new(
                    ContentKind::TagIndex,
                    format!("blog/_tags/{}", tag.slug),
                    route_path(config, [base, tags_base, tag.slug.as_str()]),
                    ContentSource::Snapshot(json!({
                        "tag": tag.label,
                        "posts": tag.posts,
                    })),
                )
                .with_title(Some(tag.label.clone())),
            );
        }
    }

    log!(
        "blog";
        "{} posts, {} list pages, {} tags",
        posts.len(),
        total_pages,
        tags.len()
    );

    nodes.extend(posts.into_iter().map(BlogPost::into_node));
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_site_config;
    use crate::content::ContentTree;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn sample_blog(root: &Path) {
        write(
            root,
            "blog/2019-05-28-hola.md",
            "---\nslug: hola\ntitle: Hola\ntags: [hola, docusaurus]\n---\nLorem",
        );
        write(
            root,
            "blog/2019-05-29-hello-world.md",
            "---\nslug: hello-world\ntags: [hello, docusaurus]\n---\n",
        );
        write(
            root,
            "blog/2019-05-30-welcome/index.md",
            "---\nslug: welcome\ntags: [facebook, hello, docusaurus]\n---\n",
        );
    }

    #[test]
    fn test_posts_newest_first() {
        let dir = TempDir::new().unwrap();
        sample_blog(dir.path());
        let config = test_site_config(dir.path(), "");

        let posts = load_posts(&config).unwrap();
        let urls: Vec<_> = posts.iter().map(|p| p.url_path.as_str()).collect();
        assert_eq!(urls, ["/blog/welcome", "/blog/hello-world", "/blog/hola"]);
        assert_eq!(posts[0].source_id, "blog/2019-05-30-welcome/index");
        assert_eq!(posts[0].date, Some(Date::from_ymd(2019, 5, 30)));
    }

    #[test]
    fn test_date_prefixed_urls() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "blog/2021-08-26-welcome.md", "# Welcome");
        write(dir.path(), "blog/2021-08-01-mdx-blog-post/index.mdx", "");
        write(dir.path(), "blog/notes.md", "---\ndate: 2020-01-01\n---\n");
        let config = test_site_config(dir.path(), "");

        let posts = load_posts(&config).unwrap();
        let urls: Vec<_> = posts.iter().map(|p| p.url_path.as_str()).collect();
        assert_eq!(
            urls,
            [
                "/blog/2021/08/26/welcome",
                "/blog/2021/08/01/mdx-blog-post",
                "/blog/notes",
            ]
        );
        assert_eq!(posts[2].date, Some(Date::from_ymd(2020, 1, 1)));
    }

    #[test]
    fn test_tags_grouped_by_slug() {
        let dir = TempDir::new().unwrap();
        sample_blog(dir.path());
        let config = test_site_config(dir.path(), "");

        let tags = group_tags(&load_posts(&config).unwrap());
        let slugs: Vec<_> = tags.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, ["docusaurus", "facebook", "hello", "hola"]);
        assert_eq!(tags[0].posts.len(), 3);
        assert_eq!(tags[3].posts, ["blog/2019-05-28-hola"]);
    }

    #[test]
    fn test_blog_nodes_match_generated_routes() {
        let dir = TempDir::new().unwrap();
        sample_blog(dir.path());
        let config = test_site_config(dir.path(), "");

        let nodes = blog_nodes(load_posts(&config).unwrap(), &config);
        let mut paths: Vec<_> = nodes.iter().map(|n| n.url_path.as_str()).collect();
        paths.sort_unstable();
        assert_eq!(
            paths,
            [
                "/blog",
                "/blog/hello-world",
                "/blog/hola",
                "/blog/tags",
                "/blog/tags/docusaurus",
                "/blog/tags/facebook",
                "/blog/tags/hello",
                "/blog/tags/hola",
                "/blog/welcome",
            ]
        );
        assert!(nodes.iter().all(|n| n.is_leaf()));
    }

    #[test]
    fn test_pagination() {
        let dir = TempDir::new().unwrap();
        for day in 1..=5 {
            write(dir.path(), &format!("blog/2020-01-0{day}-post.md"), "");
        }
        let config = test_site_config(dir.path(), "[content.blog]\nposts_per_page = 2");

        let nodes = blog_nodes(load_posts(&config).unwrap(), &config);
        let lists: Vec<_> = nodes
            .iter()
            .filter(|n| n.kind == ContentKind::Page)
            .map(|n| n.url_path.as_str())
            .collect();
        assert_eq!(lists, ["/blog", "/blog/page/2", "/blog/page/3"]);

        let ContentSource::Snapshot(first) = &nodes[0].content else {
            panic!("list page should hash a snapshot");
        };
        assert_eq!(first["posts"][0], "blog/2020-01-05-post");
        assert_eq!(first["totalPages"], 3);
    }

    #[test]
    fn test_render_settings_change_list_ref() {
        let dir = TempDir::new().unwrap();
        sample_blog(dir.path());
        let list_ref = |extra: &str| {
            let config = test_site_config(dir.path(), extra);
            let tree = ContentTree::new(blog_nodes(load_posts(&config).unwrap(), &config));
            let table = crate::route::builder::build(&tree).unwrap();
            table.find("/blog").unwrap().component_ref.clone()
        };

        let plain = list_ref("");
        assert_eq!(plain, list_ref(""));
        assert_ne!(plain, list_ref("[content.blog]\nshow_reading_time = false"));
        assert_ne!(
            plain,
            list_ref("[content.blog]\nedit_url = \"https://github.com/UniDi/UniDi/edit/main/\"")
        );
    }

    #[test]
    fn test_no_posts_no_nodes() {
        let dir = TempDir::new().unwrap();
        let config = test_site_config(dir.path(), "");
        assert!(blog_nodes(load_posts(&config).unwrap(), &config).is_empty());
    }
}
