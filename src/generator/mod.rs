//! Build artifacts.
//!
//! Written into `build.output` once the route table is built and validated:
//!
//! - **routes.json**: the ordered route table
//! - **registry.json**: component reference -> source id, kind, file, title
//! - **site.json**: site, theme, navbar and footer configuration
//!
//! Each file goes through a temp file and a rename, so readers never see a
//! half-written artifact. Unchanged files are not rewritten.

pub mod registry;
pub mod site;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::ContentTree;
use crate::route::RouteTable;
use crate::{debug, log};

use registry::build_registry;
use site::SiteSnapshot;

pub const ROUTES_FILE: &str = "routes.json";
pub const REGISTRY_FILE: &str = "registry.json";
pub const SITE_FILE: &str = "site.json";

/// Pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Serialized `routes.json`.
pub fn routes_json(table: &RouteTable) -> Result<String> {
    to_json(table)
}

/// What a write pass did.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
}

/// Write all artifacts for `table` into the configured output directory.
pub fn write_artifacts(
    config: &SiteConfig,
    tree: &ContentTree,
    table: &RouteTable,
) -> Result<WriteSummary> {
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean {}", output.display()))?;
        debug!("output"; "cleaned {}", output.display());
    }
    fs::create_dir_all(output)
        .with_context(|| format!("failed to create {}", output.display()))?;

    let registry = build_registry(
        tree,
        table,
        config.get_root(),
        config.build.not_found.as_deref(),
    );

    let artifacts = [
        (ROUTES_FILE, routes_json(table)?),
        (REGISTRY_FILE, to_json(&registry)?),
        (SITE_FILE, to_json(&SiteSnapshot::new(config))?),
    ];

    let mut summary = WriteSummary::default();
    for (name, json) in artifacts {
        let path = output.join(name);
        if write_if_changed(&path, &json)? {
            summary.written.push(path);
        } else {
            summary.unchanged.push(path);
        }
    }

    log!(
        "output";
        "{} ({} written, {} unchanged)",
        config.root_relative(output).display(),
        summary.written.len(),
        summary.unchanged.len()
    );
    Ok(summary)
}

/// Check if file content is the same as new content
fn file_content_matches(path: &Path, content: &str) -> bool {
    path.exists() && fs::read_to_string(path).is_ok_and(|existing| existing == content)
}

/// Atomically replace `path` with `content` unless it already holds it.
///
/// Returns whether the file was written.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
    if file_content_matches(path, content) {
        debug!("output"; "{} unchanged, skipping write", path.display());
        return Ok(false);
    }

    let file_name = path
        .file_name()
        .with_context(|| format!("{} has no file name", path.display()))?;
    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, content).with_context(|| format!("failed to write {}", tmp.display()))?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err).with_context(|| format!("failed to move {} into place", path.display()));
    }
    Ok(true)
}
