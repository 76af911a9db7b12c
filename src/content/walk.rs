//! Source file discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use jwalk::{Parallelism, WalkDir};

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// A content source file found under a content directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Absolute path.
    pub path: PathBuf,
    /// Path relative to the content directory, `/`-separated, with extension.
    pub rel: String,
}

impl SourceFile {
    /// Relative path without extension (`Advanced/Bindings`).
    pub fn rel_stem(&self) -> &str {
        match self.rel.rfind('.') {
            Some(dot) if dot > self.rel.rfind('/').map_or(0, |s| s + 1) => &self.rel[..dot],
            _ => &self.rel,
        }
    }

    /// Directory part of [`rel`](Self::rel), empty at the top level.
    pub fn rel_dir(&self) -> &str {
        self.rel.rfind('/').map_or("", |slash| &self.rel[..slash])
    }

    /// File name without extension.
    pub fn stem(&self) -> &str {
        let stem = self.rel_stem();
        stem.rfind('/').map_or(stem, |slash| &stem[slash + 1..])
    }
}

/// Collect files with one of `extensions` under `dir`, sorted by relative path.
///
/// Files and directories whose name starts with `_` or `.` are skipped.
/// A missing directory yields nothing. Unreadable entries are errors.
///
/// Walks on the calling thread: collection already runs inside `rayon::join`,
/// where a pool-backed walk can give up on a busy pool.
pub fn collect_sources(dir: &Path, extensions: &[String]) -> Result<Vec<SourceFile>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let walk = WalkDir::new(dir).parallelism(Parallelism::Serial);
    let mut files = Vec::new();
    for entry in walk {
        let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_str().unwrap_or_default();
        if IGNORED_FILES.contains(&name) {
            continue;
        }
        if let Some(file) = source_file(dir, entry.path(), extensions) {
            files.push(file);
        }
    }

    files.sort_by(|a, b| a.rel.cmp(&b.rel));
    Ok(files)
}

/// Keep `path` when no component is hidden and its extension matches.
fn source_file(dir: &Path, path: PathBuf, extensions: &[String]) -> Option<SourceFile> {
    let rel = path.strip_prefix(dir).ok()?;
    let rel = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    if rel.iter().any(|part| part.starts_with(['_', '.'])) {
        return None;
    }
    let ext = path.extension()?.to_str()?;
    if !extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
        return None;
    }
    Some(SourceFile {
        rel: rel.join("/"),
        path,
    })
}

/// Markdown extensions for docs and posts.
pub fn markdown_extensions() -> Vec<String> {
    vec!["md".into(), "mdx".into()]
}
