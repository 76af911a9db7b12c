//! Filesystem path normalization.

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first. Paths that do not exist yet (the output
/// directory before the first build) are made absolute against the current
/// directory and cleaned lexically.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        };
        clean(&absolute)
    })
}

/// Drop `.` and fold `..` without touching the filesystem.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path_absolute() {
        let normalized = normalize_path(Path::new("/absolute/path/file.txt"));
        assert_eq!(normalized, PathBuf::from("/absolute/path/file.txt"));
    }

    #[test]
    fn test_normalize_path_relative() {
        let normalized = normalize_path(Path::new("relative/path/file.txt"));
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("relative/path/file.txt"));
    }

    #[test]
    fn test_normalize_missing_path_is_cleaned() {
        let normalized = normalize_path(Path::new("/site/./docs/../.docroute"));
        assert_eq!(normalized, PathBuf::from("/site/.docroute"));
    }
}
