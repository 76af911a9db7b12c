//! Locating the config file.
//!
//! ```text
//! /home/user/site/docs/advanced/  <- cwd
//! /home/user/site/docs/
//! /home/user/site/docroute.toml   <- found
//! ```

use std::path::{Path, PathBuf};

use super::ConfigError;

/// Find `name` in `start` or the nearest ancestor that has it.
///
/// An absolute `name` is used as is and only has to exist.
pub fn locate_config(name: &Path, start: &Path) -> Result<PathBuf, ConfigError> {
    if name.is_absolute() {
        return if name.is_file() {
            Ok(name.to_path_buf())
        } else {
            Err(ConfigError::Validation(format!(
                "config file `{}` does not exist",
                name.display()
            )))
        };
    }

    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| {
            ConfigError::Validation(format!(
                "config file `{}` not found in `{}` or any parent",
                name.display(),
                start.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_locate_from_nested_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs/advanced");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("docroute.toml"), "").unwrap();

        let found = locate_config(Path::new("docroute.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("docroute.toml"));
    }

    #[test]
    fn test_nearest_config_wins() {
        let dir = TempDir::new().unwrap();
        let site = dir.path().join("site");
        fs::create_dir_all(site.join("docs")).unwrap();
        fs::write(dir.path().join("docroute.toml"), "").unwrap();
        fs::write(site.join("docroute.toml"), "").unwrap();

        let found = locate_config(Path::new("docroute.toml"), &site.join("docs")).unwrap();
        assert_eq!(found, site.join("docroute.toml"));
    }

    #[test]
    fn test_directory_is_not_a_config() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("custom.toml")).unwrap();

        let err = locate_config(Path::new("custom.toml"), dir.path()).unwrap_err();
        assert!(err.to_string().contains("custom.toml"));
    }

    #[test]
    fn test_absolute_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.toml");

        assert!(locate_config(&path, Path::new("/")).is_err());
        fs::write(&path, "").unwrap();
        assert_eq!(locate_config(&path, Path::new("/")).unwrap(), path);
    }
}
