//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`.
///
/// An absolute `config_name` is returned as-is when it exists.
///
/// # Example
/// ```text
/// /home/user/site/public/png-to-webp/   ← start
/// /home/user/site/schemagen.toml        ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = current.parent()?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("public/png-to-webp");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("schemagen.toml"), "").unwrap();

        let found = find_config_file(Path::new("schemagen.toml"), &nested).unwrap();
        assert_eq!(found, dir.path().join("schemagen.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let dir = TempDir::new().unwrap();
        assert!(find_config_file(Path::new("schemagen-missing-7f3a.toml"), dir.path()).is_none());
    }

    #[test]
    fn test_find_config_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert!(find_config_file(&path, dir.path()).is_none());
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(&path, Path::new("/")), Some(path));
    }
}
