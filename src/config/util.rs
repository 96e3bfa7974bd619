//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/town/the welcome center/   ← cwd
/// /home/user/town/city.toml             ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start` instead of cwd.
pub fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    // Walk up from start looking for config file
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Expand `~` and resolve `path` against `base` when relative.
pub fn resolve_root(path: &Path, base: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let path = PathBuf::from(expanded);
    let full_path = if path.is_relative() {
        base.join(&path)
    } else {
        path
    };
    crate::utils::path::normalize_path(&full_path)
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_walks_upward() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("city.toml"), "").unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_from(&nested, Path::new("city.toml")).unwrap();
        assert_eq!(found, dir.path().join("city.toml"));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("city.toml"), "").unwrap();
        fs::create_dir_all(dir.path().join("inner/city.toml")).unwrap();

        let found = find_config_from(&dir.path().join("inner"), Path::new("city.toml"));
        assert_eq!(found, Some(dir.path().join("city.toml")));
    }

    #[test]
    fn test_resolve_root_relative() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_root(Path::new("out"), dir.path());
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("out"));
    }

    #[test]
    fn test_resolve_root_absolute() {
        let resolved = resolve_root(Path::new("/srv/city"), Path::new("/ignored"));
        assert_eq!(resolved, PathBuf::from("/srv/city"));
    }
}
