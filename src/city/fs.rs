//! Create-if-absent filesystem primitives.
//!
//! Every write in the city goes through [`TreeWriter`]. Each primitive
//! leaves existing entries untouched, so regenerating over a populated tree
//! only fills in what is missing. Nothing is repaired: a stale symlink stays
//! stale, a file keeps its old contents.

use std::{
    collections::HashMap,
    fs, io,
    ops::AddAssign,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::debug;

/// Filesystem errors. All of them abort generation.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("failed to create directory `{0}`")]
    CreateDir(PathBuf, #[source] io::Error),

    #[error("`{0}` exists and is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to write file `{0}`")]
    WriteFile(PathBuf, #[source] io::Error),

    #[error("failed to link `{link}` -> `{target}`")]
    Symlink {
        link: PathBuf,
        target: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to inspect `{0}`")]
    Inspect(PathBuf, #[source] io::Error),

    #[error("failed to remove `{0}`")]
    Remove(PathBuf, #[source] io::Error),
}

pub type Result<T> = std::result::Result<T, FsError>;

// ============================================================================
// WriteStats
// ============================================================================

/// Counts of entries actually created.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WriteStats {
    pub directories: usize,
    pub files: usize,
    pub links: usize,
}

impl WriteStats {
    pub const fn total(&self) -> usize {
        self.directories + self.files + self.links
    }

    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl AddAssign for WriteStats {
    fn add_assign(&mut self, other: Self) {
        self.directories += other.directories;
        self.files += other.files;
        self.links += other.links;
    }
}

// ============================================================================
// TreeWriter
// ============================================================================

/// Idempotent writer with a running tally of what it created.
///
/// In dry-run mode nothing is touched; entries that would be created are
/// counted, remembered as planned, and logged with `debug!`. Removals are
/// remembered too, so a dry `--clean` build plans the full rebuild.
#[derive(Debug, Default)]
pub struct TreeWriter {
    dry_run: bool,
    stats: WriteStats,
    planned: HashMap<PathBuf, Planned>,
    removed: Vec<PathBuf>,
}

/// An entry a dry run would have created.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Planned {
    Directory,
    File,
    Link(PathBuf),
}

/// What occupies a path, planned or on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Directory,
    Other,
}

impl TreeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }

    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    #[cfg(test)]
    pub const fn stats(&self) -> WriteStats {
        self.stats
    }

    /// Return the tally so far and start a new one.
    pub fn take_stats(&mut self) -> WriteStats {
        std::mem::take(&mut self.stats)
    }

    /// Create `path` and any missing ancestors.
    ///
    /// Returns `true` if the directory was created. Fails if `path` exists
    /// and is not a directory.
    pub fn ensure_directory(&mut self, path: &Path) -> Result<bool> {
        match self.entry(path, true)? {
            Some(Entry::Directory) => return Ok(false),
            Some(Entry::Other) => return Err(FsError::NotADirectory(path.to_path_buf())),
            None => {}
        }

        if self.dry_run {
            debug!("dry-run"; "mkdir {}", path.display());
            self.plan_with_ancestors(path)?;
        } else {
            fs::create_dir_all(path).map_err(|e| FsError::CreateDir(path.to_path_buf(), e))?;
        }
        self.stats.directories += 1;
        Ok(true)
    }

    /// Write `contents` to `path` unless an entry already exists there.
    ///
    /// The parent directory is created first. Existing files are never
    /// truncated.
    pub fn ensure_file(&mut self, path: &Path, contents: &str) -> Result<bool> {
        if let Some(parent) = path.parent() {
            self.ensure_directory(parent)?;
        }
        if self.exists(path)? {
            return Ok(false);
        }

        if self.dry_run {
            debug!("dry-run"; "touch {}", path.display());
            self.planned.insert(path.to_path_buf(), Planned::File);
        } else {
            write_new(path, contents).map_err(|e| FsError::WriteFile(path.to_path_buf(), e))?;
        }
        self.stats.files += 1;
        Ok(true)
    }

    /// Create a symlink at `link` pointing to `target`, unless `link` exists.
    ///
    /// Any existing entry counts, including a dangling link.
    pub fn ensure_symlink(&mut self, target: &Path, link: &Path) -> Result<bool> {
        if self.exists(link)? {
            return Ok(false);
        }

        if self.dry_run {
            debug!("dry-run"; "link {} -> {}", link.display(), target.display());
            self.planned
                .insert(link.to_path_buf(), Planned::Link(target.to_path_buf()));
        } else {
            symlink(target, link).map_err(|source| FsError::Symlink {
                link: link.to_path_buf(),
                target: target.to_path_buf(),
                source,
            })?;
        }
        self.stats.links += 1;
        Ok(true)
    }

    /// Delete `path` recursively. Returns `false` if nothing was there.
    pub fn reset(&mut self, path: &Path) -> Result<bool> {
        let Some(entry) = self.entry(path, false)? else {
            return Ok(false);
        };

        if self.dry_run {
            debug!("dry-run"; "remove {}", path.display());
            self.planned.retain(|planned, _| !planned.starts_with(path));
            self.removed.push(path.to_path_buf());
            return Ok(true);
        }

        let removed = match entry {
            Entry::Directory => fs::remove_dir_all(path),
            Entry::Other => fs::remove_file(path),
        };
        removed.map_err(|e| FsError::Remove(path.to_path_buf(), e))?;
        Ok(true)
    }
}

impl TreeWriter {
    /// Whether anything (file, directory, or link, dangling or not) is at `path`.
    fn exists(&self, path: &Path) -> Result<bool> {
        Ok(self.entry(path, false)?.is_some())
    }

    /// Look `path` up among planned entries, then on disk unless a planned
    /// removal covers it. `follow` resolves one level of symlink.
    fn entry(&self, path: &Path, follow: bool) -> Result<Option<Entry>> {
        match self.planned.get(path) {
            Some(Planned::Directory) => return Ok(Some(Entry::Directory)),
            Some(Planned::File) => return Ok(Some(Entry::Other)),
            Some(Planned::Link(target)) if follow => {
                let resolved = path.parent().map_or_else(|| target.clone(), |p| p.join(target));
                return self.entry(&resolved, false);
            }
            Some(Planned::Link(_)) => return Ok(Some(Entry::Other)),
            None => {}
        }
        if self.removed.iter().any(|removed| path.starts_with(removed)) {
            return Ok(None);
        }

        let meta = if follow {
            fs::metadata(path)
        } else {
            fs::symlink_metadata(path)
        };
        match meta {
            Ok(meta) if meta.is_dir() => Ok(Some(Entry::Directory)),
            Ok(_) => Ok(Some(Entry::Other)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(FsError::Inspect(path.to_path_buf(), err)),
        }
    }

    /// Record `path` and its missing ancestors, like `create_dir_all` would.
    fn plan_with_ancestors(&mut self, path: &Path) -> Result<()> {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() || self.entry(ancestor, true)?.is_some() {
                break;
            }
            self.planned.insert(ancestor.to_path_buf(), Planned::Directory);
        }
        Ok(())
    }
}

fn write_new(path: &Path, contents: &str) -> io::Result<()> {
    use std::io::Write;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;
    file.write_all(contents.as_bytes())
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> io::Result<()> {
    if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory_creates_ancestors() {
        let dir = TempDir::new().unwrap();
        let mut writer = TreeWriter::new();
        let path = dir.path().join("a/b/c");

        assert!(writer.ensure_directory(&path).unwrap());
        assert!(path.is_dir());
        assert!(!writer.ensure_directory(&path).unwrap());
        assert_eq!(writer.stats().directories, 1);
    }

    #[test]
    fn test_ensure_directory_rejects_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("occupied");
        fs::write(&path, "").unwrap();

        let err = TreeWriter::new().ensure_directory(&path).unwrap_err();
        assert!(matches!(err, FsError::NotADirectory(_)));
    }

    #[test]
    fn test_ensure_file_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let mut writer = TreeWriter::new();
        let path = dir.path().join("kitchen/sink");

        assert!(writer.ensure_file(&path, "first").unwrap());
        assert!(!writer.ensure_file(&path, "second").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
        assert_eq!(writer.stats().files, 1);
        assert_eq!(writer.stats().directories, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_symlink_leaves_existing_link() {
        let dir = TempDir::new().unwrap();
        let mut writer = TreeWriter::new();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::create_dir(&a).unwrap();
        fs::create_dir(&b).unwrap();
        let link = dir.path().join("door");

        assert!(writer.ensure_symlink(&a, &link).unwrap());
        assert!(!writer.ensure_symlink(&b, &link).unwrap());
        assert_eq!(fs::read_link(&link).unwrap(), a);
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_symlink_keeps_dangling_link() {
        let dir = TempDir::new().unwrap();
        let mut writer = TreeWriter::new();
        let link = dir.path().join("stale");

        writer
            .ensure_symlink(&dir.path().join("gone"), &link)
            .unwrap();
        assert!(!link.exists());
        assert!(!writer.ensure_symlink(dir.path(), &link).unwrap());
        assert_eq!(fs::read_link(&link).unwrap(), dir.path().join("gone"));
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let mut writer = TreeWriter::dry_run();
        let path = dir.path().join("x/y");

        assert!(writer.ensure_file(&path, "").unwrap());
        assert!(writer.ensure_symlink(dir.path(), &dir.path().join("l")).unwrap());
        assert!(!dir.path().join("x").exists());
        assert_eq!(
            writer.stats(),
            WriteStats {
                directories: 1,
                files: 1,
                links: 1
            }
        );
    }

    #[test]
    fn test_reset() {
        let dir = TempDir::new().unwrap();
        let mut writer = TreeWriter::new();
        let root = dir.path().join("town");
        writer.ensure_file(&root.join("a/b"), "").unwrap();

        assert!(writer.reset(&root).unwrap());
        assert!(!root.exists());
        assert!(!writer.reset(&root).unwrap());
    }

    #[test]
    fn test_take_stats_resets_tally() {
        let dir = TempDir::new().unwrap();
        let mut writer = TreeWriter::new();
        writer.ensure_directory(&dir.path().join("a")).unwrap();

        assert_eq!(writer.take_stats().directories, 1);
        assert!(writer.stats().is_empty());
    }

    #[test]
    fn test_write_stats_add_assign() {
        let mut total = WriteStats::default();
        total += WriteStats {
            directories: 1,
            files: 2,
            links: 3,
        };
        total += WriteStats {
            directories: 1,
            files: 0,
            links: 0,
        };
        assert_eq!(total.total(), 7);
    }

    #[test]
    fn test_dry_run_rejects_directory_over_planned_file() {
        let dir = TempDir::new().unwrap();
        let mut writer = TreeWriter::dry_run();
        let path = dir.path().join("shelf/book");

        writer.ensure_file(&path, "").unwrap();
        let err = writer.ensure_directory(&path).unwrap_err();
        assert!(matches!(err, FsError::NotADirectory(_)));

        writer.ensure_symlink(dir.path(), &dir.path().join("door")).unwrap();
        assert!(!writer.ensure_directory(&dir.path().join("door")).unwrap());
    }

    #[test]
    fn test_dry_reset_plans_recreation() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("town");
        TreeWriter::new().ensure_file(&root.join("a/b"), "").unwrap();

        let mut writer = TreeWriter::dry_run();
        assert!(writer.reset(&root).unwrap());
        assert!(!writer.reset(&dir.path().join("elsewhere")).unwrap());
        assert!(writer.ensure_file(&root.join("a/b"), "").unwrap());
        assert_eq!(
            writer.stats(),
            WriteStats {
                directories: 1,
                files: 1,
                links: 0
            }
        );
        assert!(!writer.ensure_file(&root.join("a/b"), "").unwrap());
        assert!(root.join("a/b").is_file());
    }
}
