//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Directories never descended into while listing a project.
///
/// Marker lookups match the full relative path, so nothing below these
/// directories can ever match a marker.
pub const PRUNED_DIRS: &[&str] = &["node_modules", ".git"];

/// Options for a recursive file listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Maximum depth below the root (`None` walks the whole tree)
    pub max_depth: Option<usize>,
}

impl ListOptions {
    pub fn with_max_depth(max_depth: Option<usize>) -> Self {
        Self { max_depth }
    }
}

/// Abstraction over file system operations for testability
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// List every file beneath `root`, as paths relative to `root`.
    ///
    /// Fails when `root` itself cannot be read.
    fn list_files(&self, root: &Path, options: &ListOptions) -> Result<Vec<PathBuf>>;

    /// Canonicalize a path
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// Join paths
    fn join(&self, base: &Path, path: &str) -> PathBuf {
        base.join(path)
    }
}

/// True when any component of a relative path is a pruned directory.
pub(crate) fn is_pruned(relative: &Path) -> bool {
    relative.components().any(|c| {
        c.as_os_str()
            .to_str()
            .is_some_and(|name| PRUNED_DIRS.contains(&name))
    })
}
