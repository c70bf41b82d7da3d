use super::{is_pruned, FileSystem, ListOptions, PRUNED_DIRS};
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).context(format!("Failed to read file {:?}", path))
    }

    fn list_files(&self, root: &Path, options: &ListOptions) -> Result<Vec<PathBuf>> {
        // The walker only reports unreadable roots as per-entry errors.
        fs::read_dir(root).context(format!("Failed to read directory {:?}", root))?;

        let mut files = Vec::new();

        // Plain recursive listing: gitignore and hidden-file rules do not apply.
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .max_depth(options.max_depth)
            .filter_entry(|entry| {
                !(entry.depth() > 0
                    && entry.file_type().is_some_and(|t| t.is_dir())
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| PRUNED_DIRS.contains(&name)))
            })
            .build();

        for result in walker {
            let entry = match result {
                Ok(e) => e,
                Err(err) => {
                    warn!(error = %err, "Failed to read directory entry");
                    continue;
                }
            };

            // Links to files count as files; directory links are not followed.
            let is_file = entry
                .file_type()
                .is_some_and(|t| t.is_file() || (t.is_symlink() && entry.path().is_file()));
            if !is_file {
                continue;
            }

            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            if is_pruned(relative) {
                continue;
            }
            files.push(relative.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        path.canonicalize()
            .context(format!("Failed to canonicalize path {:?}", path))
    }
}
