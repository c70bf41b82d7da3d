use crate::config::NodepackConfig;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CloneError {
    #[error("Failed to create scratch directory {path}: {source}")]
    Scratch { path: PathBuf, source: io::Error },

    #[error("Failed to run {program}: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("git clone of {url} failed: {stderr}")]
    Failed { url: String, stderr: String },
}

/// Per-request clone target, removed when dropped
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        match std::fs::remove_dir_all(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "Removed scratch directory"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to remove scratch directory"),
        }
    }
}

/// Shallow-clones repositories into uniquely named scratch directories
#[derive(Debug, Clone)]
pub struct GitCloner {
    program: String,
    scratch_root: PathBuf,
}

impl GitCloner {
    pub fn new(program: impl Into<String>, scratch_root: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            scratch_root: scratch_root.into(),
        }
    }

    pub fn from_config(config: &NodepackConfig) -> Self {
        Self::new(config.git_program.clone(), config.scratch_dir.clone())
    }

    pub fn scratch_root(&self) -> &Path {
        &self.scratch_root
    }

    /// Runs `git clone --depth 1 <url> <scratch>/<uuid>`.
    ///
    /// The returned [`ScratchDir`] owns the checkout. On failure any partial
    /// checkout is removed before returning.
    pub async fn clone_repository(&self, url: &str) -> Result<ScratchDir, CloneError> {
        tokio::fs::create_dir_all(&self.scratch_root)
            .await
            .map_err(|source| CloneError::Scratch {
                path: self.scratch_root.clone(),
                source,
            })?;

        let scratch = ScratchDir::new(self.scratch_root.join(Uuid::new_v4().to_string()));
        debug!(url, path = %scratch.path().display(), "Cloning repository");

        let output = Command::new(&self.program)
            .arg("clone")
            .arg("--depth")
            .arg("1")
            .arg("--")
            .arg(url)
            .arg(scratch.path())
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| CloneError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(CloneError::Failed {
                url: url.to_string(),
                stderr: if stderr.is_empty() {
                    output.status.to_string()
                } else {
                    stderr
                },
            });
        }

        Ok(scratch)
    }
}
