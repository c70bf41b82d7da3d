//! Node.js runtime version resolution

use super::Manifest;
use crate::fs::FileSystem;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// LTS major used when nothing in the project pins a version
pub const DEFAULT_NODE_VERSION: &str = "18";

/// Version-pin files at the project root, in priority order
pub const VERSION_PIN_FILES: &[&str] = &[".nvmrc", ".node-version"];

/// Where a resolved version came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VersionSource {
    PinFile,
    Engines,
    Default,
}

#[derive(Debug, Clone)]
pub struct NodeRuntime {
    default_version: String,
}

impl NodeRuntime {
    pub fn new() -> Self {
        Self::with_default_version(DEFAULT_NODE_VERSION)
    }

    pub fn with_default_version(version: impl Into<String>) -> Self {
        Self {
            default_version: version.into(),
        }
    }

    /// Resolves the Node.js version, consulting exactly one source:
    /// the first non-empty pin file, then `engines.node`, then the default.
    pub fn resolve_version(
        &self,
        fs: &dyn FileSystem,
        root: &Path,
        manifest: Option<&Manifest>,
    ) -> Result<(String, VersionSource)> {
        if let Some(version) = read_version_pin(fs, root)? {
            return Ok((version, VersionSource::PinFile));
        }

        if let Some(constraint) = manifest.and_then(Manifest::engines_node) {
            return Ok((
                strip_caret(constraint).to_string(),
                VersionSource::Engines,
            ));
        }

        Ok((self.default_version.clone(), VersionSource::Default))
    }

    pub fn runtime_base_image(&self, version: &str) -> String {
        format!("node:{}-alpine", version)
    }
}

impl Default for NodeRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// Removes a single leading `^`. Other operators and ranges pass through.
pub fn strip_caret(constraint: &str) -> &str {
    constraint.strip_prefix('^').unwrap_or(constraint)
}

fn read_version_pin(fs: &dyn FileSystem, root: &Path) -> Result<Option<String>> {
    for file_name in VERSION_PIN_FILES {
        let path = fs.join(root, file_name);
        if !fs.is_file(&path) {
            continue;
        }

        let content = fs.read_to_string(&path)?;
        let version = content.trim();
        if version.is_empty() {
            debug!(file = *file_name, "Skipping empty version pin file");
            continue;
        }

        debug!(file = *file_name, version, "Node version pinned");
        return Ok(Some(version.to_string()));
    }
    Ok(None)
}
