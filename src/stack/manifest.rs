//! `package.json` loading
//!
//! The manifest is kept as a raw [`serde_json::Value`] and queried lazily, so a
//! field of an unexpected type only hides that field instead of the whole
//! document.

use crate::fs::FileSystem;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

pub const MANIFEST_FILE: &str = "package.json";

/// Parsed `package.json`
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    document: Value,
}

impl Manifest {
    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    /// Parses manifest text, ignoring a leading byte order mark
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
        serde_json::from_str(content).map(Self::from_value)
    }

    /// True when `dependencies` has a truthy entry for `name`.
    ///
    /// `null`, `false`, `""` and `0` count as undeclared.
    pub fn has_dependency(&self, name: &str) -> bool {
        match &self.document["dependencies"][name] {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::String(s) => !s.is_empty(),
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// A `scripts` entry; empty strings count as undeclared
    pub fn script(&self, name: &str) -> Option<&str> {
        self.document["scripts"][name]
            .as_str()
            .filter(|s| !s.is_empty())
    }

    pub fn build_script(&self) -> Option<&str> {
        self.script("build")
    }

    pub fn start_script(&self) -> Option<&str> {
        self.script("start")
    }

    /// `engines.node` constraint, verbatim; empty counts as undeclared
    pub fn engines_node(&self) -> Option<&str> {
        self.document["engines"]["node"]
            .as_str()
            .filter(|s| !s.is_empty())
    }
}

/// Outcome of reading the manifest at a project root
#[derive(Debug, Clone, PartialEq)]
pub enum ManifestLoad {
    Loaded(Manifest),
    Absent,
    /// File exists but could not be read or parsed
    Malformed(String),
}

impl ManifestLoad {
    /// Reads `<root>/package.json`. Never fails: read and parse errors become
    /// [`ManifestLoad::Malformed`].
    pub fn from_root(fs: &dyn FileSystem, root: &Path) -> Self {
        let path = fs.join(root, MANIFEST_FILE);
        if !fs.is_file(&path) {
            debug!(path = %path.display(), "No manifest found");
            return ManifestLoad::Absent;
        }

        let content = match fs.read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read manifest");
                return ManifestLoad::Malformed(format!("{:#}", e));
            }
        };

        match Manifest::parse(&content) {
            Ok(manifest) => ManifestLoad::Loaded(manifest),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring malformed manifest");
                ManifestLoad::Malformed(e.to_string())
            }
        }
    }

    pub fn manifest(&self) -> Option<&Manifest> {
        match self {
            ManifestLoad::Loaded(manifest) => Some(manifest),
            ManifestLoad::Absent | ManifestLoad::Malformed(_) => None,
        }
    }

    /// Warning to surface for a malformed manifest
    pub fn warning(&self) -> Option<String> {
        match self {
            ManifestLoad::Malformed(reason) => Some(format!(
                "{} could not be parsed and was ignored: {}",
                MANIFEST_FILE, reason
            )),
            _ => None,
        }
    }
}
