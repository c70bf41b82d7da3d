use crate::stack::{FrameworkId, PackageManagerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything inferred about a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub framework: FrameworkId,
    pub package_manager: PackageManagerId,
    pub runtime_version: String,
    pub build_command: Option<String>,
    pub start_command: Option<String>,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Framework: {} ({})", self.framework, self.framework.name())?;
        writeln!(f, "Package manager: {}", self.package_manager)?;
        writeln!(f, "Node version: {}", self.runtime_version)?;
        writeln!(
            f,
            "Build command: {}",
            self.build_command.as_deref().unwrap_or("(none)")
        )?;
        write!(
            f,
            "Start command: {}",
            self.start_command.as_deref().unwrap_or("(none)")
        )
    }
}

/// Result of [`inspect`](crate::ProjectAnalyzer::inspect): the classification
/// plus the generated Dockerfile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inspection {
    #[serde(flatten)]
    pub classification: Classification,
    pub generated_artifact: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Inspection {
    pub fn new(classification: Classification, generated_artifact: String) -> Self {
        Self {
            classification,
            generated_artifact,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
