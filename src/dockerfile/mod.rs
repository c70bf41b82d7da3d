//! Dockerfile rendering
//!
//! The generator is a pure function of a [`Classification`]: fixed segments,
//! a package-manager install line, and a per-framework [`Trailer`]. Commands
//! are emitted verbatim with no shell escaping.

mod trailer;

pub use trailer::{trailer_for, StartDirective, Trailer, NPM_START};

use crate::detection::types::Classification;
use crate::stack::{FrameworkId, NodeRuntime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error(
        "No start command for framework '{framework}': declare scripts.start in package.json \
         or use the npm-start start policy"
    )]
    MissingStartCommand { framework: FrameworkId },
}

/// What to do when the trailer needs a start command and there is none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartCommandPolicy {
    /// Fail with [`GenerateError::MissingStartCommand`]
    #[default]
    Reject,
    /// Fall back to `CMD ["npm", "start"]`
    NpmStart,
}

impl StartCommandPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            StartCommandPolicy::Reject => "reject",
            StartCommandPolicy::NpmStart => "npm-start",
        }
    }
}

impl fmt::Display for StartCommandPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StartCommandPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reject" => Ok(StartCommandPolicy::Reject),
            "npm-start" => Ok(StartCommandPolicy::NpmStart),
            other => Err(format!(
                "Invalid start policy: {}. Valid options: reject, npm-start",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DockerfileGenerator {
    runtime: NodeRuntime,
    policy: StartCommandPolicy,
}

impl DockerfileGenerator {
    pub fn new(policy: StartCommandPolicy) -> Self {
        Self {
            runtime: NodeRuntime::new(),
            policy,
        }
    }

    pub fn generate(&self, classification: &Classification) -> Result<String, GenerateError> {
        let mut lines = vec![
            format!(
                "FROM {}",
                self.runtime
                    .runtime_base_image(&classification.runtime_version)
            ),
            "WORKDIR /app".to_string(),
            "COPY package* ./".to_string(),
            format!("RUN {}", classification.package_manager.install_command()),
            "COPY . .".to_string(),
        ];

        if let Some(build) = &classification.build_command {
            lines.push(format!("RUN {}", build));
        }

        let trailer = trailer_for(classification.framework);
        lines.push(format!("EXPOSE {}", trailer.port));
        for env in trailer.env {
            lines.push(format!("ENV {}", env));
        }
        lines.push(self.start_directive(trailer, classification)?);

        Ok(lines.join("\n"))
    }

    fn start_directive(
        &self,
        trailer: &Trailer,
        classification: &Classification,
    ) -> Result<String, GenerateError> {
        match trailer.start {
            StartDirective::Fixed(directive) => Ok(directive.to_string()),
            StartDirective::FromStartCommand => match (&classification.start_command, self.policy) {
                (Some(start), _) => Ok(format!("CMD {}", exec_form(start))),
                (None, StartCommandPolicy::NpmStart) => Ok(NPM_START.to_string()),
                (None, StartCommandPolicy::Reject) => Err(GenerateError::MissingStartCommand {
                    framework: classification.framework,
                }),
            },
        }
    }
}

/// Splits on single spaces and renders a compact JSON array.
/// Consecutive spaces yield empty arguments.
pub fn exec_form(command: &str) -> String {
    let args: Vec<&str> = command.split(' ').collect();
    serde_json::to_string(&args).unwrap_or_else(|_| "[]".to_string())
}
