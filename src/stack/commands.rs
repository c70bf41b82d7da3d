use super::{FrameworkId, Manifest};
use serde::{Deserialize, Serialize};

/// Build and start commands for a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildCommands {
    pub build: Option<String>,
    pub start: Option<String>,
}

impl BuildCommands {
    /// Manifest scripts win. A missing build script falls back to the
    /// framework default; a missing start script stays `None`.
    pub fn resolve(framework: FrameworkId, manifest: Option<&Manifest>) -> Self {
        let build = manifest
            .and_then(Manifest::build_script)
            .or_else(|| framework.default_build_command())
            .map(str::to_string);
        let start = manifest.and_then(Manifest::start_script).map(str::to_string);

        Self { build, start }
    }
}
