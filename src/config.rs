//! Configuration management for nodepack
//!
//! Settings are loaded from environment variables with sensible defaults.
//! Command-line flags override individual values after loading.
//!
//! # Environment Variables
//!
//! - `NODEPACK_LOG_LEVEL`: Logging level - default: "info"
//! - `NODEPACK_DEFAULT_NODE_VERSION`: Node.js version used when the project pins none - default: "18"
//! - `NODEPACK_START_POLICY`: Behaviour when no start command exists (reject|npm-start) - default: "reject"
//! - `NODEPACK_MAX_DEPTH`: Maximum directory depth to list - default: unlimited
//! - `NODEPACK_SCRATCH_DIR`: Where the server clones repositories - default: system temp dir + "nodepack-scratch"
//! - `NODEPACK_BIND`: Server bind address - default: "0.0.0.0"
//! - `PORT`: Server port - default: "3000"
//! - `NODEPACK_GIT`: git executable used for cloning - default: "git"
//!
//! # Example
//!
//! ```no_run
//! use nodepack::NodepackConfig;
//!
//! let config = NodepackConfig::default();
//! config.validate().expect("Invalid configuration");
//! let analyzer = nodepack::ProjectAnalyzer::with_config(config.analyzer_config());
//! ```

use crate::detection::AnalyzerConfig;
use crate::dockerfile::StartCommandPolicy;
use crate::stack::DEFAULT_NODE_VERSION;
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_BIND: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_GIT: &str = "git";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodepackConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Node.js version when no pin file or engines constraint exists
    pub default_node_version: String,

    pub start_policy: StartCommandPolicy,

    /// Maximum directory depth to list (`None` = unlimited)
    pub max_depth: Option<usize>,

    /// Parent directory for per-request clones
    pub scratch_dir: PathBuf,

    pub bind: String,
    pub port: u16,

    /// git executable used by the server
    pub git_program: String,
}

impl Default for NodepackConfig {
    /// Loads from `NODEPACK_*` environment variables, falling back to
    /// defaults for missing or unparsable values. Use [`NodepackConfig::from_env`]
    /// to surface parse errors instead.
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|_| Self::builtin())
    }
}

impl NodepackConfig {
    /// Built-in defaults, ignoring the environment
    pub fn builtin() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            default_node_version: DEFAULT_NODE_VERSION.to_string(),
            start_policy: StartCommandPolicy::default(),
            max_depth: None,
            scratch_dir: env::temp_dir().join("nodepack-scratch"),
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
            git_program: DEFAULT_GIT.to_string(),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::builtin();

        if let Ok(level) = env::var("NODEPACK_LOG_LEVEL") {
            config.log_level = level.to_lowercase();
        }

        if let Ok(version) = env::var("NODEPACK_DEFAULT_NODE_VERSION") {
            config.default_node_version = version.trim().to_string();
        }

        if let Ok(policy) = env::var("NODEPACK_START_POLICY") {
            config.start_policy = policy.parse().map_err(|error| ConfigError::ParseError {
                field: "NODEPACK_START_POLICY".to_string(),
                error,
            })?;
        }

        if let Ok(depth) = env::var("NODEPACK_MAX_DEPTH") {
            config.max_depth =
                Some(depth.parse::<usize>().map_err(|e| ConfigError::ParseError {
                    field: "NODEPACK_MAX_DEPTH".to_string(),
                    error: e.to_string(),
                })?);
        }

        if let Ok(dir) = env::var("NODEPACK_SCRATCH_DIR") {
            config.scratch_dir = PathBuf::from(dir);
        }

        if let Ok(bind) = env::var("NODEPACK_BIND") {
            config.bind = bind;
        }

        if let Ok(port) = env::var("PORT") {
            config.port = port.parse::<u16>().map_err(|e| ConfigError::ParseError {
                field: "PORT".to_string(),
                error: e.to_string(),
            })?;
        }

        if let Ok(git) = env::var("NODEPACK_GIT") {
            config.git_program = git;
        }

        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` if any value is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        if self.default_node_version.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Default Node.js version cannot be empty".to_string(),
            ));
        }

        if self.max_depth == Some(0) {
            return Err(ConfigError::ValidationFailed(
                "Max depth must be at least 1".to_string(),
            ));
        }

        if self.git_program.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "git executable cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig {
            max_depth: self.max_depth,
            default_node_version: self.default_node_version.clone(),
            start_policy: self.start_policy,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert("log_level".to_string(), self.log_level.clone());
        map.insert(
            "default_node_version".to_string(),
            self.default_node_version.clone(),
        );
        map.insert("start_policy".to_string(), self.start_policy.to_string());
        map.insert(
            "max_depth".to_string(),
            self.max_depth
                .map(|d| d.to_string())
                .unwrap_or_else(|| "unlimited".to_string()),
        );
        map.insert(
            "scratch_dir".to_string(),
            self.scratch_dir.display().to_string(),
        );
        map.insert("bind".to_string(), self.bind_address());
        map.insert("git_program".to_string(), self.git_program.clone());

        map
    }
}

impl fmt::Display for NodepackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nodepack Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  Default Node Version: {}", self.default_node_version)?;
        writeln!(f, "  Start Policy: {}", self.start_policy)?;
        match self.max_depth {
            Some(depth) => writeln!(f, "  Max Depth: {}", depth)?,
            None => writeln!(f, "  Max Depth: unlimited")?,
        }
        writeln!(f, "  Scratch Dir: {}", self.scratch_dir.display())?;
        writeln!(f, "  Bind: {}", self.bind_address())?;
        writeln!(f, "  Git: {}", self.git_program)?;
        Ok(())
    }
}
