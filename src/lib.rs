//! nodepack - Node.js project inspector and Dockerfile generator
//!
//! Given a project directory, nodepack infers the web framework, package
//! manager, Node.js version and build/start commands, then renders a
//! Dockerfile for the project.
//!
//! # Core Concepts
//!
//! - **FileSet**: the project's relative file paths, matched exactly
//! - **Manifest**: the parsed `package.json`, read lazily field by field
//! - **Classification**: framework, package manager, Node.js version and commands
//! - **Inspection**: a classification plus the generated Dockerfile
//!
//! # Example Usage
//!
//! ```no_run
//! use nodepack::{AnalyzerConfig, ProjectAnalyzer, StartCommandPolicy};
//! use std::path::Path;
//!
//! let analyzer = ProjectAnalyzer::with_config(AnalyzerConfig {
//!     start_policy: StartCommandPolicy::NpmStart,
//!     ..Default::default()
//! });
//!
//! let inspection = analyzer.inspect(Path::new("./my-app"))?;
//! println!("{}", inspection.classification);
//! println!("{}", inspection.generated_artifact);
//! # Ok::<(), nodepack::AnalysisError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`stack`]: framework, package manager, runtime and command rules
//! - [`dockerfile`]: Dockerfile rendering
//! - [`detection`]: the analyzer that ties scanning and rules together
//! - [`server`]: HTTP service that clones and inspects repositories

pub mod cli;
pub mod config;
pub mod detection;
pub mod dockerfile;
pub mod fs;
pub mod server;
pub mod stack;
pub mod util;

pub use config::{ConfigError, NodepackConfig};
pub use detection::{inspect, AnalysisError, AnalyzerConfig, Classification, Inspection, ProjectAnalyzer};
pub use dockerfile::{DockerfileGenerator, GenerateError, StartCommandPolicy};
pub use stack::{FrameworkId, PackageManagerId};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
