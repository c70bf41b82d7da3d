use crate::detection::types::{Classification, Inspection};
use crate::dockerfile::{DockerfileGenerator, GenerateError, StartCommandPolicy};
use crate::fs::{FileSystem, ListOptions, RealFileSystem};
use crate::stack::{
    detect_framework, detect_package_manager, BuildCommands, FileSet, ManifestLoad, NodeRuntime,
    DEFAULT_NODE_VERSION,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),
    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Failed to scan {path}: {source:#}")]
    Scan {
        path: PathBuf,
        source: anyhow::Error,
    },
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub max_depth: Option<usize>,
    pub default_node_version: String,
    pub start_policy: StartCommandPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            default_node_version: DEFAULT_NODE_VERSION.to_string(),
            start_policy: StartCommandPolicy::default(),
        }
    }
}

/// Files and manifest read from a project root, once per inspection
struct ProjectSnapshot {
    files: FileSet,
    manifest: ManifestLoad,
}

/// Classifies Node.js projects and renders their Dockerfile.
///
/// Holds no per-project state; one analyzer can inspect many roots
/// concurrently.
pub struct ProjectAnalyzer {
    fs: Arc<dyn FileSystem>,
    config: AnalyzerConfig,
    runtime: NodeRuntime,
    generator: DockerfileGenerator,
}

impl ProjectAnalyzer {
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self::with_filesystem(Arc::new(RealFileSystem::new()), config)
    }

    pub fn with_filesystem(fs: Arc<dyn FileSystem>, config: AnalyzerConfig) -> Self {
        Self {
            runtime: NodeRuntime::with_default_version(config.default_node_version.clone()),
            generator: DockerfileGenerator::new(config.start_policy),
            fs,
            config,
        }
    }

    /// Classifies the project and generates its Dockerfile
    pub fn inspect(&self, root: &Path) -> Result<Inspection, AnalysisError> {
        let start = Instant::now();
        let snapshot = self.snapshot(root)?;
        let classification = self.classify_snapshot(root, &snapshot)?;
        let dockerfile = self.generator.generate(&classification)?;

        let warnings: Vec<String> = snapshot.manifest.warning().into_iter().collect();

        info!(
            root = %root.display(),
            framework = %classification.framework,
            package_manager = %classification.package_manager,
            node_version = %classification.runtime_version,
            warnings = warnings.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Inspection completed"
        );

        Ok(Inspection::new(classification, dockerfile).with_warnings(warnings))
    }

    /// Classifies the project without generating a Dockerfile
    pub fn classify(&self, root: &Path) -> Result<Classification, AnalysisError> {
        let snapshot = self.snapshot(root)?;
        self.classify_snapshot(root, &snapshot)
    }

    fn snapshot(&self, root: &Path) -> Result<ProjectSnapshot, AnalysisError> {
        if !self.fs.exists(root) {
            return Err(AnalysisError::PathNotFound(root.to_path_buf()));
        }
        if !self.fs.is_dir(root) {
            return Err(AnalysisError::NotADirectory(root.to_path_buf()));
        }

        let options = ListOptions::with_max_depth(self.config.max_depth);
        let files: FileSet = self
            .fs
            .list_files(root, &options)
            .map_err(|source| AnalysisError::Scan {
                path: root.to_path_buf(),
                source,
            })?
            .into_iter()
            .collect();
        debug!(root = %root.display(), files = files.len(), "Listed project files");

        let manifest = ManifestLoad::from_root(self.fs.as_ref(), root);
        if let Some(warning) = manifest.warning() {
            warn!(root = %root.display(), "{}", warning);
        }

        Ok(ProjectSnapshot { files, manifest })
    }

    fn classify_snapshot(
        &self,
        root: &Path,
        snapshot: &ProjectSnapshot,
    ) -> Result<Classification, AnalysisError> {
        let manifest = snapshot.manifest.manifest();

        let framework = detect_framework(&snapshot.files, manifest);
        let package_manager = detect_package_manager(&snapshot.files);
        let (runtime_version, version_source) = self
            .runtime
            .resolve_version(self.fs.as_ref(), root, manifest)
            .map_err(|source| AnalysisError::Scan {
                path: root.to_path_buf(),
                source,
            })?;
        let commands = BuildCommands::resolve(framework, manifest);

        debug!(
            %framework,
            %package_manager,
            %runtime_version,
            ?version_source,
            build = ?commands.build,
            start = ?commands.start,
            "Classified project"
        );

        Ok(Classification {
            framework,
            package_manager,
            runtime_version,
            build_command: commands.build,
            start_command: commands.start,
        })
    }
}

impl Default for ProjectAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Inspects `root` on the real file system with default settings
pub fn inspect(root: impl AsRef<Path>) -> Result<Inspection, AnalysisError> {
    ProjectAnalyzer::new().inspect(root.as_ref())
}
