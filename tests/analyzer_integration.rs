//! Integration tests for the project analyzer
//!
//! Each test builds a project tree on disk and runs the full inspection:
//! listing, manifest loading, classification and Dockerfile rendering.

use nodepack::stack::{FrameworkId, PackageManagerId, DEFAULT_NODE_VERSION};
use nodepack::{
    AnalysisError, AnalyzerConfig, GenerateError, Inspection, ProjectAnalyzer, StartCommandPolicy,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn project(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (path, content) in files {
        write(temp_dir.path(), path, content);
    }
    temp_dir
}

fn inspect(dir: &TempDir) -> Inspection {
    ProjectAnalyzer::new().inspect(dir.path()).unwrap()
}

fn npm_start_analyzer() -> ProjectAnalyzer {
    ProjectAnalyzer::with_config(AnalyzerConfig {
        start_policy: StartCommandPolicy::NpmStart,
        ..Default::default()
    })
}

#[test]
fn test_react_yarn_project_end_to_end() {
    let dir = project(&[
        (
            "package.json",
            r#"{"dependencies":{"react":"^18.0.0"},"scripts":{"start":"node server.js"}}"#,
        ),
        ("yarn.lock", "# yarn lockfile v1\n"),
        (".nvmrc", "16"),
    ]);

    let inspection = inspect(&dir);
    let c = &inspection.classification;

    assert_eq!(c.framework, FrameworkId::React);
    assert_eq!(c.package_manager, PackageManagerId::Yarn);
    assert_eq!(c.runtime_version, "16");
    assert_eq!(c.build_command.as_deref(), Some("react-scripts build"));
    assert_eq!(c.start_command.as_deref(), Some("node server.js"));

    assert_eq!(
        inspection.generated_artifact,
        [
            "FROM node:16-alpine",
            "WORKDIR /app",
            "COPY package* ./",
            "RUN yarn install --frozen-lockfile",
            "COPY . .",
            "RUN react-scripts build",
            "EXPOSE 8080",
            r#"CMD ["node","server.js"]"#,
        ]
        .join("\n")
    );
}

#[test]
fn test_empty_project_end_to_end() {
    let dir = TempDir::new().unwrap();

    let c = ProjectAnalyzer::new().classify(dir.path()).unwrap();
    assert_eq!(c.framework, FrameworkId::Unknown);
    assert_eq!(c.package_manager, PackageManagerId::Npm);
    assert_eq!(c.runtime_version, DEFAULT_NODE_VERSION);
    assert_eq!(c.build_command, None);
    assert_eq!(c.start_command, None);

    let err = ProjectAnalyzer::new().inspect(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Generate(GenerateError::MissingStartCommand {
            framework: FrameworkId::Unknown
        })
    ));

    let inspection = npm_start_analyzer().inspect(dir.path()).unwrap();
    assert_eq!(
        inspection.generated_artifact,
        [
            "FROM node:18-alpine",
            "WORKDIR /app",
            "COPY package* ./",
            "RUN npm install",
            "COPY . .",
            "EXPOSE 8080",
            r#"CMD ["npm", "start"]"#,
        ]
        .join("\n")
    );
}

#[test]
fn test_nuxt_marker_beats_dependencies() {
    let dir = project(&[
        ("nuxt.config.js", "export default {}"),
        ("next.config.js", "module.exports = {}"),
        (
            "package.json",
            r#"{"dependencies":{"react":"^18","vue":"^3","express":"^4"}}"#,
        ),
    ]);

    let inspection = inspect(&dir);
    assert_eq!(inspection.classification.framework, FrameworkId::Nuxt);
    assert!(inspection
        .generated_artifact
        .ends_with("EXPOSE 3000\nENV HOST=0.0.0.0\nCMD [\"npm\", \"start\"]"));
}

#[test]
fn test_next_config_beats_react_dependency() {
    let dir = project(&[
        ("next.config.js", "module.exports = {}"),
        ("package.json", r#"{"dependencies":{"react":"^18"}}"#),
    ]);

    let inspection = inspect(&dir);
    assert_eq!(inspection.classification.framework, FrameworkId::Next);
    assert_eq!(
        inspection.classification.build_command.as_deref(),
        Some("next build")
    );
    assert!(inspection
        .generated_artifact
        .ends_with("EXPOSE 3000\nCMD [\"npm\", \"start\"]"));
}

#[test]
fn test_vue_marker_with_explicit_build_script() {
    let dir = project(&[
        ("vue.config.js", "module.exports = {}"),
        (
            "package.json",
            r#"{"scripts":{"build":"vite build","start":"serve -s dist"}}"#,
        ),
        ("pnpm-lock.yaml", "lockfileVersion: 6.0\n"),
    ]);

    let inspection = inspect(&dir);
    let c = &inspection.classification;

    assert_eq!(c.framework, FrameworkId::Vue);
    assert_eq!(c.package_manager, PackageManagerId::Pnpm);
    assert_eq!(c.build_command.as_deref(), Some("vite build"));
    assert!(inspection
        .generated_artifact
        .contains("RUN pnpm install --frozen-lockfile\n"));
    assert!(inspection
        .generated_artifact
        .ends_with(r#"CMD ["serve","-s","dist"]"#));
}

#[test]
fn test_express_project_has_no_build_step() {
    let dir = project(&[
        (
            "package.json",
            r#"{"dependencies":{"express":"^4.18.0"},"scripts":{"start":"node index.js"},"engines":{"node":"^20.3.0"}}"#,
        ),
        ("package-lock.json", "{}"),
    ]);

    let inspection = inspect(&dir);
    let c = &inspection.classification;

    assert_eq!(c.framework, FrameworkId::Node);
    assert_eq!(c.package_manager, PackageManagerId::Npm);
    assert_eq!(c.runtime_version, "20.3.0");
    assert_eq!(c.build_command, None);
    assert!(inspection.generated_artifact.starts_with("FROM node:20.3.0-alpine\n"));
    assert!(!inspection.generated_artifact.contains("RUN null"));
    assert!(!inspection.generated_artifact.ends_with('\n'));
}

#[test]
fn test_pnpm_beats_yarn() {
    let dir = project(&[
        ("pnpm-lock.yaml", ""),
        ("yarn.lock", ""),
        ("package.json", r#"{"scripts":{"start":"node ."}}"#),
    ]);

    assert_eq!(
        inspect(&dir).classification.package_manager,
        PackageManagerId::Pnpm
    );
}

#[test]
fn test_nested_marker_file_is_not_detected() {
    let dir = project(&[
        ("packages/web/next.config.js", "module.exports = {}"),
        ("package.json", r#"{"scripts":{"start":"node ."}}"#),
    ]);

    assert_eq!(inspect(&dir).classification.framework, FrameworkId::Unknown);
}

#[test]
fn test_node_modules_contents_ignored() {
    let dir = project(&[
        ("node_modules/nuxt/nuxt.config.js", ""),
        ("node_modules/.pnpm/pnpm-lock.yaml", ""),
        ("package.json", r#"{"scripts":{"start":"node ."}}"#),
    ]);

    let c = inspect(&dir).classification;
    assert_eq!(c.framework, FrameworkId::Unknown);
    assert_eq!(c.package_manager, PackageManagerId::Npm);
}

#[test]
fn test_nvmrc_whitespace_trimmed() {
    let dir = project(&[
        (".nvmrc", "20.1.0\n"),
        ("package.json", r#"{"engines":{"node":"^18.0.0"},"scripts":{"start":"node ."}}"#),
    ]);

    assert_eq!(inspect(&dir).classification.runtime_version, "20.1.0");
}

#[test]
fn test_engines_tilde_preserved() {
    let dir = project(&[(
        "package.json",
        r#"{"engines":{"node":"~18.0.0"},"scripts":{"start":"node ."}}"#,
    )]);

    let inspection = inspect(&dir);
    assert_eq!(inspection.classification.runtime_version, "~18.0.0");
    assert!(inspection
        .generated_artifact
        .starts_with("FROM node:~18.0.0-alpine"));
}

#[test]
fn test_empty_engines_falls_back_to_default() {
    let dir = project(&[(
        "package.json",
        r#"{"engines":{"node":""},"scripts":{"start":"node s.js"}}"#,
    )]);

    let inspection = inspect(&dir);
    assert_eq!(
        inspection.classification.runtime_version,
        DEFAULT_NODE_VERSION
    );
    assert!(inspection
        .generated_artifact
        .starts_with("FROM node:18-alpine\n"));
}

#[test]
fn test_manifest_with_byte_order_mark() {
    let dir = project(&[(
        "package.json",
        "\u{FEFF}{\"dependencies\":{\"react\":\"^18\"},\"scripts\":{\"start\":\"node s.js\"}}",
    )]);

    let inspection = inspect(&dir);
    assert_eq!(inspection.classification.framework, FrameworkId::React);
    assert_eq!(
        inspection.classification.start_command.as_deref(),
        Some("node s.js")
    );
    assert!(inspection.warnings.is_empty());
}

#[test]
fn test_falsy_dependency_is_not_a_signal() {
    let dir = project(&[(
        "package.json",
        r#"{"dependencies":{"react":"","express":false},"scripts":{"start":"node s.js"}}"#,
    )]);

    assert_eq!(inspect(&dir).classification.framework, FrameworkId::Unknown);
}

#[cfg(unix)]
#[test]
fn test_symlinked_marker_is_detected() {
    let dir = project(&[
        ("config/next.config.js", "module.exports = {}\n"),
        ("config/yarn.lock", ""),
        ("package.json", r#"{"scripts":{"start":"next start"}}"#),
    ]);
    std::os::unix::fs::symlink("config/next.config.js", dir.path().join("next.config.js")).unwrap();
    std::os::unix::fs::symlink("config/yarn.lock", dir.path().join("yarn.lock")).unwrap();

    let c = inspect(&dir).classification;
    assert_eq!(c.framework, FrameworkId::Next);
    assert_eq!(c.package_manager, PackageManagerId::Yarn);
}

#[test]
fn test_inspection_is_idempotent() {
    let dir = project(&[
        ("package.json", r#"{"dependencies":{"vue":"^3"},"scripts":{"start":"node ."}}"#),
        ("yarn.lock", ""),
    ]);

    let analyzer = ProjectAnalyzer::new();
    let first = analyzer.inspect(dir.path()).unwrap();
    let second = analyzer.inspect(dir.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_malformed_manifest_surfaces_warning() {
    let dir = project(&[
        ("package.json", "{ not json"),
        ("nuxt.config.ts", "export default {}"),
    ]);

    let inspection = inspect(&dir);
    assert_eq!(inspection.classification.framework, FrameworkId::Nuxt);
    assert_eq!(
        inspection.classification.runtime_version,
        DEFAULT_NODE_VERSION
    );
    assert_eq!(inspection.warnings.len(), 1);
    assert!(inspection.warnings[0].contains("package.json"));
}

#[test]
fn test_json_shape() {
    let dir = project(&[
        ("package.json", r#"{"dependencies":{"express":"^4"},"scripts":{"start":"node app.js"}}"#),
    ]);

    let value = serde_json::to_value(inspect(&dir)).unwrap();
    assert_eq!(value["framework"], "node");
    assert_eq!(value["packageManager"], "npm");
    assert_eq!(value["runtimeVersion"], "18");
    assert!(value["buildCommand"].is_null());
    assert_eq!(value["startCommand"], "node app.js");
    assert!(value["generatedArtifact"].is_string());
    assert!(value.get("warnings").is_none());
}

#[test]
fn test_missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = ProjectAnalyzer::new().inspect(&missing).unwrap_err();
    assert!(matches!(err, AnalysisError::PathNotFound(_)));
}

#[test]
fn test_parallel_inspections() {
    let dirs: Vec<TempDir> = (0..4)
        .map(|i| {
            project(&[(
                "package.json",
                format!(
                    r#"{{"engines":{{"node":"^{}.0.0"}},"scripts":{{"start":"node ."}}}}"#,
                    16 + i
                )
                .as_str(),
            )])
        })
        .collect();

    let analyzer = std::sync::Arc::new(ProjectAnalyzer::new());
    let handles: Vec<_> = dirs
        .iter()
        .map(|dir| {
            let analyzer = analyzer.clone();
            let root = dir.path().to_path_buf();
            std::thread::spawn(move || analyzer.inspect(&root).unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let inspection = handle.join().unwrap();
        assert_eq!(
            inspection.classification.runtime_version,
            format!("{}.0.0", 16 + i)
        );
    }
}
