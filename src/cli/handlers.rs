use crate::cli::commands::{AnalyzeArgs, ServeArgs};
use crate::cli::output::OutputFormatter;
use crate::config::NodepackConfig;
use crate::detection::ProjectAnalyzer;
use crate::fs::{FileSystem, RealFileSystem};
use crate::server;
use anyhow::{Context, Result};
use std::fs;
use std::sync::Arc;
use tracing::{debug, info};

/// Runs `nodepack analyze` and returns the process exit code
pub fn handle_analyze(args: &AnalyzeArgs, config: &NodepackConfig) -> i32 {
    match run_analyze(args, config) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn run_analyze(args: &AnalyzeArgs, config: &NodepackConfig) -> Result<()> {
    let mut analyzer_config = config.analyzer_config();
    if let Some(policy) = args.start_policy {
        analyzer_config.start_policy = policy.into();
    }

    let filesystem = Arc::new(RealFileSystem::new());
    let root = filesystem
        .canonicalize(&args.path)
        .with_context(|| format!("Cannot access project path {}", args.path.display()))?;
    debug!(root = %root.display(), ?analyzer_config, "Starting analysis");

    let inspection = ProjectAnalyzer::with_filesystem(filesystem, analyzer_config).inspect(&root)?;

    let mut output = OutputFormatter::new(args.format.into()).format(&inspection)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!(path = %path.display(), "Wrote inspection output");
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Runs `nodepack serve` until shutdown and returns the process exit code
pub async fn handle_serve(args: &ServeArgs, mut config: NodepackConfig) -> i32 {
    if let Some(bind) = &args.bind {
        config.bind = bind.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return 1;
    }

    match server::serve(&config).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}
