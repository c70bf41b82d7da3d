//! HTTP inspection service
//!
//! `POST /analyze` takes `{"repoUrl": "..."}`, shallow-clones the repository
//! into a scratch directory, inspects it and answers with the inspection JSON.
//! The scratch directory is removed whether the request succeeds or not.

pub mod clone;

pub use clone::{CloneError, GitCloner, ScratchDir};

use crate::config::NodepackConfig;
use crate::detection::{AnalysisError, Inspection, ProjectAnalyzer};
use anyhow::Context;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Missing repoUrl")]
    MissingRepoUrl,

    #[error(transparent)]
    Clone(#[from] CloneError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Inspection task failed: {0}")]
    Task(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::MissingRepoUrl => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Analyze request failed");
        } else {
            warn!(error = %self, "Rejected analyze request");
        }
        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub repo_url: Option<String>,
}

impl AnalyzeRequest {
    /// Parses a request body; unparsable bodies count as having no URL
    fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    fn repo_url(&self) -> Option<&str> {
        self.repo_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<ProjectAnalyzer>,
    cloner: GitCloner,
}

impl AppState {
    pub fn new(analyzer: ProjectAnalyzer, cloner: GitCloner) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            cloner,
        }
    }

    pub fn from_config(config: &NodepackConfig) -> Self {
        Self::new(
            ProjectAnalyzer::with_config(config.analyzer_config()),
            GitCloner::from_config(config),
        )
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Inspection>, ServerError> {
    let request = AnalyzeRequest::from_body(&body);
    let repo_url = request.repo_url().ok_or(ServerError::MissingRepoUrl)?;

    let scratch = state.cloner.clone_repository(repo_url).await?;
    let analyzer = Arc::clone(&state.analyzer);

    // The checkout is removed on the blocking pool.
    let inspection = tokio::task::spawn_blocking(move || inspect_checkout(&analyzer, scratch))
        .await
        .map_err(|e| ServerError::Task(e.to_string()))??;
    info!(
        repo_url,
        framework = %inspection.classification.framework,
        "Analyzed repository"
    );

    Ok(Json(inspection))
}

/// Inspects a checkout, then removes it
fn inspect_checkout(
    analyzer: &ProjectAnalyzer,
    scratch: ScratchDir,
) -> Result<Inspection, AnalysisError> {
    let result = analyzer.inspect(scratch.path());
    drop(scratch);
    result
}

/// Binds to the configured address and serves until Ctrl-C
pub async fn serve(config: &NodepackConfig) -> anyhow::Result<()> {
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    debug!(config = ?config.to_display_map(), "Effective configuration");
    info!(%address, scratch_dir = %config.scratch_dir.display(), "Listening");

    axum::serve(listener, router(AppState::from_config(config)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated unexpectedly")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
