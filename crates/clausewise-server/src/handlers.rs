//! HTTP request handlers for the analysis service.
//!
//! Implements contract upload, question answering and health check
//! endpoints using axum.

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use clausewise_analyzer::{AnalyzerError, AskRequest, ContractAnalyzer};
use clausewise_domain::{AnalysisResult, CompletionProvider};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Multipart field name the front-end uses for the document
pub const UPLOAD_FIELD: &str = "file";

/// Shared application state
pub struct AppState<P: CompletionProvider> {
    /// Analyzer shared by all requests
    pub analyzer: Arc<ContractAnalyzer<P>>,
}

impl<P: CompletionProvider> AppState<P> {
    /// Wrap an analyzer for sharing across handlers
    pub fn new(analyzer: ContractAnalyzer<P>) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

// Manual impl: derive would require `P: Clone`
impl<P: CompletionProvider> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
        }
    }
}

/// Answer to a contract question
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    /// Raw model answer
    pub answer: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Always "ok" while the process serves requests
    pub status: String,
    /// Model used for completions
    pub model: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub detail: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Analysis failed
    Analyzer(AnalyzerError),
    /// The upload could not be read
    BadUpload(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Analyzer(e) if e.is_client_error() => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Analyzer(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::BadUpload(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        if status.is_server_error() {
            error!("Request failed: {}", message);
        } else {
            warn!("Request rejected: {}", message);
        }

        let body = Json(ErrorResponse { detail: message });
        (status, body).into_response()
    }
}

impl From<AnalyzerError> for AppError {
    fn from(e: AnalyzerError) -> Self {
        AppError::Analyzer(e)
    }
}

/// POST /analyze - Analyze an uploaded PDF contract
async fn analyze_contract<P: CompletionProvider + 'static>(
    State(state): State<AppState<P>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let multipart = multipart.map_err(|e| AppError::BadUpload(e.body_text()))?;
    let document = read_upload(multipart).await?;

    let result = state.analyzer.analyze(document).await?;

    Ok(Json(result))
}

/// Pull the document bytes out of a multipart body
///
/// Takes the field named `file`, or failing that the first field that
/// carries a filename.
async fn read_upload(mut multipart: Multipart) -> Result<Vec<u8>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadUpload(e.body_text()))?
    {
        let is_file = field.name() == Some(UPLOAD_FIELD) || field.file_name().is_some();
        if !is_file {
            warn!("Ignoring multipart field {:?}", field.name());
            continue;
        }

        let file_name = field.file_name().unwrap_or("<unnamed>").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadUpload(e.body_text()))?;

        info!("Received upload {} ({} bytes)", file_name, bytes.len());
        return Ok(bytes.to_vec());
    }

    Err(AppError::BadUpload("No file uploaded".to_string()))
}

/// POST /ask - Answer a question about contract text
///
/// A body that is not valid JSON is treated like one with missing fields.
async fn ask_question<P: CompletionProvider + 'static>(
    State(state): State<AppState<P>>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, AppError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Unreadable /ask body: {}", rejection.body_text());
            AskRequest::default()
        }
    };

    let answer = state.analyzer.ask(request).await?;

    Ok(Json(AskResponse { answer }))
}

/// GET /health - Liveness check
async fn health_check<P: CompletionProvider + 'static>(
    State(state): State<AppState<P>>,
) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        model: state.analyzer.config().model.clone(),
    })
}

/// Create the axum router with all routes
pub fn create_router<P: CompletionProvider + 'static>(state: AppState<P>) -> AxumRouter {
    AxumRouter::new()
        .route("/analyze", post(analyze_contract::<P>))
        .route("/ask", post(ask_question::<P>))
        .route("/health", get(health_check::<P>))
        .with_state(state)
}
