//! Clausewise Server
//!
//! HTTP surface for contract analysis: PDF upload, question answering and a
//! health check, restricted by CORS to a single front-end origin.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use axum::{
    extract::{DefaultBodyLimit, Request},
    middleware::{self, Next},
    response::Response,
    Router as AxumRouter,
};
use clausewise_analyzer::ContractAnalyzer;
use clausewise_domain::CompletionProvider;
use clausewise_llm::{LlmError, OpenAiProvider};
use config::{ConfigError, ServerConfig};
use handlers::{create_router, AppState};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Completion client could not be created
    #[error("Failed to create LLM client: {0}")]
    Llm(#[from] LlmError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the full application: routes, CORS, upload limit and request spans
pub fn build_app<P: CompletionProvider + 'static>(
    analyzer: ContractAnalyzer<P>,
    config: &ServerConfig,
) -> Result<AxumRouter, ServerError> {
    // Credentials rule out wildcards, so methods and headers are mirrored.
    // Listed origins are only echoed to requests that send that origin.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([config.origin_header()?]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    Ok(create_router(AppState::new(analyzer))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors)
        .layer(middleware::from_fn(request_span)))
}

/// Wrap each request in a span carrying a fresh request id
async fn request_span(request: Request, next: Next) -> Response {
    let request_id = Uuid::now_v7();
    let span = info_span!(
        "request",
        id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    async move {
        let started = Instant::now();
        let response = next.run(request).await;
        info!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request finished"
        );
        response
    }
    .instrument(span)
    .await
}

/// Start the HTTP server
///
/// Builds the completion client and analyzer once, then serves until the
/// process receives Ctrl-C.
pub async fn start_server(config: ServerConfig, api_key: String) -> Result<(), ServerError> {
    config.validate()?;

    info!("Starting Clausewise server");
    info!("Bind address: {}", config.bind_addr());
    info!("Allowed origin: {}", config.allowed_origin);
    info!("Model: {}", config.analyzer.model);

    let provider = OpenAiProvider::new(api_key)?
        .with_api_base(config.api_base.clone())
        .with_timeout(Duration::from_secs(config.request_timeout_secs));

    let analyzer = ContractAnalyzer::new(provider, config.analyzer.clone());
    let app = build_app(analyzer, &config)?;

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
