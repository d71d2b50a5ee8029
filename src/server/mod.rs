/*!
 * HTTP surface of the service.
 *
 * Routes are thin: each handler pulls its input out of the request, hands
 * it to the `TransliterationService` and converts failures into `ApiError`.
 */

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use log::info;
use tower_http::cors::CorsLayer;

use crate::app_config::Config;
use crate::transliteration::TransliterationService;

pub mod error;
pub mod handlers;

pub use error::ApiError;

/// Read-only state shared by every request
#[derive(Debug)]
pub struct AppState {
    pub service: TransliterationService,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(service: TransliterationService, max_upload_bytes: usize) -> Self {
        Self { service, max_upload_bytes }
    }
}

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    let max_upload_bytes = state.max_upload_bytes;

    Router::new()
        .route("/", post(handlers::welcome))
        .route("/health", get(handlers::health))
        .route("/transliterate/text", post(handlers::transliterate_text))
        .route("/transliterate/file", post(handlers::transliterate_file))
        .route("/ner", post(handlers::extract_entities))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(config: &Config, service: TransliterationService) -> Result<()> {
    let addr = config.socket_addr()?;
    info!(
        "Transliterating {} -> {} with model {}",
        service.source_language(),
        service.target_language(),
        service.model()
    );

    let app = build_router(Arc::new(AppState::new(service, config.max_upload_bytes)));

    let listener = tokio::net::TcpListener::bind(addr).await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown requested");
    }
}
