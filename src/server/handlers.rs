/*!
 * Request handlers.
 *
 * Each handler extracts its input, calls the `TransliterationService` and
 * lets `ApiError` turn failures into a status code and `{error}` body.
 * Uploads larger than the configured limit are refused with a message
 * naming the limit.
 */

use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::FormRejection,
        Multipart, State,
    },
    http::StatusCode,
    Form, Json,
};
use bytes::Bytes;
use log::{debug, info};

use crate::document::is_docx_content_type;
use crate::errors::ServiceError;
use crate::transliteration::{
    HealthResponse, NerResponse, TextForm, TransliterationResponse, WelcomeResponse,
};
use super::error::ApiError;
use super::AppState;

/// Multipart field holding the uploaded document
const FILE_FIELD: &str = "file";

pub const WELCOME_MESSAGE: &str = "Welcome to the AI Transliteration and NER API!";

/// `POST /`
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// `GET /health`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.service.model().to_string(),
    })
}

/// `POST /transliterate/text`
pub async fn transliterate_text(
    State(state): State<Arc<AppState>>,
    form: Result<Form<TextForm>, FormRejection>,
) -> Result<Json<TransliterationResponse>, ApiError> {
    let Form(form) = form.map_err(|e| ServiceError::validation(e.body_text()))?;
    let text = form.text.unwrap_or_default();
    info!("Transliterating text ({} chars)", text.chars().count());

    let response = state.service.transliterate_text(&text).await?;
    Ok(Json(response))
}

/// `POST /transliterate/file`
pub async fn transliterate_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<TransliterationResponse>, ApiError> {
    let bytes = read_docx_upload(multipart, state.max_upload_bytes).await?;
    info!("Transliterating uploaded document ({} bytes)", bytes.len());

    let response = state.service.transliterate_document(&bytes).await?;
    Ok(Json(response))
}

/// `POST /ner`
pub async fn extract_entities(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<NerResponse>, ApiError> {
    let bytes = read_docx_upload(multipart, state.max_upload_bytes).await?;
    info!("Extracting entities from uploaded document ({} bytes)", bytes.len());

    let response = state.service.extract_entities(&bytes).await?;
    info!("Found {} entities", response.entities.len());
    Ok(Json(response))
}

/// Find the `file` field and return its body.
///
/// The declared content type is checked before any of the field body is
/// read, so a wrong upload is rejected without consuming it.
async fn read_docx_upload(
    multipart: Result<Multipart, MultipartRejection>,
    max_upload_bytes: usize,
) -> Result<Bytes, ServiceError> {
    let mut multipart = multipart.map_err(|e| ServiceError::validation(e.body_text()))?;

    while let Some(field) = multipart.next_field().await
        .map_err(|e| upload_error(e, "Invalid multipart body", max_upload_bytes))?
    {
        if field.name() != Some(FILE_FIELD) {
            debug!("Skipping multipart field {:?}", field.name());
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !is_docx_content_type(&content_type) {
            debug!("Rejected upload with content type '{}'", content_type);
            return Err(ServiceError::validation("Invalid file type. Please upload a .docx file."));
        }

        return field.bytes().await
            .map_err(|e| upload_error(e, "Failed to read upload", max_upload_bytes));
    }

    Err(ServiceError::validation("Please provide a file."))
}

/// Convert a multipart read failure, naming the size limit when it was hit
fn upload_error(error: MultipartError, context: &str, max_upload_bytes: usize) -> ServiceError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        debug!("Upload body exceeds {} bytes", max_upload_bytes);
        return ServiceError::validation(upload_too_large_message(max_upload_bytes));
    }

    ServiceError::validation(format!("{}: {}", context, error.body_text()))
}

fn upload_too_large_message(max_upload_bytes: usize) -> String {
    format!("Upload exceeds the maximum size of {} bytes", max_upload_bytes)
}
