use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{error, warn};

use crate::errors::ServiceError;
use crate::transliteration::ErrorResponse;

/// HTTP face of a `ServiceError`
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl ApiError {
    /// Status code for each error kind
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::ContentExtraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::UnparseableReply { .. } => StatusCode::BAD_REQUEST,
            ServiceError::Oracle(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.0.to_string();

        match &self.0 {
            ServiceError::Oracle(_) => error!("Request failed [{}]: {}", self.0.kind(), message),
            _ => warn!("Request rejected [{}]: {}", self.0.kind(), message),
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
