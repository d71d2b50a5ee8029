/*!
 * Tests for error types and their HTTP mapping
 */

use axum::http::StatusCode;
use axum::response::IntoResponse;

use translitner::errors::{OracleError, ServiceError};
use translitner::server::ApiError;

#[test]
fn test_oracleError_authenticationError_shouldDisplayCorrectly() {
    let error = OracleError::AuthenticationError("Invalid API key".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Authentication error"));
    assert!(display.contains("Invalid API key"));
}

#[test]
fn test_oracleError_emptyResponse_shouldDisplayReason() {
    let error = OracleError::EmptyResponse("SAFETY".to_string());
    assert!(error.to_string().contains("SAFETY"));
}

#[test]
fn test_serviceError_kinds_shouldBeDistinct() {
    let kinds = [
        ServiceError::validation("x").kind(),
        ServiceError::ContentExtraction("x".into()).kind(),
        ServiceError::Oracle(OracleError::RequestFailed("x".into())).kind(),
        ServiceError::UnparseableReply { reply: "x".into() }.kind(),
    ];

    for (i, a) in kinds.iter().enumerate() {
        for b in kinds.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_apiError_fromOracleFailure_shouldBeBadGateway() {
    let error: ServiceError = OracleError::ApiError {
        status_code: 503,
        message: "overloaded".to_string(),
    }
    .into();

    let response = ApiError::from(error).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn test_apiError_fromContentExtraction_shouldBeUnprocessable() {
    let response = ApiError::from(ServiceError::ContentExtraction("bad zip".into())).into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
