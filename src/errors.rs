/*!
 * Error types for the translitner application.
 *
 * This module contains custom error types for the oracle client and for the
 * transliteration service, using the thiserror crate for ergonomic error
 * definitions. The HTTP layer maps `ServiceError` kinds to status codes.
 */

use thiserror::Error;

/// Errors that can occur when calling the completion oracle
#[derive(Error, Debug)]
pub enum OracleError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// The API answered but produced no text
    #[error("Empty response from model: {0}")]
    EmptyResponse(String),
}

/// Errors produced while serving a transliteration or NER request.
///
/// This is a closed set: every failure a caller can observe is one of
/// these kinds, and each kind carries a human readable message.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Missing or invalid input supplied by the caller
    #[error("{0}")]
    Validation(String),

    /// The uploaded document could not be turned into text
    #[error("Could not read document: {0}")]
    ContentExtraction(String),

    /// The oracle call failed
    #[error("{0}")]
    Oracle(#[from] OracleError),

    /// The oracle answered with something that is not an entity map
    #[error("Could not extract json for NER entities : {reply}")]
    UnparseableReply {
        /// The raw reply, kept for diagnosis
        reply: String,
    },
}

impl ServiceError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Short, stable name of the error kind, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::ContentExtraction(_) => "content-extraction",
            Self::Oracle(_) => "oracle-failure",
            Self::UnparseableReply { .. } => "unparseable-reply",
        }
    }
}
