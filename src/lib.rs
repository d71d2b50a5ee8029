/*!
 * # translitner - AI transliteration and named-entity API
 *
 * A small HTTP service that forwards text, typed or extracted from an
 * uploaded Word document, to a large-language-model service for:
 *
 * - script transliteration into a configured target script
 * - named-entity extraction, with each entity transliterated
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration value built once at startup
 * - `providers`: The `Oracle` trait and its implementations:
 *   - `providers::gemini`: Google Generative Language API client
 *   - `providers::mock`: Deterministic oracle for tests
 * - `document`: .docx text extraction
 * - `transliteration`: Prompting and reply parsing:
 *   - `transliteration::core`: The transliteration service
 *   - `transliteration::prompts`: Prompt templates
 *   - `transliteration::entities`: Entity reply parsing
 * - `server`: axum router, handlers and HTTP error mapping
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod document;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod server;
pub mod transliteration;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{OracleError, ServiceError};
pub use providers::{GeminiOracle, MockOracle, Oracle};
pub use server::{build_router, AppState};
pub use transliteration::TransliterationService;
