//! Request and response bodies of the HTTP surface.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entities found by the oracle, keyed by their original spelling, in the
/// order the oracle listed them. Values are normally the transliterated
/// string but are kept exactly as the oracle wrote them.
pub type EntityMap = IndexMap<String, Value>;

/// Form body of the text transliteration endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextForm {
    #[serde(default)]
    pub text: Option<String>,
}

/// Successful transliteration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransliterationResponse {
    pub original_text: String,
    pub transliterated_text: String,
}

/// Successful entity extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NerResponse {
    pub entities: EntityMap,
}

/// Error payload returned for every failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub model: String,
}
