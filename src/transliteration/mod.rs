/*!
 * Transliteration service backed by a completion oracle.
 *
 * - `core`: the service: validation, prompting and reply shaping
 * - `prompts`: prompt templates
 * - `entities`: best-effort parsing of the entity reply
 * - `models`: request and response bodies
 */

// Re-export main types for easier usage
pub use self::core::TransliterationService;
pub use self::entities::parse_entity_reply;
pub use self::models::{
    EntityMap, ErrorResponse, HealthResponse, NerResponse, TextForm, TransliterationResponse,
    WelcomeResponse,
};
pub use self::prompts::{ner_prompt, transliteration_prompt, PromptTemplate};

// Submodules
pub mod core;
pub mod entities;
pub mod models;
pub mod prompts;
