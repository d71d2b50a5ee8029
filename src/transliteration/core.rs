/*!
 * Core transliteration service implementation.
 *
 * This module contains the TransliterationService struct, which turns
 * validated input into prompts, calls the oracle and shapes the reply into
 * typed responses.
 */

use anyhow::Result;
use log::debug;
use std::sync::Arc;

use crate::app_config::Config;
use crate::document;
use crate::errors::ServiceError;
use crate::providers::Oracle;
use super::entities::parse_entity_reply;
use super::models::{NerResponse, TransliterationResponse};
use super::prompts::{ner_prompt, transliteration_prompt};

/// Transliteration and entity extraction on top of an oracle
#[derive(Debug, Clone)]
pub struct TransliterationService {
    /// The completion oracle
    oracle: Arc<dyn Oracle>,

    /// Source language or script name used in prompts
    source_language: String,

    /// Target language or script name used in prompts
    target_language: String,
}

impl TransliterationService {
    /// Create a service with already resolved language names
    pub fn new(
        oracle: Arc<dyn Oracle>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            oracle,
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }

    /// Create a service from the application configuration
    pub fn from_config(config: &Config, oracle: Arc<dyn Oracle>) -> Result<Self> {
        Ok(Self::new(
            oracle,
            config.source_language_name()?,
            config.target_language_name()?,
        ))
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Model identifier of the underlying oracle
    pub fn model(&self) -> &str {
        self.oracle.model()
    }

    /// Transliterate typed text.
    ///
    /// Empty text is rejected before the oracle is called.
    pub async fn transliterate_text(&self, text: &str) -> Result<TransliterationResponse, ServiceError> {
        if text.is_empty() {
            return Err(ServiceError::validation("Please provide text input."));
        }

        let transliterated_text = self.transliterate(text).await?;

        Ok(TransliterationResponse {
            original_text: text.to_string(),
            transliterated_text,
        })
    }

    /// Transliterate the text of a .docx payload
    pub async fn transliterate_document(&self, bytes: &[u8]) -> Result<TransliterationResponse, ServiceError> {
        let text = document::extract_text(bytes)?;
        debug!("Extracted {} characters from document", text.chars().count());

        let transliterated_text = self.transliterate(&text).await?;

        Ok(TransliterationResponse {
            original_text: text,
            transliterated_text,
        })
    }

    /// Extract named entities from a .docx payload and transliterate them
    pub async fn extract_entities(&self, bytes: &[u8]) -> Result<NerResponse, ServiceError> {
        let text = document::extract_text(bytes)?;
        debug!("Extracted {} characters from document", text.chars().count());

        let prompt = ner_prompt(&self.target_language, &text);
        let reply = self.oracle.generate(&prompt).await?;
        debug!("Entity reply: {}", reply);

        let entities = parse_entity_reply(&reply)?;
        debug!("Parsed {} entities", entities.len());

        Ok(NerResponse { entities })
    }

    async fn transliterate(&self, text: &str) -> Result<String, ServiceError> {
        let prompt = transliteration_prompt(&self.source_language, &self.target_language, text);
        let reply = self.oracle.generate(&prompt).await?;
        Ok(reply.trim().to_string())
    }
}
