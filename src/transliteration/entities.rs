/*!
 * Parsing of the oracle's entity reply.
 *
 * Models are asked for a bare JSON object but often wrap it in prose or a
 * markdown code fence. Parsing is best effort: the whole reply first, then
 * the first fenced block, then give up and hand the raw reply back.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ServiceError;
use super::models::EntityMap;

/// First fenced block, optionally tagged `json`, spanning lines
static FENCED_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json)?(.*?)```").expect("fenced block pattern is valid")
});

/// Parse a reply into an entity map.
///
/// Any JSON object is accepted and returned unchanged. Returns
/// `ServiceError::UnparseableReply` carrying the trimmed reply when neither
/// the reply nor its first fenced block is a JSON object.
pub fn parse_entity_reply(reply: &str) -> Result<EntityMap, ServiceError> {
    let trimmed = reply.trim();

    if let Ok(entities) = serde_json::from_str::<EntityMap>(trimmed) {
        return Ok(entities);
    }

    extract_fenced_block(trimmed)
        .and_then(|inner| serde_json::from_str::<EntityMap>(inner).ok())
        .ok_or_else(|| ServiceError::UnparseableReply {
            reply: trimmed.to_string(),
        })
}

/// Inner content of the first fenced code block, trimmed
fn extract_fenced_block(text: &str) -> Option<&str> {
    FENCED_BLOCK.captures(text)
        .and_then(|captures| captures.get(1))
        .map(|inner| inner.as_str().trim())
}
