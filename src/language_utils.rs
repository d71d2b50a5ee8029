//! Language utilities for the configured source and target scripts
//!
//! Settings may name a language ("Assamese"), a script ("Latin") or give an
//! ISO 639-1 / ISO 639-2 code ("as", "asm"). Prompts always carry a readable
//! name, so codes are resolved to their English name here.

use anyhow::{Result, anyhow};
use isolang::Language;

/// Map an ISO 639-2/B code to its ISO 639-2/T equivalent
fn bibliographic_to_terminology(code: &str) -> Option<&'static str> {
    match code {
        "fre" => Some("fra"),
        "ger" => Some("deu"),
        "dut" => Some("nld"),
        "gre" => Some("ell"),
        "chi" => Some("zho"),
        "cze" => Some("ces"),
        "ice" => Some("isl"),
        "alb" => Some("sqi"),
        "arm" => Some("hye"),
        "baq" => Some("eus"),
        "bur" => Some("mya"),
        "per" => Some("fas"),
        "geo" => Some("kat"),
        "may" => Some("msa"),
        "mac" => Some("mkd"),
        "rum" => Some("ron"),
        "slo" => Some("slk"),
        "wel" => Some("cym"),
        _ => None,
    }
}

/// Normalize a language code to ISO 639-2/T (3-letter) format
pub fn normalize_to_part2t(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    if normalized_code.len() == 2 {
        if let Some(lang) = Language::from_639_1(&normalized_code) {
            return Ok(lang.to_639_3().to_string());
        }
    } else if normalized_code.len() == 3 {
        if Language::from_639_3(&normalized_code).is_some() {
            return Ok(normalized_code);
        }
        if let Some(part2t) = bibliographic_to_terminology(&normalized_code) {
            return Ok(part2t.to_string());
        }
    }

    Err(anyhow!("Cannot normalize invalid language code: {}", code))
}

/// Get the English language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_to_part2t(code)?;
    let lang = Language::from_639_3(&normalized)
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", normalized))?;

    Ok(lang.to_name().to_string())
}

/// Check whether a setting looks like an ISO code rather than a name
fn looks_like_code(value: &str) -> bool {
    (2..=3).contains(&value.len()) && value.chars().all(|c| c.is_ascii_lowercase())
}

/// Resolve a configured language or script setting to the name used in prompts
///
/// Lowercase 2/3-letter values that are valid ISO codes become the English
/// language name. Any other non-blank value is returned trimmed, unchanged.
pub fn resolve_language_name(setting: &str) -> Result<String> {
    let trimmed = setting.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("Language setting cannot be empty"));
    }

    if looks_like_code(trimmed) {
        if let Ok(name) = get_language_name(trimmed) {
            return Ok(name);
        }
    }

    Ok(trimmed.to_string())
}
