use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use url::Url;

use crate::language_utils::resolve_language_name;
use crate::providers::gemini::DEFAULT_GEMINI_ENDPOINT;

/// Application configuration module
/// This module holds the settings read once at startup. The value is
/// immutable after validation and shared read-only with every request.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// API key for the completion service
    pub api_key: String,

    /// Source language or script (name or ISO code)
    pub source_language: String,

    /// Target language or script (name or ISO code)
    pub target_language: String,

    /// Model identifier, e.g. "gemini-1.5-flash"
    pub model: String,

    /// Completion service endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Address the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Timeout for a single oracle call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling temperature; the model default is used when unset
    #[serde(default)]
    pub temperature: Option<f32>,

    /// Maximum accepted request body size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the `log` crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(anyhow!("Invalid log level: {}", s)),
        }
    }
}

pub fn default_endpoint() -> String {
    DEFAULT_GEMINI_ENDPOINT.to_string()
}

pub fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}

pub fn default_timeout_secs() -> u64 {
    120
}

pub fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl Config {
    /// Create a configuration with the four required settings and defaults
    /// for everything else
    pub fn new(
        api_key: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
            model: model.into(),
            endpoint: default_endpoint(),
            bind_address: default_bind_address(),
            timeout_secs: default_timeout_secs(),
            temperature: None,
            max_upload_bytes: default_max_upload_bytes(),
            log_level: LogLevel::default(),
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(anyhow!("GEMINI_API_KEY is required"));
        }
        if self.source_language.trim().is_empty() {
            return Err(anyhow!("INPUT_LANG is required"));
        }
        if self.target_language.trim().is_empty() {
            return Err(anyhow!("OUTPUT_LANG is required"));
        }
        if self.model.trim().is_empty() {
            return Err(anyhow!("LLM_MODEL is required"));
        }

        Url::parse(&self.endpoint)
            .map_err(|e| anyhow!("Invalid endpoint URL '{}': {}", self.endpoint, e))?;

        self.socket_addr()?;

        if self.timeout_secs == 0 {
            return Err(anyhow!("Timeout must be greater than zero"));
        }
        if self.max_upload_bytes == 0 {
            return Err(anyhow!("Maximum upload size must be greater than zero"));
        }
        if let Some(temperature) = self.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                return Err(anyhow!("Temperature must be between 0.0 and 2.0, got {}", temperature));
            }
        }

        Ok(())
    }

    /// Parsed bind address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address.parse()
            .map_err(|e| anyhow!("Invalid bind address '{}': {}", self.bind_address, e))
    }

    /// Name of the source language or script as it appears in prompts
    pub fn source_language_name(&self) -> Result<String> {
        resolve_language_name(&self.source_language)
    }

    /// Name of the target language or script as it appears in prompts
    pub fn target_language_name(&self) -> Result<String> {
        resolve_language_name(&self.target_language)
    }
}
