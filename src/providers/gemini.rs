use std::time::Duration;
use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use reqwest::{Client, StatusCode};
use log::{debug, error};

use crate::errors::OracleError;
use crate::providers::Oracle;

/// Default public endpoint of the Generative Language API
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Gemini client for interacting with the Generative Language API
pub struct GeminiOracle {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Model identifier, e.g. "gemini-1.5-flash"
    model: String,
    /// API endpoint URL (defaults to the public API when empty)
    endpoint: String,
    /// Sampling temperature, model default when unset
    temperature: Option<f32>,
}

impl std::fmt::Debug for GeminiOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The API key is deliberately left out
        f.debug_struct("GeminiOracle")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// generateContent request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation turns, a single user turn for this application
    pub contents: Vec<GeminiContent>,

    /// Sampling parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One turn of the conversation
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Role of the author (user, model)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Content parts of the turn
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// A single part of a turn; only text parts are used here
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Generation parameters
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// generateContent response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiResponse {
    /// Candidate completions
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,

    /// Feedback about the prompt, present when it was blocked
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,

    /// Token usage information
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

/// A candidate completion
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Token usage information
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u64,
    #[serde(default)]
    pub candidates_token_count: u64,
    #[serde(default)]
    pub total_token_count: u64,
}

/// Error envelope returned by the API on failure
#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    #[serde(default)]
    message: String,
}

impl GeminiRequest {
    /// Create a request holding a single user prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart { text: Some(prompt.into()) }],
            }],
            generation_config: None,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.generation_config = Some(GenerationConfig {
            temperature: Some(temperature),
        });
        self
    }
}

impl GeminiOracle {
    /// Create a new Gemini client
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into(),
            temperature: None,
        }
    }

    /// Set the sampling temperature sent with every request
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Full URL of the generateContent method for the configured model
    pub fn api_url(&self) -> String {
        let base = if self.endpoint.is_empty() {
            DEFAULT_GEMINI_ENDPOINT
        } else {
            self.endpoint.trim_end_matches('/')
        };
        format!("{}/v1beta/models/{}:generateContent", base, self.model)
    }

    /// Send a generateContent request
    pub async fn complete(&self, request: &GeminiRequest) -> Result<GeminiResponse, OracleError> {
        let response = self.client.post(self.api_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    OracleError::ConnectionError(e.to_string())
                } else {
                    OracleError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(Self::map_status_error(status, &error_text));
        }

        response.json::<GeminiResponse>().await
            .map_err(|e| OracleError::ParseError(e.to_string()))
    }

    /// Turn a non-success HTTP status into an oracle error
    pub fn map_status_error(status: StatusCode, body: &str) -> OracleError {
        let message = serde_json::from_str::<GeminiErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.to_string());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                OracleError::AuthenticationError(message)
            }
            _ => OracleError::ApiError {
                status_code: status.as_u16(),
                message,
            },
        }
    }

    /// Extract text from the first candidate of a response
    pub fn extract_text_from_response(response: &GeminiResponse) -> Result<String, OracleError> {
        let text: String = response.candidates.first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content.parts.iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();

        if !text.is_empty() {
            return Ok(text);
        }

        let reason = response.prompt_feedback.as_ref()
            .and_then(|feedback| feedback.block_reason.clone())
            .or_else(|| {
                response.candidates.first()
                    .and_then(|candidate| candidate.finish_reason.clone())
            })
            .unwrap_or_else(|| "no candidates returned".to_string());

        Err(OracleError::EmptyResponse(reason))
    }
}

#[async_trait]
impl Oracle for GeminiOracle {
    async fn generate(&self, prompt: &str) -> Result<String, OracleError> {
        let mut request = GeminiRequest::new(prompt);
        if let Some(temperature) = self.temperature {
            request = request.temperature(temperature);
        }

        let response = self.complete(&request).await?;
        if let Some(usage) = &response.usage_metadata {
            debug!(
                "Gemini usage: prompt={} completion={} total={}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        Self::extract_text_from_response(&response)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
