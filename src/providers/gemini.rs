use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Public Generative Language API host
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Model used when the configuration does not name one
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Wait before retry number `attempt` (1-based): `base_ms * 2^(attempt-1)`, saturating
pub fn backoff_delay_ms(base_ms: u64, attempt: u32) -> u64 {
    let factor = 1u64.checked_shl(attempt.saturating_sub(1)).unwrap_or(u64::MAX);
    base_ms.saturating_mul(factor)
}

/// Upper bound on one `generate` call: every attempt plus every backoff wait
pub fn call_budget(timeout_secs: u64, max_retries: u32, backoff_base_ms: u64) -> Duration {
    let attempts = u64::from(max_retries).saturating_add(1);
    let backoff_total_ms = (1..=max_retries)
        .map(|attempt| backoff_delay_ms(backoff_base_ms, attempt))
        .fold(0u64, u64::saturating_add);

    Duration::from_secs(timeout_secs.saturating_mul(attempts)).saturating_add(Duration::from_millis(backoff_total_ms))
}

/// Gemini client for the `generateContent` endpoint
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key, sent as the `key` query parameter
    api_key: String,
    /// Model name, e.g. `gemini-2.0-flash`
    model: String,
    /// API host, without the version path
    endpoint: String,
    /// Request timeout in seconds
    timeout_secs: u64,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
    /// Sampling parameters sent with every request
    generation_config: GenerationConfig,
}

impl std::fmt::Debug for Gemini {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gemini")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_retries", &self.max_retries)
            .field("backoff_base_ms", &self.backoff_base_ms)
            .finish_non_exhaustive()
    }
}

/// Sampling parameters for a generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            top_k: 32,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

/// Request body for `generateContent`
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    /// Conversation turns; the assistant only ever sends one
    contents: Vec<GeminiContent>,

    /// Sampling parameters
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

/// One turn of content, made of text parts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Author of the turn, absent on requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Text parts of the turn
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// A single text part
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default)]
    pub text: String,
}

/// Response body of `generateContent`
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    /// Generated candidates, possibly none when the prompt was blocked
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// One generated candidate
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiContent>,

    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Error envelope returned on non-success statuses
#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    #[serde(default)]
    message: String,
}

impl GeminiRequest {
    /// Create a single-prompt request
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                role: None,
                parts: vec![GeminiPart { text: prompt.into() }],
            }],
            generation_config: GenerationConfig::default(),
        }
    }

    /// Replace the sampling parameters
    pub fn generation_config(mut self, generation_config: GenerationConfig) -> Self {
        self.generation_config = generation_config;
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.generation_config.temperature = temperature;
        self
    }

    /// Set the maximum number of output tokens
    pub fn max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.generation_config.max_output_tokens = max_output_tokens;
        self
    }
}

impl Gemini {
    /// Create a new Gemini client with default retry settings
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::new_with_config(api_key, model, endpoint, 30, 3, 1000)
    }

    /// Create a new Gemini client with explicit timeout and retry settings
    pub fn new_with_config(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Self {
        let endpoint = endpoint.into();
        let endpoint = if endpoint.is_empty() {
            DEFAULT_ENDPOINT.to_string()
        } else {
            endpoint
        };
        let model = model.into();
        let model = if model.is_empty() { DEFAULT_MODEL.to_string() } else { model };

        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model,
            endpoint,
            timeout_secs,
            max_retries,
            backoff_base_ms,
            generation_config: GenerationConfig::default(),
        }
    }

    /// Use these sampling parameters for every request
    pub fn with_generation_config(mut self, generation_config: GenerationConfig) -> Self {
        self.generation_config = generation_config;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full request URL, including the API key
    pub fn request_url(&self) -> Result<Url, ProviderError> {
        let raw = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid Gemini endpoint '{}': {}", raw, e)))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    /// Complete a request, retrying server and network failures
    pub async fn complete(&self, request: GeminiRequest) -> Result<GeminiResponse, ProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::AuthenticationError("Gemini API key is not set".to_string()));
        }

        let url = self.request_url()?;
        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            match self.client.post(url.clone()).json(&request).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response
                            .text()
                            .await
                            .map_err(|e| ProviderError::ParseError(format!("Failed to read Gemini response: {}", e)))?;
                        return serde_json::from_str::<GeminiResponse>(&body).map_err(|e| {
                            error!("Failed to parse Gemini API response: {}", e);
                            ProviderError::ParseError(e.to_string())
                        });
                    }

                    let body = response.text().await.unwrap_or_default();
                    let message = Self::error_message(status, &body);

                    if status.is_server_error() {
                        warn!(
                            "Gemini API error ({}): {} - attempt {}/{}",
                            status,
                            message,
                            attempt + 1,
                            self.max_retries + 1
                        );
                        last_error = Some(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message,
                        });
                    } else {
                        error!("Gemini API error ({}): {}", status, message);
                        return Err(Self::client_error(status, message));
                    }
                }
                Err(e) => {
                    let provider_error = if e.is_timeout() {
                        ProviderError::Timeout(self.timeout_secs)
                    } else {
                        ProviderError::ConnectionError(format!("Failed to send request to Gemini API: {}", e))
                    };
                    warn!(
                        "Gemini API network error: {} - attempt {}/{}",
                        provider_error,
                        attempt + 1,
                        self.max_retries + 1
                    );
                    last_error = Some(provider_error);
                }
            }

            attempt += 1;

            if attempt <= self.max_retries {
                let backoff_ms = backoff_delay_ms(self.backoff_base_ms, attempt);
                debug!("Retrying Gemini request in {}ms", backoff_ms);
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::RequestFailed(format!(
                "Gemini API request failed after {} attempts",
                self.max_retries + 1
            ))
        }))
    }

    /// Concatenate the text parts of the first candidate
    pub fn extract_text(response: &GeminiResponse) -> String {
        response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.iter().map(|part| part.text.as_str()).collect())
            .unwrap_or_default()
    }

    /// `error.message` from an error body, else the status reason
    fn error_message(status: StatusCode, body: &str) -> String {
        serde_json::from_str::<GeminiErrorResponse>(body)
            .ok()
            .map(|envelope| envelope.error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string())
    }

    fn client_error(status: StatusCode, message: String) -> ProviderError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthenticationError(message),
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded(message),
            _ => ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl Provider for Gemini {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GeminiRequest::new(prompt).generation_config(self.generation_config.clone());
        let response = self.complete(request).await?;
        let text = Self::extract_text(&response);

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = GeminiRequest::new("Hello").max_output_tokens(10);
        self.complete(request).await?;
        Ok(())
    }
}
