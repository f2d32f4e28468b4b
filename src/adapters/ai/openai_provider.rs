//! OpenAI Provider - Implementation of AIProvider for OpenAI's chat API.
//!
//! The wire payload depends on the model family (see
//! [`parameters_for`](crate::domain::reply::parameters_for)):
//!
//! - Reasoning models get `max_completion_tokens` and `reasoning_effort`,
//!   never `temperature`
//! - Everything else gets `max_tokens` and, when supported, `temperature`
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAIConfig::new(api_key)
//!     .with_base_url("https://api.openai.com/v1")
//!     .with_timeout(Duration::from_secs(120));
//!
//! let provider = OpenAIProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::reply::parameters_for;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message, ReasoningEffort,
    TokenUsage,
};

/// Temperature sent to temperature-capable models when the request has none.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAIConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI API provider implementation.
pub struct OpenAIProvider {
    config: OpenAIConfig,
    client: Client,
}

impl OpenAIProvider {
    /// Creates a new OpenAI provider with the given configuration.
    ///
    /// # Errors
    ///
    /// - `Network` if the HTTP client cannot be built
    pub fn new(config: OpenAIConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Sends a request and maps transport failures.
    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let openai_request = to_openai_request(request);

        self.client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key())
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::network(format!(
                        "Request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    /// Parses a response, mapping non-2xx statuses to provider errors.
    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AIError::network(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(AIError::provider(status.as_u16(), provider_error_message(&body)));
        }

        parse_completion(&body)
    }
}

#[async_trait]
impl AIProvider for OpenAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let response = self.send_request(&request).await?;
        self.parse_response(response).await
    }
}

/// Converts our request to OpenAI's format, choosing fields by model family.
fn to_openai_request(request: &CompletionRequest) -> OpenAIRequest<'_> {
    let params = parameters_for(&request.model);

    let mut wire = OpenAIRequest {
        model: &request.model,
        messages: &request.messages,
        max_tokens: None,
        max_completion_tokens: None,
        reasoning_effort: None,
        temperature: None,
    };

    if params.uses_reasoning {
        wire.max_completion_tokens = Some(request.max_completion_tokens.unwrap_or(request.max_tokens));
        wire.reasoning_effort = Some(request.reasoning_effort.unwrap_or_default());
    } else {
        wire.max_tokens = Some(request.max_tokens);
        if params.supports_temperature {
            wire.temperature = Some(request.temperature.unwrap_or(DEFAULT_TEMPERATURE));
        }
    }

    wire
}

/// Extracts `error.message` from a structured error body, else the raw body.
fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<OpenAIErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error.message)
        .unwrap_or_else(|| body.to_string())
}

/// Parses a successful body into a completion.
fn parse_completion(body: &str) -> Result<CompletionResponse, AIError> {
    let openai_response: OpenAIResponse = serde_json::from_str(body)
        .map_err(|e| AIError::decode(format!("Failed to parse response: {}", e)))?;

    let choice = openai_response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| AIError::decode("No choices in response"))?;

    let content = choice
        .message
        .content
        .ok_or_else(|| AIError::decode("Choice has no message content"))?;

    let mut completion = CompletionResponse::new(openai_response.model, content);
    if let Some(u) = openai_response.usage {
        completion = completion.with_usage(TokenUsage::new(u.prompt_tokens, u.completion_tokens));
    }
    Ok(completion)
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAIRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_completion_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<ReasoningEffort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    #[serde(default)]
    model: String,
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAIMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorBody {
    error: OpenAIErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAIErrorDetail {
    message: Option<String>,
}
