//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::ports::ReasoningEffort;

/// Upper bound for a single provider call.
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// AI provider configuration
///
/// A missing API key is not a startup error: the service still serves the
/// template endpoints and reports the missing key on each generate request.
/// The key is wrapped in a `Secret` once it reaches the provider adapter.
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Chat-completions API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Provider request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Model used when a request names none
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Token budget used when a request gives none
    #[serde(default = "default_token_limit")]
    pub default_token_limit: u32,

    /// Reasoning effort sent to reasoning models
    #[serde(default)]
    pub reasoning_effort: ReasoningEffort,

    /// Temperature sent to models that accept it
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The configured key, if it is non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Check if OpenAI is configured
    pub fn has_openai(&self) -> bool {
        self.api_key().is_some()
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidAiBaseUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.default_model.trim().is_empty() {
            return Err(ValidationError::EmptyDefaultModel);
        }
        if self.default_token_limit == 0 {
            return Err(ValidationError::InvalidTokenLimit);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            default_model: default_model(),
            default_token_limit: default_token_limit(),
            reasoning_effort: ReasoningEffort::default(),
            temperature: default_temperature(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_token_limit() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}
