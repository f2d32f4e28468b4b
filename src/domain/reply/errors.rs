//! Reply generation error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::AIError;

/// Message reported when no provider credential is configured.
pub const MISSING_API_KEY_MESSAGE: &str =
    "OpenAI API key is not configured. Please check your environment variables.";

/// Errors from drafting or revising a reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyError {
    /// Caller input was missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The service cannot generate anything until it is reconfigured.
    #[error("{0}")]
    Configuration(String),

    /// A completion call failed; the whole generation is aborted.
    #[error("Error generating response: {0}")]
    Provider(#[from] AIError),
}

impl ReplyError {
    pub fn validation(message: impl Into<String>) -> Self {
        ReplyError::Validation(message.into())
    }

    pub fn missing_api_key() -> Self {
        ReplyError::Configuration(MISSING_API_KEY_MESSAGE.to_string())
    }
}

impl From<ValidationError> for ReplyError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyField { ref field } if field == "customer_email" => {
                ReplyError::Validation("Customer email is required".to_string())
            }
            other => ReplyError::Validation(other.to_string()),
        }
    }
}
