//! Template-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, TemplateId, ValidationError};

/// Template-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Template was not found.
    NotFound(TemplateId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl TemplateError {
    pub fn not_found(id: TemplateId) -> Self {
        TemplateError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        TemplateError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        TemplateError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            TemplateError::NotFound(_) => ErrorCode::TemplateNotFound,
            TemplateError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            TemplateError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            TemplateError::NotFound(id) => format!("Template not found: {}", id),
            TemplateError::ValidationFailed { message, .. } => message.clone(),
            TemplateError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TemplateError {}

impl From<ValidationError> for TemplateError {
    fn from(err: ValidationError) -> Self {
        TemplateError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for TemplateError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::TemplateNotFound => {
                let id = err
                    .details
                    .get("template_id")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(TemplateId::new(0));
                TemplateError::NotFound(id)
            }
            ErrorCode::ValidationFailed => TemplateError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => TemplateError::Infrastructure(err.to_string()),
        }
    }
}
