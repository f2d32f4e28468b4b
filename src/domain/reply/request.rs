//! Generation request value objects.

use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{TemplateId, ValidationError};

/// Sentinel model name selecting the two-step technical flow.
pub const TECHNICAL_MODE: &str = "technical";

/// Minimum total token budget for the technical flow, before splitting.
pub const TECHNICAL_TOKEN_FLOOR: u32 = 2000;

/// Reasoning model writing the technically detailed first draft.
pub const TECHNICAL_DRAFT_MODEL: &str = "o4-mini";

/// Chat model rewording the draft for the customer.
pub const TECHNICAL_REFINE_MODEL: &str = "gpt-4.1";

/// Which generation flow to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelChoice {
    /// Single call to a concrete model.
    Standard(String),
    /// Draft with a reasoning model, then rewrite with a chat model.
    Technical,
}

impl FromStr for ModelChoice {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ValidationError::empty_field("model"));
        }
        if s == TECHNICAL_MODE {
            Ok(ModelChoice::Technical)
        } else {
            Ok(ModelChoice::Standard(s.to_string()))
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelChoice::Standard(model) => f.write_str(model),
            ModelChoice::Technical => f.write_str(TECHNICAL_MODE),
        }
    }
}

/// Positive token budget for one generate call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TokenBudget(u32);

impl TokenBudget {
    /// # Errors
    ///
    /// - `InvalidFormat` unless `1 <= tokens <= u32::MAX`
    pub fn new(tokens: i64) -> Result<Self, ValidationError> {
        match u32::try_from(tokens) {
            Ok(t) if t > 0 => Ok(Self(t)),
            _ => Err(ValidationError::invalid_format(
                "token_limit",
                "must be a positive integer",
            )),
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Raises the budget to the technical floor, then splits it across the
    /// two calls. The second half receives any odd token.
    pub fn technical_split(&self) -> (u32, u32) {
        let total = self.0.max(TECHNICAL_TOKEN_FLOOR);
        let first = total / 2;
        (first, total - first)
    }
}

/// Transient request to draft or revise a reply.
///
/// Optional text fields are `None` when the caller sent nothing or an empty
/// string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub customer_email: String,
    pub previous_response: Option<String>,
    pub modification_request: Option<String>,
    pub customer_notes: Option<String>,
    pub template_id: Option<TemplateId>,
    pub model: ModelChoice,
    pub token_budget: TokenBudget,
}

impl GenerationRequest {
    pub fn new(customer_email: impl Into<String>, model: ModelChoice, token_budget: TokenBudget) -> Self {
        Self {
            customer_email: customer_email.into(),
            previous_response: None,
            modification_request: None,
            customer_notes: None,
            template_id: None,
            model,
            token_budget,
        }
    }

    pub fn with_previous_response(mut self, text: impl Into<String>) -> Self {
        self.previous_response = non_empty(Some(text.into()));
        self
    }

    pub fn with_modification_request(mut self, text: impl Into<String>) -> Self {
        self.modification_request = non_empty(Some(text.into()));
        self
    }

    pub fn with_customer_notes(mut self, text: impl Into<String>) -> Self {
        self.customer_notes = non_empty(Some(text.into()));
        self
    }

    pub fn with_template(mut self, id: TemplateId) -> Self {
        self.template_id = Some(id);
        self
    }

    /// True when revising an earlier draft rather than writing a new one.
    pub fn is_modification(&self) -> bool {
        self.previous_response.is_some()
    }
}

/// Checks the one required input. Runs before any other request parsing so a
/// blank email is always the error reported.
///
/// # Errors
///
/// - `EmptyField` if the customer email is blank
pub fn require_customer_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::empty_field("customer_email"));
    }
    Ok(())
}

/// Maps empty strings to `None`.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
