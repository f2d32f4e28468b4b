//! DTOs for the reply endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::reply::GenerateReplyCommand;

/// Body for `POST /generate_response`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateResponseRequest {
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub previous_response: Option<String>,
    #[serde(default)]
    pub modification_request: Option<String>,
    #[serde(default)]
    pub template_id: Option<i64>,
    #[serde(default)]
    pub customer_notes: Option<String>,
    /// A model identifier or `"technical"`.
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub token_limit: Option<i64>,
}

impl From<GenerateResponseRequest> for GenerateReplyCommand {
    fn from(req: GenerateResponseRequest) -> Self {
        Self {
            customer_email: req.customer_email.unwrap_or_default(),
            previous_response: req.previous_response,
            modification_request: req.modification_request,
            customer_notes: req.customer_notes,
            template_id: req.template_id,
            model: req.model,
            token_limit: req.token_limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponseResponse {
    pub response: String,
}
