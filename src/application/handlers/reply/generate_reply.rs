//! GenerateReplyHandler - Drafts or revises a customer reply.
//!
//! Two flows:
//!
//! - **Standard**: one completion with the requested model and full budget.
//! - **Technical**: a reasoning model drafts with half the budget (floored at
//!   2000 total), then a chat model rewrites that draft for the customer with
//!   the other half. Only the rewrite is cleaned and returned.
//!
//! Any provider failure aborts the whole call; the technical flow never falls
//! back to the standard one.

use std::sync::Arc;

use crate::domain::foundation::TemplateId;
use crate::domain::reply::prompts::{refine_instruction, REFINING_SYSTEM_PROMPT};
use crate::domain::reply::{
    build_messages, clean, parameters_for, require_customer_email, GenerationRequest,
    ModelChoice, ReplyError, TokenBudget, TECHNICAL_DRAFT_MODEL, TECHNICAL_REFINE_MODEL,
};
use crate::ports::{AIProvider, CompletionRequest, Message, ReasoningEffort, TemplateRepository};

/// Command to generate a reply. Optional text fields may be empty strings.
#[derive(Debug, Clone, Default)]
pub struct GenerateReplyCommand {
    pub customer_email: String,
    pub previous_response: Option<String>,
    pub modification_request: Option<String>,
    pub customer_notes: Option<String>,
    pub template_id: Option<i64>,
    /// Model identifier or `"technical"`; defaults when absent or blank.
    pub model: Option<String>,
    /// Total token budget; defaults when absent.
    pub token_limit: Option<i64>,
}

/// Generation defaults applied by the handler.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplySettings {
    pub default_model: String,
    pub default_token_limit: u32,
    pub temperature: f32,
    pub reasoning_effort: ReasoningEffort,
}

impl Default for ReplySettings {
    fn default() -> Self {
        Self {
            default_model: "gpt-4o-mini".to_string(),
            default_token_limit: 500,
            temperature: 0.7,
            reasoning_effort: ReasoningEffort::Medium,
        }
    }
}

/// Handler for reply generation.
pub struct GenerateReplyHandler {
    /// `None` when no API key is configured.
    provider: Option<Arc<dyn AIProvider>>,
    templates: Arc<dyn TemplateRepository>,
    settings: ReplySettings,
}

impl GenerateReplyHandler {
    pub fn new(
        provider: Option<Arc<dyn AIProvider>>,
        templates: Arc<dyn TemplateRepository>,
        settings: ReplySettings,
    ) -> Self {
        Self {
            provider,
            templates,
            settings,
        }
    }

    pub async fn handle(&self, cmd: GenerateReplyCommand) -> Result<String, ReplyError> {
        // 1. Preconditions: credential, then input
        let provider = self.provider.as_ref().ok_or_else(ReplyError::missing_api_key)?;
        let request = self.build_request(cmd)?;

        // 2. Conversation
        let template_content = match request.template_id {
            Some(id) if !request.is_modification() => self.template_content(id).await,
            _ => None,
        };
        let messages = build_messages(&request, template_content.as_deref());

        // 3. Completion(s)
        let raw = match &request.model {
            ModelChoice::Standard(model) => {
                tracing::info!(model = %model, modification = request.is_modification(), "Generating reply");
                tracing::debug!(max_tokens = request.token_budget.get(), "Token budget");
                self.complete(provider, model, request.token_budget.get(), messages)
                    .await?
            }
            ModelChoice::Technical => {
                let (draft_budget, refine_budget) = request.token_budget.technical_split();
                tracing::info!(
                    draft_model = TECHNICAL_DRAFT_MODEL,
                    refine_model = TECHNICAL_REFINE_MODEL,
                    modification = request.is_modification(),
                    "Generating technical reply"
                );
                tracing::debug!(draft_budget, refine_budget, "Token budget split");

                let draft = self
                    .complete(provider, TECHNICAL_DRAFT_MODEL, draft_budget, messages)
                    .await?;
                let refine_messages = vec![
                    Message::system(REFINING_SYSTEM_PROMPT),
                    Message::user(refine_instruction(&draft)),
                ];
                self.complete(provider, TECHNICAL_REFINE_MODEL, refine_budget, refine_messages)
                    .await?
            }
        };

        // 4. Cleanup
        Ok(clean(&raw))
    }

    fn build_request(&self, cmd: GenerateReplyCommand) -> Result<GenerationRequest, ReplyError> {
        require_customer_email(&cmd.customer_email)?;

        let model: ModelChoice = cmd
            .model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| self.settings.default_model.clone())
            .parse()?;
        let budget = TokenBudget::new(
            cmd.token_limit
                .unwrap_or_else(|| i64::from(self.settings.default_token_limit)),
        )?;

        let mut request = GenerationRequest::new(cmd.customer_email, model, budget);

        if let Some(text) = cmd.previous_response {
            request = request.with_previous_response(text);
        }
        if let Some(text) = cmd.modification_request {
            request = request.with_modification_request(text);
        }
        if let Some(text) = cmd.customer_notes {
            request = request.with_customer_notes(text);
        }
        if let Some(id) = cmd.template_id {
            request = request.with_template(TemplateId::new(id));
        }

        Ok(request)
    }

    /// Resolves template text. Lookup failures only cost the template.
    async fn template_content(&self, id: TemplateId) -> Option<String> {
        match self.templates.find_by_id(id).await {
            Ok(Some(template)) => Some(template.content().to_string()),
            Ok(None) => {
                tracing::warn!(template_id = %id, "Template not found, continuing without it");
                None
            }
            Err(e) => {
                tracing::warn!(template_id = %id, error = %e, "Template lookup failed, continuing without it");
                None
            }
        }
    }

    /// One provider call with the parameters its model family accepts.
    async fn complete(
        &self,
        provider: &Arc<dyn AIProvider>,
        model: &str,
        max_tokens: u32,
        messages: Vec<Message>,
    ) -> Result<String, ReplyError> {
        let params = parameters_for(model);
        let mut request = CompletionRequest::new(model, max_tokens).with_messages(messages);
        if params.uses_reasoning {
            request = request
                .with_max_completion_tokens(max_tokens)
                .with_reasoning_effort(self.settings.reasoning_effort);
        } else if params.supports_temperature {
            request = request.with_temperature(self.settings.temperature);
        }

        match provider.complete(request).await {
            Ok(response) => Ok(response.content),
            Err(e) => {
                tracing::error!(model = %model, error = %e, "Completion failed");
                Err(e.into())
            }
        }
    }
}
