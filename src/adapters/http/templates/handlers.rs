//! HTTP handlers for template endpoints.
//!
//! These handlers connect axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::{
    CreateTemplateRequest, ListTemplatesParams, MessageResponse, TagResponse, TemplateResponse,
    UpdateTemplateRequest,
};
use crate::adapters::http::error::error_response;
use crate::application::handlers::template::{
    CreateTemplateCommand, CreateTemplateHandler, DeleteTemplateCommand, DeleteTemplateHandler,
    GetTemplateHandler, GetTemplateQuery, ListTagsHandler, ListTemplatesHandler,
    ListTemplatesQuery, UpdateTemplateCommand, UpdateTemplateHandler,
};
use crate::domain::foundation::TemplateId;
use crate::domain::template::TemplateError;
use crate::ports::TemplateRepository;

// ════════════════════════════════════════════════════════════════════════════
// Handler State
// ════════════════════════════════════════════════════════════════════════════

/// Application state containing all template handlers
#[derive(Clone)]
pub struct TemplateHandlers {
    pub list_templates: Arc<ListTemplatesHandler>,
    pub get_template: Arc<GetTemplateHandler>,
    pub create_template: Arc<CreateTemplateHandler>,
    pub update_template: Arc<UpdateTemplateHandler>,
    pub delete_template: Arc<DeleteTemplateHandler>,
    pub list_tags: Arc<ListTagsHandler>,
}

impl TemplateHandlers {
    pub fn new(repository: Arc<dyn TemplateRepository>) -> Self {
        Self {
            list_templates: Arc::new(ListTemplatesHandler::new(repository.clone())),
            get_template: Arc::new(GetTemplateHandler::new(repository.clone())),
            create_template: Arc::new(CreateTemplateHandler::new(repository.clone())),
            update_template: Arc::new(UpdateTemplateHandler::new(repository.clone())),
            delete_template: Arc::new(DeleteTemplateHandler::new(repository.clone())),
            list_tags: Arc::new(ListTagsHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Query Handlers (Reads)
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/templates - List templates, optionally filtered
pub async fn list_templates(
    State(handlers): State<TemplateHandlers>,
    Query(params): Query<ListTemplatesParams>,
) -> Response {
    let query = ListTemplatesQuery {
        search: params.search,
        tag: params.tag,
    };

    match handlers.list_templates.handle(query).await {
        Ok(templates) => {
            let body: Vec<TemplateResponse> =
                templates.into_iter().map(TemplateResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_template_error(e),
    }
}

/// GET /api/templates/:id - Get a template by ID
pub async fn get_template(
    State(handlers): State<TemplateHandlers>,
    Path(id): Path<String>,
) -> Response {
    let Some(template_id) = parse_template_id(&id) else {
        return template_not_found();
    };

    match handlers.get_template.handle(GetTemplateQuery { template_id }).await {
        Ok(template) => (StatusCode::OK, Json(TemplateResponse::from(template))).into_response(),
        Err(e) => handle_template_error(e),
    }
}

/// GET /api/tags - List every tag ever created
pub async fn list_tags(State(handlers): State<TemplateHandlers>) -> Response {
    match handlers.list_tags.handle().await {
        Ok(tags) => {
            let body: Vec<TagResponse> = tags.into_iter().map(TagResponse::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_template_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Command Handlers (Writes)
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/templates - Create a new template
pub async fn create_template(
    State(handlers): State<TemplateHandlers>,
    Json(request): Json<CreateTemplateRequest>,
) -> Response {
    // Missing fields surface as validation errors from the domain.
    let cmd = CreateTemplateCommand {
        title: request.title.unwrap_or_default(),
        content: request.content.unwrap_or_default(),
        tags: request.tags.unwrap_or_default(),
    };

    match handlers.create_template.handle(cmd).await {
        Ok(template) => {
            (StatusCode::CREATED, Json(TemplateResponse::from(template))).into_response()
        }
        Err(e) => handle_template_error(e),
    }
}

/// PUT /api/templates/:id - Update any subset of fields
pub async fn update_template(
    State(handlers): State<TemplateHandlers>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTemplateRequest>,
) -> Response {
    let Some(template_id) = parse_template_id(&id) else {
        return template_not_found();
    };

    let cmd = UpdateTemplateCommand {
        template_id,
        title: request.title,
        content: request.content,
        tags: request.tags,
    };

    match handlers.update_template.handle(cmd).await {
        Ok(template) => (StatusCode::OK, Json(TemplateResponse::from(template))).into_response(),
        Err(e) => handle_template_error(e),
    }
}

/// DELETE /api/templates/:id - Delete a template, keeping its tags
pub async fn delete_template(
    State(handlers): State<TemplateHandlers>,
    Path(id): Path<String>,
) -> Response {
    let Some(template_id) = parse_template_id(&id) else {
        return template_not_found();
    };

    match handlers
        .delete_template
        .handle(DeleteTemplateCommand { template_id })
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Template deleted successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_template_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════

/// Non-integer ids can never match a template.
fn parse_template_id(raw: &str) -> Option<TemplateId> {
    raw.parse().ok()
}

fn template_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Template not found")
}

fn handle_template_error(error: TemplateError) -> Response {
    match error {
        TemplateError::NotFound(_) => error_response(StatusCode::NOT_FOUND, error.message()),
        TemplateError::ValidationFailed { .. } => {
            error_response(StatusCode::BAD_REQUEST, error.message())
        }
        TemplateError::Infrastructure(_) => {
            tracing::error!(error = %error, "Template storage failure");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, error.message())
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_template_error(TemplateError::not_found(TemplateId::new(3)));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response = handle_template_error(TemplateError::validation("title", "Title is required"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_template_error(TemplateError::infrastructure("pool closed"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn parses_integer_ids_only() {
        assert_eq!(parse_template_id("12"), Some(TemplateId::new(12)));
        assert_eq!(parse_template_id("abc"), None);
        assert_eq!(parse_template_id("1.5"), None);
    }
}
