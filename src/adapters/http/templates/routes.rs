//! Axum router configuration for template endpoints.

use axum::{routing::get, Router};

use super::handlers::{
    create_template, delete_template, get_template, list_tags, list_templates, update_template,
    TemplateHandlers,
};

/// Creates the template router, mounted at the root.
///
/// # Routes
///
/// - `GET    /api/templates`     - List templates (`?search=`, `?tag=`)
/// - `POST   /api/templates`     - Create a template
/// - `GET    /api/templates/:id` - Get a template
/// - `PUT    /api/templates/:id` - Update a template
/// - `DELETE /api/templates/:id` - Delete a template
/// - `GET    /api/tags`          - List all tags
pub fn template_routes(handlers: TemplateHandlers) -> Router {
    Router::new()
        .route("/api/templates", get(list_templates).post(create_template))
        .route(
            "/api/templates/:id",
            get(get_template).put(update_template).delete(delete_template),
        )
        .route("/api/tags", get(list_tags))
        .with_state(handlers)
}
