//! DTOs for template endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::template::{Tag, Template};

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Query string for `GET /api/templates`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListTemplatesParams {
    pub search: Option<String>,
    pub tag: Option<String>,
}

/// Body for `POST /api/templates`. Missing fields are reported as
/// validation errors rather than deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTemplateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Body for `PUT /api/templates/:id`; any subset of fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTemplateRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
    pub tags: Vec<String>,
}

impl From<Template> for TemplateResponse {
    fn from(template: Template) -> Self {
        Self {
            id: template.id().as_i64(),
            title: template.title().to_string(),
            content: template.content().to_string(),
            created_at: template.created_at().to_iso8601(),
            updated_at: template.updated_at().to_iso8601(),
            tags: template.tag_names(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.as_i64(),
            name: tag.name.into_inner(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
