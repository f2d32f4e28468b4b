//! HTTP adapter for template and tag endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateTemplateRequest, ListTemplatesParams, MessageResponse, TagResponse, TemplateResponse,
    UpdateTemplateRequest,
};
pub use handlers::TemplateHandlers;
pub use routes::template_routes;
