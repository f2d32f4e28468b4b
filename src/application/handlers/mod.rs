//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod reply;
pub mod template;

pub use reply::{GenerateReplyCommand, GenerateReplyHandler, ReplySettings};
pub use template::{
    CreateTemplateCommand, CreateTemplateHandler, DeleteTemplateCommand, DeleteTemplateHandler,
    GetTemplateHandler, GetTemplateQuery, ListTagsHandler, ListTemplatesHandler,
    ListTemplatesQuery, UpdateTemplateCommand, UpdateTemplateHandler,
};
