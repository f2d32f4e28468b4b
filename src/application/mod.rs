//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) and query handlers (read) are kept separate.

pub mod handlers;

pub use handlers::{
    // Reply handlers
    GenerateReplyCommand, GenerateReplyHandler, ReplySettings,
    // Template handlers
    CreateTemplateCommand, CreateTemplateHandler, DeleteTemplateCommand, DeleteTemplateHandler,
    GetTemplateHandler, GetTemplateQuery, ListTagsHandler, ListTemplatesHandler,
    ListTemplatesQuery, UpdateTemplateCommand, UpdateTemplateHandler,
};
