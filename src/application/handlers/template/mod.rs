//! Template command and query handlers.

mod create_template;
mod delete_template;
mod get_template;
mod list_tags;
mod list_templates;
mod update_template;

pub use create_template::{CreateTemplateCommand, CreateTemplateHandler};
pub use delete_template::{DeleteTemplateCommand, DeleteTemplateHandler};
pub use get_template::{GetTemplateHandler, GetTemplateQuery};
pub use list_tags::ListTagsHandler;
pub use list_templates::{ListTemplatesHandler, ListTemplatesQuery};
pub use update_template::{UpdateTemplateCommand, UpdateTemplateHandler};
