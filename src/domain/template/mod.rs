//! Template module - reusable reply templates and their tags.
//!
//! Templates are many-to-many with tags. Tags are shared by name across the
//! whole store and survive the deletion of every template that used them.

mod aggregate;
mod errors;
mod tag;

pub use aggregate::{NewTemplate, Template, TemplateChanges, TemplateFilter, MAX_TITLE_LENGTH};
pub use errors::TemplateError;
pub use tag::{Tag, TagName, MAX_TAG_NAME_LENGTH};
