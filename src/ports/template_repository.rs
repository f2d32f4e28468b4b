//! Template repository port.
//!
//! Defines the contract for persisting reply templates and their tags.
//!
//! # Design
//!
//! - **Store-assigned identity**: ids and timestamps come back from `create`
//! - **Shared tags**: tag names resolve to an existing tag or create one;
//!   tags are never deleted by template operations
//! - **Last write wins**: no optimistic locking on concurrent edits

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TemplateId};
use crate::domain::template::{NewTemplate, Tag, Template, TemplateChanges, TemplateFilter};

/// Repository port for templates and tags.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// List templates in stable store order.
    ///
    /// - `filter.search`: case-insensitive substring of title or content
    /// - `filter.tag`: exact tag name; an unknown name applies no tag filter
    async fn list(&self, filter: &TemplateFilter) -> Result<Vec<Template>, DomainError>;

    /// Find a template by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: TemplateId) -> Result<Option<Template>, DomainError>;

    /// Insert a new template, resolving its tag names.
    ///
    /// `created_at` and `updated_at` are set to the same instant.
    async fn create(&self, template: NewTemplate) -> Result<Template, DomainError>;

    /// Apply a partial update and refresh `updated_at`.
    ///
    /// # Errors
    ///
    /// - `TemplateNotFound` if the template doesn't exist
    async fn update(&self, id: TemplateId, changes: TemplateChanges)
        -> Result<Template, DomainError>;

    /// Delete a template and its tag associations (tags themselves remain).
    ///
    /// # Errors
    ///
    /// - `TemplateNotFound` if the template doesn't exist
    async fn delete(&self, id: TemplateId) -> Result<(), DomainError>;

    /// All tags in store order.
    async fn list_tags(&self) -> Result<Vec<Tag>, DomainError>;
}
