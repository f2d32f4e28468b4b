//! In-Memory Template Repository
//!
//! Same semantics as the Postgres adapter: ascending-id store order, shared
//! tags that outlive their templates, unknown tag filters ignored.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, TagId, TemplateId, Timestamp};
use crate::domain::template::{
    NewTemplate, Tag, TagName, Template, TemplateChanges, TemplateFilter,
};
use crate::ports::TemplateRepository;

/// In-memory storage for templates and tags
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplateRepository {
    state: Arc<RwLock<State>>,
}

#[derive(Debug, Default)]
struct State {
    templates: BTreeMap<TemplateId, Template>,
    tags: Vec<Tag>,
    last_template_id: i64,
    last_tag_id: i64,
}

impl State {
    fn find_tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name.as_str() == name)
    }

    /// Reuses existing tags by exact name, creating the rest.
    fn resolve_tags(&mut self, names: &[TagName]) -> Vec<Tag> {
        names
            .iter()
            .map(|name| match self.find_tag(name.as_str()) {
                Some(tag) => tag.clone(),
                None => {
                    self.last_tag_id += 1;
                    let tag = Tag::new(TagId::new(self.last_tag_id), name.clone());
                    self.tags.push(tag.clone());
                    tag
                }
            })
            .collect()
    }
}

impl InMemoryTemplateRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored templates
    pub async fn template_count(&self) -> usize {
        self.state.read().await.templates.len()
    }
}

fn not_found(id: TemplateId) -> DomainError {
    DomainError::new(
        ErrorCode::TemplateNotFound,
        format!("Template not found: {}", id),
    )
    .with_detail("template_id", id.to_string())
}

#[async_trait]
impl TemplateRepository for InMemoryTemplateRepository {
    async fn list(&self, filter: &TemplateFilter) -> Result<Vec<Template>, DomainError> {
        let state = self.state.read().await;
        let tag = filter.tag.as_deref().and_then(|name| state.find_tag(name));

        Ok(state
            .templates
            .values()
            .filter(|t| filter.search.as_deref().map_or(true, |s| t.matches_search(s)))
            .filter(|t| tag.map_or(true, |tag| t.has_tag(tag.name.as_str())))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: TemplateId) -> Result<Option<Template>, DomainError> {
        Ok(self.state.read().await.templates.get(&id).cloned())
    }

    async fn create(&self, template: NewTemplate) -> Result<Template, DomainError> {
        let mut state = self.state.write().await;
        let tags = state.resolve_tags(&template.tag_names);

        state.last_template_id += 1;
        let id = TemplateId::new(state.last_template_id);
        let now = Timestamp::now();
        let created = Template::reconstitute(id, template.title, template.content, tags, now, now);

        state.templates.insert(id, created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: TemplateId,
        changes: TemplateChanges,
    ) -> Result<Template, DomainError> {
        let mut state = self.state.write().await;
        if !state.templates.contains_key(&id) {
            return Err(not_found(id));
        }

        let tags = changes
            .tag_names
            .as_deref()
            .map(|names| state.resolve_tags(names));
        let template = state.templates.get_mut(&id).ok_or_else(|| not_found(id))?;
        template.apply(changes, tags, Timestamp::now());

        Ok(template.clone())
    }

    async fn delete(&self, id: TemplateId) -> Result<(), DomainError> {
        self.state
            .write()
            .await
            .templates
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, DomainError> {
        Ok(self.state.read().await.tags.clone())
    }
}
