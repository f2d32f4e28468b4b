//! ListTemplatesHandler - Query handler for searching templates.

use std::sync::Arc;

use crate::domain::template::{Template, TemplateError, TemplateFilter};
use crate::ports::TemplateRepository;

/// Query to list templates, optionally filtered.
#[derive(Debug, Clone, Default)]
pub struct ListTemplatesQuery {
    /// Case-insensitive substring of title or content.
    pub search: Option<String>,
    /// Exact tag name. Unknown names apply no tag filter.
    pub tag: Option<String>,
}

/// Handler for listing templates.
pub struct ListTemplatesHandler {
    repository: Arc<dyn TemplateRepository>,
}

impl ListTemplatesHandler {
    pub fn new(repository: Arc<dyn TemplateRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListTemplatesQuery) -> Result<Vec<Template>, TemplateError> {
        let filter = TemplateFilter::new(query.search, query.tag);
        Ok(self.repository.list(&filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryTemplateRepository;
    use crate::domain::foundation::{DomainError, ErrorCode, TemplateId};
    use crate::domain::template::{NewTemplate, Tag, TemplateChanges};
    use async_trait::async_trait;

    struct FailingRepository;

    #[async_trait]
    impl TemplateRepository for FailingRepository {
        async fn list(&self, _filter: &TemplateFilter) -> Result<Vec<Template>, DomainError> {
            Err(DomainError::new(ErrorCode::DatabaseError, "connection reset"))
        }
        async fn find_by_id(&self, _id: TemplateId) -> Result<Option<Template>, DomainError> {
            unimplemented!()
        }
        async fn create(&self, _template: NewTemplate) -> Result<Template, DomainError> {
            unimplemented!()
        }
        async fn update(
            &self,
            _id: TemplateId,
            _changes: TemplateChanges,
        ) -> Result<Template, DomainError> {
            unimplemented!()
        }
        async fn delete(&self, _id: TemplateId) -> Result<(), DomainError> {
            unimplemented!()
        }
        async fn list_tags(&self) -> Result<Vec<Tag>, DomainError> {
            unimplemented!()
        }
    }

    async fn seeded() -> Arc<InMemoryTemplateRepository> {
        let repo = Arc::new(InMemoryTemplateRepository::new());
        for (title, content, tags) in [
            ("Order status", "Your widget shipped", vec!["shipping"]),
            ("Returns", "Send it back within 30 days", vec!["returns"]),
        ] {
            repo.create(NewTemplate::new(title, content, tags).unwrap())
                .await
                .unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn lists_everything_without_filters() {
        let handler = ListTemplatesHandler::new(seeded().await);
        let templates = handler.handle(ListTemplatesQuery::default()).await.unwrap();
        assert_eq!(templates.len(), 2);
    }

    #[tokio::test]
    async fn empty_query_strings_mean_no_filter() {
        let handler = ListTemplatesHandler::new(seeded().await);
        let query = ListTemplatesQuery {
            search: Some(String::new()),
            tag: Some(String::new()),
        };
        assert_eq!(handler.handle(query).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn filters_by_search_term() {
        let handler = ListTemplatesHandler::new(seeded().await);
        let query = ListTemplatesQuery {
            search: Some("Widget".to_string()),
            tag: None,
        };
        let templates = handler.handle(query).await.unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].title(), "Order status");
    }

    #[tokio::test]
    async fn repository_failure_is_infrastructure_error() {
        let handler = ListTemplatesHandler::new(Arc::new(FailingRepository));
        let err = handler.handle(ListTemplatesQuery::default()).await.unwrap_err();
        assert!(matches!(err, TemplateError::Infrastructure(_)));
    }
}
