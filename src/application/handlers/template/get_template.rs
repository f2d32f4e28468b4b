//! GetTemplateHandler - Query handler for retrieving one template.

use std::sync::Arc;

use crate::domain::foundation::TemplateId;
use crate::domain::template::{Template, TemplateError};
use crate::ports::TemplateRepository;

/// Query to get a template by ID.
#[derive(Debug, Clone)]
pub struct GetTemplateQuery {
    pub template_id: TemplateId,
}

/// Handler for retrieving template details.
pub struct GetTemplateHandler {
    repository: Arc<dyn TemplateRepository>,
}

impl GetTemplateHandler {
    pub fn new(repository: Arc<dyn TemplateRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetTemplateQuery) -> Result<Template, TemplateError> {
        self.repository
            .find_by_id(query.template_id)
            .await?
            .ok_or_else(|| TemplateError::not_found(query.template_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryTemplateRepository;
    use crate::domain::template::NewTemplate;

    #[tokio::test]
    async fn returns_existing_template() {
        let repo = Arc::new(InMemoryTemplateRepository::new());
        let created = repo
            .create(NewTemplate::new("Hello", "Hi there", ["greeting"]).unwrap())
            .await
            .unwrap();

        let handler = GetTemplateHandler::new(repo);
        let template = handler
            .handle(GetTemplateQuery {
                template_id: created.id(),
            })
            .await
            .unwrap();

        assert_eq!(template, created);
    }

    #[tokio::test]
    async fn missing_template_is_not_found() {
        let handler = GetTemplateHandler::new(Arc::new(InMemoryTemplateRepository::new()));
        let result = handler
            .handle(GetTemplateQuery {
                template_id: TemplateId::new(7),
            })
            .await;

        assert_eq!(result, Err(TemplateError::NotFound(TemplateId::new(7))));
    }
}
