//! CreateTemplateHandler - Command handler for creating templates.

use std::sync::Arc;

use crate::domain::template::{NewTemplate, Template, TemplateError};
use crate::ports::TemplateRepository;

/// Command to create a template.
#[derive(Debug, Clone, Default)]
pub struct CreateTemplateCommand {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Handler for creating templates.
pub struct CreateTemplateHandler {
    repository: Arc<dyn TemplateRepository>,
}

impl CreateTemplateHandler {
    pub fn new(repository: Arc<dyn TemplateRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateTemplateCommand) -> Result<Template, TemplateError> {
        let template = NewTemplate::new(cmd.title, cmd.content, cmd.tags)?;
        let created = self.repository.create(template).await?;

        tracing::info!(template_id = %created.id(), tags = created.tags().len(), "Template created");
        Ok(created)
    }
}
