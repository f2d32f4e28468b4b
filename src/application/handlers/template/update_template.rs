//! UpdateTemplateHandler - Command handler for partial template updates.

use std::sync::Arc;

use crate::domain::foundation::TemplateId;
use crate::domain::template::{Template, TemplateChanges, TemplateError};
use crate::ports::TemplateRepository;

/// Command to update a template. `None` fields are left unchanged; `Some`
/// tags replace the whole tag set.
#[derive(Debug, Clone)]
pub struct UpdateTemplateCommand {
    pub template_id: TemplateId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Handler for updating templates.
pub struct UpdateTemplateHandler {
    repository: Arc<dyn TemplateRepository>,
}

impl UpdateTemplateHandler {
    pub fn new(repository: Arc<dyn TemplateRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateTemplateCommand) -> Result<Template, TemplateError> {
        // An unknown id wins over invalid input.
        if self.repository.find_by_id(cmd.template_id).await?.is_none() {
            return Err(TemplateError::not_found(cmd.template_id));
        }

        let changes = TemplateChanges::new(cmd.title, cmd.content, cmd.tags)?;
        let updated = self.repository.update(cmd.template_id, changes).await?;

        tracing::info!(template_id = %updated.id(), "Template updated");
        Ok(updated)
    }
}
