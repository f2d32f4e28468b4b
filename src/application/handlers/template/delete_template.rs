//! DeleteTemplateHandler - Command handler for deleting templates.

use std::sync::Arc;

use crate::domain::foundation::TemplateId;
use crate::domain::template::TemplateError;
use crate::ports::TemplateRepository;

/// Command to delete a template. Its tags stay in the store.
#[derive(Debug, Clone)]
pub struct DeleteTemplateCommand {
    pub template_id: TemplateId,
}

/// Handler for deleting templates.
pub struct DeleteTemplateHandler {
    repository: Arc<dyn TemplateRepository>,
}

impl DeleteTemplateHandler {
    pub fn new(repository: Arc<dyn TemplateRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteTemplateCommand) -> Result<(), TemplateError> {
        self.repository.delete(cmd.template_id).await?;
        tracing::info!(template_id = %cmd.template_id, "Template deleted");
        Ok(())
    }
}
